//! Module for the remote folder source.
//!
//! [`RemoteStore`] speaks to an HTTP API exposing the folder contract under
//! `{base}/folders`, and satisfies [`FolderSource`] with the same semantics
//! as the local store: HTTP 404 resolves to `None` or a no-op rather than
//! an error, so consumers written against the trait cannot tell the two
//! apart.

use crate::file::File;
use crate::folder::Folder;
use crate::util::ResponseExt;
use crate::FolderSource;
use async_trait::async_trait;
use displaydoc::Display;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::json;
use thiserror::Error as ThisError;
use url::Url;
use uuid::Uuid;

/// Errors that can occur while talking to the remote API.
#[derive(Debug, Display, ThisError)]
pub enum Error {
    /// Failed to send request.
    Request(#[from] reqwest::Error),
    /// Failed to build request URL.
    ParseUrl(#[from] url::ParseError),
    /// Server returned status {0}.
    Status(StatusCode),
}

/// A folder source backed by a remote HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base: Url,
    client: reqwest::Client,
}

impl RemoteStore {
    /// Creates a new [`RemoteStore`] with the given API base URL.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the API base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn request<I>(&self, method: Method, path_segments: I) -> Result<RequestBuilder, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .extend(path_segments);
        Ok(self.client.request(method, url))
    }
}

#[async_trait]
impl FolderSource for RemoteStore {
    type Error = Error;

    async fn create_folder(&mut self, name: &str) -> Result<Option<Folder>, Self::Error> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        self.request(Method::POST, &["folders"])?
            .json(&json!({ "name": name }))
            .send()
            .await?
            .parse()
            .await
    }

    async fn folders(&mut self) -> Result<Vec<Folder>, Self::Error> {
        let folders = self
            .request(Method::GET, &["folders"])?
            .send()
            .await?
            .parse()
            .await?;
        // An absent collection reads as empty, like the local slot.
        Ok(folders.unwrap_or_default())
    }

    async fn rename_folder(
        &mut self,
        id: Uuid,
        new_name: &str,
    ) -> Result<Option<Folder>, Self::Error> {
        if new_name.trim().is_empty() {
            return Ok(None);
        }
        let id = id.to_string();
        self.request(Method::PUT, &["folders", &id])?
            .json(&json!({ "name": new_name }))
            .send()
            .await?
            .parse()
            .await
    }

    async fn delete_folder(&mut self, id: Uuid) -> Result<(), Self::Error> {
        let id = id.to_string();
        self.request(Method::DELETE, &["folders", &id])?
            .send()
            .await?
            .parse_empty()
            .await
    }

    async fn files(&mut self, folder_id: Uuid) -> Result<Option<Vec<File>>, Self::Error> {
        let id = folder_id.to_string();
        self.request(Method::GET, &["folders", &id, "files"])?
            .send()
            .await?
            .parse()
            .await
    }
}
