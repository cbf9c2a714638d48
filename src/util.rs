use crate::remote::Error;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[async_trait]
pub(crate) trait ResponseExt {
    async fn parse<T: DeserializeOwned + Send>(self) -> Result<Option<T>, Error>;
    async fn parse_empty(self) -> Result<(), Error>;
}

#[async_trait]
impl ResponseExt for reqwest::Response {
    async fn parse<T: DeserializeOwned + Send>(self) -> Result<Option<T>, Error> {
        match self.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(self.json().await?)),
            status => Err(Error::Status(status)),
        }
    }

    async fn parse_empty(self) -> Result<(), Error> {
        match self.status() {
            // Deleting a missing record is a no-op, matching the local store.
            StatusCode::NOT_FOUND => Ok(()),
            status if status.is_success() => Ok(()),
            status => Err(Error::Status(status)),
        }
    }
}
