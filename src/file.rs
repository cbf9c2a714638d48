//! Module for file reference records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file reference: a display name and a location string.
///
/// No content is stored; `url` may be a URL or a plain path, and resolving
/// it (e.g. for download) is the caller's concern. A `File` exists only
/// inside its owning [`Folder`](crate::folder::Folder).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct File {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl File {
    /// Creates a file record with a fresh id and the current time as
    /// creation timestamp.
    pub fn new<S: Into<String>, U: Into<String>>(name: S, url: U) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}
