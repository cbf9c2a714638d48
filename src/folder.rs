//! Module for folder records.

use crate::file::File;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named container owning an ordered list of file references.
///
/// Folders serialize in the persisted wire shape: snake_case field names,
/// `created_at` as an RFC 3339 timestamp, `files` inline. There is no
/// version field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Folder {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub files: Vec<File>,
}

impl Folder {
    /// Creates a folder record with a fresh id, the current time as
    /// creation timestamp, and an empty file list.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            files: Vec::new(),
        }
    }
}
