//! Minimal folder/file bookkeeping.
//!
//! A [`FolderStore`] keeps a flat collection of named folders, each owning a
//! list of file references (display name + URL or path string, no content).
//! The whole collection is persisted as one JSON array through a pluggable
//! [`Backend`]: a single JSON file ([`JsonFileBackend`]) or process memory
//! ([`MemoryBackend`]). A [`RemoteStore`] offers the same folder operations
//! over an HTTP API, so consumers can swap local and remote sources via the
//! [`FolderSource`] trait.
//!
//! Missing records are not errors: operations targeting an unknown id
//! resolve to `None` or a no-op, and callers check the returned value.
//! Errors are reserved for the persistence layer itself.
//!
//! # Example
//!
//! ```no_run
//! use folderkeep::{backend::JsonFileBackend, FolderStore};
//!
//! # async fn run() -> Result<(), folderkeep::backend::json_file::Error> {
//! let mut store = FolderStore::new(JsonFileBackend::new("folders_data.json"));
//! let folder = store.create_folder("Docs").await?.unwrap();
//! store.add_file(folder.id, "notes.pdf", "https://example.com/notes.pdf").await?;
//! for folder in store.folders().await? {
//!     println!("{} ({} files)", folder.name, folder.files.len());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]

use async_trait::async_trait;
use std::error::Error as StdError;
use uuid::Uuid;

mod util;

pub mod backend;
pub mod file;
pub mod folder;
pub mod remote;
pub mod store;

pub use backend::{Backend, JsonFileBackend, MemoryBackend};
pub use file::File;
pub use folder::Folder;
pub use remote::RemoteStore;
pub use store::FolderStore;

/// A source of folder records, local or remote.
///
/// Both [`FolderStore`] and [`RemoteStore`] implement this trait with the
/// same semantics, so a consumer can be written against `FolderSource` and
/// pointed at either depending on deployment.
#[async_trait]
pub trait FolderSource {
    type Error: StdError + Send;

    /// Creates a folder with the given name and returns the new record.
    ///
    /// Returns `Ok(None)` if the name is blank or whitespace-only.
    async fn create_folder(&mut self, name: &str) -> Result<Option<Folder>, Self::Error>;

    /// Returns all folders, newest first.
    async fn folders(&mut self) -> Result<Vec<Folder>, Self::Error>;

    /// Renames a folder, returning the updated record, or `None` if no
    /// folder has the given id or the new name is blank.
    async fn rename_folder(
        &mut self,
        id: Uuid,
        new_name: &str,
    ) -> Result<Option<Folder>, Self::Error>;

    /// Deletes a folder and all of its files. No-op if the id is unknown.
    async fn delete_folder(&mut self, id: Uuid) -> Result<(), Self::Error>;

    /// Returns the files of one folder, or `None` if the folder is unknown.
    async fn files(&mut self, folder_id: Uuid) -> Result<Option<Vec<File>>, Self::Error>;
}
