//! Module for persistence backends.

use crate::folder::Folder;
use async_trait::async_trait;
use std::error::Error;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

/// A trait for persisting the folder collection as one unit.
///
/// The collection is always read and written whole; there is no keyed or
/// partial access. [`FolderStore`](crate::store::FolderStore) performs a
/// `load`, mutates the returned `Vec` in memory, and hands it back to
/// `store` within a single operation.
#[async_trait]
pub trait Backend {
    type Error: Error + Send;

    /// Loads the entire collection.
    ///
    /// An absent or unreadable slot is not an error: implementations return
    /// the empty collection so that a fresh or corrupted slot behaves like
    /// one that was never written.
    async fn load(&self) -> Result<Vec<Folder>, Self::Error>;

    /// Replaces the entire persisted collection.
    async fn store(&mut self, folders: &[Folder]) -> Result<(), Self::Error>;
}
