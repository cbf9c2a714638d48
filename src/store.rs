//! Module for the local folder store.

use crate::backend::Backend;
use crate::file::File;
use crate::folder::Folder;
use crate::FolderSource;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable CRUD over the folder collection, generic over a [`Backend`].
///
/// Every operation is a full read-modify-write cycle: the backend loads the
/// whole collection, the mutation runs on the in-memory `Vec`, and the
/// result is written back. Operations that miss their target skip the
/// write-back, so the persisted payload is only touched when something
/// changed. This is the simplest correct strategy for the small record
/// counts this store is meant for; operations are linear scans.
///
/// Operations take `&mut self`, so a single store instance never interleaves
/// two cycles. Two stores over the same backing slot still race with
/// last-writer-wins semantics.
#[derive(Debug, Clone)]
pub struct FolderStore<B> {
    backend: B,
}

impl<B: Backend> FolderStore<B> {
    /// Creates a new [`FolderStore`] over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the store and returns the underlying backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Runs `f` over the loaded collection and writes it back, unless `f`
    /// returns `None` (a miss), in which case the slot is left untouched.
    async fn modify<F, T>(&mut self, f: F) -> Result<Option<T>, B::Error>
    where
        F: FnOnce(&mut Vec<Folder>) -> Option<T>,
    {
        let mut folders = self.backend.load().await?;
        match f(&mut folders) {
            Some(value) => {
                self.backend.store(&folders).await?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Creates a folder with the given name, appends it to the collection,
    /// and returns the new record.
    ///
    /// Blank and whitespace-only names are rejected with `Ok(None)` and the
    /// collection is left untouched.
    pub async fn create_folder(&mut self, name: &str) -> Result<Option<Folder>, B::Error> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        self.modify(|folders| {
            let folder = Folder::new(name);
            folders.push(folder.clone());
            Some(folder)
        })
        .await
    }

    /// Returns all folders sorted by creation timestamp, newest first.
    ///
    /// The sort is stable, so folders sharing a timestamp keep their stored
    /// order.
    pub async fn folders(&mut self) -> Result<Vec<Folder>, B::Error> {
        let mut folders = self.backend.load().await?;
        folders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(folders)
    }

    /// Renames the folder with the given id in place and returns the
    /// updated record.
    ///
    /// Returns `Ok(None)`, leaving the collection untouched, if no folder
    /// has that id or the new name is blank.
    pub async fn rename_folder(
        &mut self,
        id: Uuid,
        new_name: &str,
    ) -> Result<Option<Folder>, B::Error> {
        if new_name.trim().is_empty() {
            return Ok(None);
        }
        let new_name = new_name.to_owned();
        self.modify(move |folders| {
            let folder = folders.iter_mut().find(|f| f.id == id)?;
            folder.name = new_name;
            Some(folder.clone())
        })
        .await
    }

    /// Removes the folder with the given id and all of its files, then
    /// persists the collection.
    ///
    /// No-op (not an error) if no folder has that id; calling it twice ends
    /// in the same state as calling it once.
    pub async fn delete_folder(&mut self, id: Uuid) -> Result<(), B::Error> {
        self.modify(|folders| {
            folders.retain(|f| f.id != id);
            Some(())
        })
        .await?;
        Ok(())
    }

    /// Appends a file reference to the folder with the given id and returns
    /// the new record, or `Ok(None)` if the folder is unknown.
    pub async fn add_file(
        &mut self,
        folder_id: Uuid,
        name: &str,
        url: &str,
    ) -> Result<Option<File>, B::Error> {
        let file = File::new(name, url);
        self.modify(move |folders| {
            let folder = folders.iter_mut().find(|f| f.id == folder_id)?;
            folder.files.push(file.clone());
            Some(file)
        })
        .await
    }

    /// Removes the matching file from the folder, leaving its other files
    /// untouched. No-op if either id is unmatched; an unknown folder skips
    /// the write-back entirely.
    pub async fn delete_file(&mut self, folder_id: Uuid, file_id: Uuid) -> Result<(), B::Error> {
        self.modify(|folders| {
            let folder = folders.iter_mut().find(|f| f.id == folder_id)?;
            folder.files.retain(|f| f.id != file_id);
            Some(())
        })
        .await?;
        Ok(())
    }

    /// Returns the files of the folder with the given id, in insertion
    /// order, or `Ok(None)` if the folder is unknown.
    pub async fn files(&mut self, folder_id: Uuid) -> Result<Option<Vec<File>>, B::Error> {
        let folders = self.backend.load().await?;
        Ok(folders
            .into_iter()
            .find(|f| f.id == folder_id)
            .map(|f| f.files))
    }
}

#[async_trait]
impl<B> FolderSource for FolderStore<B>
where
    B: Backend + Send + Sync,
{
    type Error = B::Error;

    async fn create_folder(&mut self, name: &str) -> Result<Option<Folder>, Self::Error> {
        FolderStore::create_folder(self, name).await
    }

    async fn folders(&mut self) -> Result<Vec<Folder>, Self::Error> {
        FolderStore::folders(self).await
    }

    async fn rename_folder(
        &mut self,
        id: Uuid,
        new_name: &str,
    ) -> Result<Option<Folder>, Self::Error> {
        FolderStore::rename_folder(self, id, new_name).await
    }

    async fn delete_folder(&mut self, id: Uuid) -> Result<(), Self::Error> {
        FolderStore::delete_folder(self, id).await
    }

    async fn files(&mut self, folder_id: Uuid) -> Result<Option<Vec<File>>, Self::Error> {
        FolderStore::files(self, folder_id).await
    }
}
