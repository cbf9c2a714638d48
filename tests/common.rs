#![allow(dead_code)] // https://github.com/rust-lang/rust/issues/46379

use folderkeep::backend::{json_file, Backend, JsonFileBackend, MemoryBackend};
use folderkeep::{Folder, FolderStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory for a throwaway store file; removed when the guard drops,
/// panics included.
pub fn temp_store_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join(json_file::DEFAULT_FILE_NAME)
}

pub fn memory_store() -> FolderStore<MemoryBackend> {
    FolderStore::new(MemoryBackend::default())
}

pub fn file_store(path: &Path) -> FolderStore<JsonFileBackend> {
    FolderStore::new(JsonFileBackend::new(path))
}

pub async fn create_folder<B: Backend>(store: &mut FolderStore<B>, name: &str) -> Folder {
    store
        .create_folder(name)
        .await
        .unwrap()
        .expect("folder should be created")
}
