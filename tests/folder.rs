use chrono::{TimeZone, Utc};
use folderkeep::backend::MemoryBackend;
use folderkeep::{Folder, FolderStore};
use uuid::Uuid;

mod common;

#[tokio::test]
async fn folder_create() {
    let mut store = common::memory_store();
    let folder = common::create_folder(&mut store, "Docs").await;
    assert_eq!(folder.name, "Docs");
    assert!(folder.files.is_empty());

    let folders = store.folders().await.unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0], folder);
}

#[tokio::test]
async fn folder_create_unique_ids() {
    let mut store = common::memory_store();
    let a = common::create_folder(&mut store, "a").await;
    let b = common::create_folder(&mut store, "a").await;
    let c = common::create_folder(&mut store, "c").await;
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
    assert_ne!(a.id, c.id);
    assert_eq!(store.folders().await.unwrap().len(), 3);
}

#[tokio::test]
async fn folder_create_blank_name_rejected() {
    let mut store = common::memory_store();
    assert_eq!(store.create_folder("").await.unwrap(), None);
    assert_eq!(store.create_folder("   \t").await.unwrap(), None);
    assert!(store.folders().await.unwrap().is_empty());
}

#[tokio::test]
async fn folder_list_newest_first() {
    let folder_at = |name: &str, year: i32| -> Folder {
        Folder {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            created_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            files: Vec::new(),
        }
    };
    // Stored oldest-first on purpose; listing must reverse that.
    let backend = MemoryBackend {
        folders: vec![
            folder_at("t1", 2021),
            folder_at("t2", 2022),
            folder_at("t3", 2023),
        ],
    };
    let mut store = FolderStore::new(backend);
    let names: Vec<_> = store
        .folders()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, ["t3", "t2", "t1"]);
}

#[tokio::test]
async fn folder_rename() {
    let mut store = common::memory_store();
    let folder = common::create_folder(&mut store, "Docs").await;
    common::create_folder(&mut store, "Other").await;

    let renamed = store.rename_folder(folder.id, "X").await.unwrap().unwrap();
    assert_eq!(renamed.id, folder.id);
    assert_eq!(renamed.name, "X");
    assert_eq!(renamed.created_at, folder.created_at);

    let folders = store.folders().await.unwrap();
    let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
    assert!(names.contains(&"X"));
    assert!(names.contains(&"Other"));
    assert!(!names.contains(&"Docs"));
}

#[tokio::test]
async fn folder_rename_missing_id() {
    let mut store = common::memory_store();
    let folder = common::create_folder(&mut store, "Docs").await;

    let result = store.rename_folder(Uuid::new_v4(), "X").await.unwrap();
    assert_eq!(result, None);
    assert_eq!(store.folders().await.unwrap(), vec![folder]);
}

#[tokio::test]
async fn folder_rename_blank_name_rejected() {
    let mut store = common::memory_store();
    let folder = common::create_folder(&mut store, "Docs").await;

    assert_eq!(store.rename_folder(folder.id, "  ").await.unwrap(), None);
    assert_eq!(store.folders().await.unwrap(), vec![folder]);
}

#[tokio::test]
async fn folder_delete() {
    let mut store = common::memory_store();
    let keep = common::create_folder(&mut store, "keep").await;
    let gone = common::create_folder(&mut store, "gone").await;

    store.delete_folder(gone.id).await.unwrap();
    assert_eq!(store.folders().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn folder_delete_idempotent() {
    let mut store = common::memory_store();
    let keep = common::create_folder(&mut store, "keep").await;
    let gone = common::create_folder(&mut store, "gone").await;

    store.delete_folder(gone.id).await.unwrap();
    store.delete_folder(gone.id).await.unwrap();
    assert_eq!(store.folders().await.unwrap(), vec![keep]);
}
