use crate::{backend::Backend, folder::Folder};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error as ThisError;
use tokio::{fs, io};
use tracing::{debug, warn};

/// Conventional file name for the persisted collection, after the storage
/// slot key `folders_data` used by existing deployments.
pub const DEFAULT_FILE_NAME: &str = "folders_data.json";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to serialize collection")]
    Serde(#[from] serde_json::Error),
    #[error("IO error while writing collection")]
    Io(#[from] io::Error),
}

/// A backend that keeps the collection in a single JSON file.
///
/// The file holds a bare JSON array of folder objects, compatible with data
/// persisted under the `folders_data` slot by earlier deployments. A missing
/// file loads as the empty collection; so does a file whose payload no
/// longer parses, in which case the payload is discarded on the next write.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Creates a new [`JsonFileBackend`] reading and writing the given path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Backend for JsonFileBackend {
    type Error = Error;

    async fn load(&self) -> Result<Vec<Folder>, Self::Error> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(folders) => Ok(folders),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding malformed collection payload");
                Ok(Vec::new())
            }
        }
    }

    async fn store(&mut self, folders: &[Folder]) -> Result<(), Self::Error> {
        let value = serde_json::to_vec(folders)?;
        fs::write(&self.path, &value).await?;
        debug!(path = %self.path.display(), folders = folders.len(), "wrote collection");
        Ok(())
    }
}
