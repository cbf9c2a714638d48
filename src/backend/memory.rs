use crate::{backend::Backend, folder::Folder};
use async_trait::async_trait;
use std::convert::Infallible;

/// A backend that keeps the collection in process memory.
///
/// Nothing survives the process; useful for tests and throwaway stores.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    pub folders: Vec<Folder>,
}

#[async_trait]
impl Backend for MemoryBackend {
    type Error = Infallible;

    async fn load(&self) -> Result<Vec<Folder>, Self::Error> {
        Ok(self.folders.clone())
    }

    async fn store(&mut self, folders: &[Folder]) -> Result<(), Self::Error> {
        self.folders = folders.to_vec();
        Ok(())
    }
}
