use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Files relative to `base_path`. Absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".".to_string())
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.full_path(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    async fn file_size(&self, path: &str) -> Result<u64> {
        let metadata = tokio::fs::metadata(self.full_path(path)).await?;
        Ok(metadata.len())
    }
}
