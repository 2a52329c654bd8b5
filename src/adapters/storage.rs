use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Permission bits for generated files: rw for owner, r for group and others.
pub const FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }

        let mut file = options.open(path)?;
        file.write_all(data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
