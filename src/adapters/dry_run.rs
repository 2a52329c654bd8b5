use crate::domain::model::CommandSpec;
use crate::domain::ports::{CommandRunner, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct DryRunRunner;

#[async_trait]
impl CommandRunner for DryRunRunner {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        tracing::info!("dry run, skipping: {}", command);
        println!("[dry-run] would run: {}", command);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DryRunStorage;

impl Storage for DryRunStorage {
    async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        println!("[dry-run] would write {}:", path.display());
        println!("{}", String::from_utf8_lossy(data).trim_end());
        Ok(())
    }
}
