use crate::domain::model::CommandSpec;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ToolLocator: Send + Sync {
    /// Resolve `tool` through the executable search path.
    fn locate(&self, tool: &str) -> Option<PathBuf>;
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion with the standard streams passed through.
    async fn run(&self, command: &CommandSpec) -> Result<()>;
}
