use crate::domain::ports::ToolLocator;
use crate::utils::error::{Result, ScaffoldError};
use std::path::PathBuf;

/// Fails with install guidance when the project generator cannot be resolved.
pub fn ensure_generator<L: ToolLocator>(locator: &L, tool: &str) -> Result<PathBuf> {
    match locator.locate(tool) {
        Some(path) => {
            tracing::debug!("Found generator `{}` at {}", tool, path.display());
            Ok(path)
        }
        None => {
            tracing::debug!("Generator `{}` not found on PATH", tool);
            Err(ScaffoldError::missing_generator(tool))
        }
    }
}
