use crate::domain::ports::ToolLocator;
use std::path::PathBuf;

/// Looks tools up on the process `PATH`.
#[derive(Debug, Clone, Default)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        which::which(tool).ok()
    }
}
