pub mod engine;
pub mod preflight;
pub mod prompt;
pub mod recipe;

pub use crate::domain::model::{AppType, CommandSpec, ProjectAnswers, ProjectContext, Step};
pub use crate::domain::ports::{CommandRunner, Storage, ToolLocator};
pub use crate::utils::error::Result;
