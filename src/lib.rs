pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Commands, CreateProjectArgs};

pub use adapters::{DryRunRunner, DryRunStorage, LocalStorage, PathLocator, SystemRunner};
pub use app::CreateProject;
pub use config::ScaffoldConfig;
pub use crate::core::{engine::ScaffoldEngine, engine::ScaffoldReport, prompt::Prompter, recipe::Recipe};
pub use utils::error::{Result, ScaffoldError};
