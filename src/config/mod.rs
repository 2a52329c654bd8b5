#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Commands, CreateProjectArgs};
pub use toml_config::{ScaffoldConfig, SpringConfig, ToolsConfig};
