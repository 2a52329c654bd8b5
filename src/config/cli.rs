use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wizcraft")]
#[command(about = "Wizcraft is a CLI tool for managing microservices")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML file overriding tool names and recipe settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project
    #[command(long_about = "Create a new project with the specified application type.\n\
Supported application types:\n  \
- spring: Create a Spring Boot project")]
    CreateProject(CreateProjectArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CreateProjectArgs {
    #[arg(long, help = "Specify the application type (spring/next)")]
    pub app: String,

    /// Print the commands and files instead of running or writing them
    #[arg(long)]
    pub dry_run: bool,
}
