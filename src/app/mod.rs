pub mod create_project;

pub use create_project::CreateProject;
