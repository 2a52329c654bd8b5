use crate::core::recipe::Recipe;
use crate::domain::model::{ProjectContext, Step};
use crate::domain::ports::{CommandRunner, Storage};
use crate::utils::error::{Result, ScaffoldError};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_path: PathBuf,
    pub image_name: String,
    pub completed: Vec<Step>,
}

/// Runs a recipe's steps in order and stops at the first failure.
pub struct ScaffoldEngine<R: CommandRunner, S: Storage> {
    runner: R,
    storage: S,
}

impl<R: CommandRunner, S: Storage> ScaffoldEngine<R, S> {
    pub fn new(runner: R, storage: S) -> Self {
        Self { runner, storage }
    }

    pub async fn run(&self, recipe: &Recipe, ctx: &ProjectContext) -> Result<ScaffoldReport> {
        tracing::info!(
            app = %recipe.app(),
            project = %ctx.project_path.display(),
            "Starting scaffold pipeline"
        );

        let mut completed = Vec::with_capacity(recipe.steps().len());
        for &step in recipe.steps() {
            tracing::debug!(?step, "Running step");
            let message = self
                .run_step(step, recipe, ctx)
                .await
                .map_err(|e| ScaffoldError::step_failed(step, e))?;
            println!("{}", message);
            completed.push(step);
        }

        Ok(ScaffoldReport {
            project_path: ctx.project_path.clone(),
            image_name: ctx.image_name.clone(),
            completed,
        })
    }

    async fn run_step(&self, step: Step, recipe: &Recipe, ctx: &ProjectContext) -> Result<String> {
        match step {
            Step::GenerateProject => {
                self.runner.run(&recipe.generator_command(ctx)).await?;
                Ok(format!(
                    "Project initialized successfully in directory: {}",
                    ctx.project_path.display()
                ))
            }
            Step::BuildProject => {
                self.runner.run(&recipe.build_command(ctx)).await?;
                Ok("Project built successfully".to_string())
            }
            Step::WriteDockerfile => {
                let content = recipe.render_dockerfile(ctx);
                self.storage
                    .write_file(&recipe.dockerfile_path(ctx), content.as_bytes())
                    .await?;
                Ok(format!(
                    "Dockerfile created successfully in directory: {}",
                    ctx.project_path.display()
                ))
            }
            Step::BuildImage => {
                self.runner.run(&recipe.image_command(ctx)).await?;
                Ok(format!(
                    "Docker image built successfully with name: {}",
                    ctx.image_name
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::domain::model::{AppType, CommandSpec, ProjectAnswers};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockRunner {
        calls: Arc<Mutex<Vec<CommandSpec>>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl CommandRunner for MockRunner {
        async fn run(&self, command: &CommandSpec) -> Result<()> {
            self.calls.lock().await.push(command.clone());
            match self.fail_on {
                Some(suffix) if command.program_name().ends_with(suffix) => {
                    Err(ScaffoldError::SpawnError {
                        program: command.program_name(),
                        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                    })
                }
                _ => Ok(()),
            }
        }
    }

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
        fail: bool,
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            if self.fail {
                return Err(ScaffoldError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                )));
            }
            self.files.lock().await.insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    fn context() -> ProjectContext {
        ProjectContext::new(
            ProjectAnswers {
                name: "demo".to_string(),
                version: "21".to_string(),
                directory: "/work".to_string(),
            },
            Path::new("/unused"),
        )
    }

    fn recipe() -> Recipe {
        Recipe::new(AppType::Spring, ScaffoldConfig::default())
    }

    #[tokio::test]
    async fn test_all_steps_run_in_order() {
        let runner = MockRunner::default();
        let storage = MockStorage::default();
        let engine = ScaffoldEngine::new(runner.clone(), storage.clone());

        let report = engine.run(&recipe(), &context()).await.unwrap();

        assert_eq!(report.completed, recipe().steps().to_vec());
        assert_eq!(report.image_name, "demo:latest");

        let calls = runner.calls.lock().await;
        let programs: Vec<String> = calls.iter().map(|c| c.program_name()).collect();
        assert_eq!(programs, vec!["spring", "/work/demo/gradlew", "docker"]);

        let files = storage.files.lock().await;
        let dockerfile = files.get(Path::new("/work/demo/Dockerfile")).unwrap();
        assert!(String::from_utf8_lossy(dockerfile).contains("FROM openjdk:21-jdk-slim"));
    }

    #[tokio::test]
    async fn test_generator_failure_stops_pipeline() {
        let runner = MockRunner {
            fail_on: Some("spring"),
            ..Default::default()
        };
        let storage = MockStorage::default();
        let engine = ScaffoldEngine::new(runner.clone(), storage.clone());

        let err = engine.run(&recipe(), &context()).await.unwrap_err();

        assert_eq!(err.failed_step(), Some(Step::GenerateProject));
        assert!(err.to_string().starts_with("Error initializing project:"));
        assert_eq!(runner.calls.lock().await.len(), 1);
        assert!(storage.files.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_build_failure_skips_dockerfile_and_image() {
        let runner = MockRunner {
            fail_on: Some("gradlew"),
            ..Default::default()
        };
        let storage = MockStorage::default();
        let engine = ScaffoldEngine::new(runner.clone(), storage.clone());

        let err = engine.run(&recipe(), &context()).await.unwrap_err();

        assert_eq!(err.failed_step(), Some(Step::BuildProject));
        assert!(storage.files.lock().await.is_empty());
        let calls = runner.calls.lock().await;
        assert!(calls.iter().all(|c| c.program_name() != "docker"));
    }

    #[tokio::test]
    async fn test_dockerfile_write_failure_skips_image_build() {
        let runner = MockRunner::default();
        let storage = MockStorage {
            fail: true,
            ..Default::default()
        };
        let engine = ScaffoldEngine::new(runner.clone(), storage);

        let err = engine.run(&recipe(), &context()).await.unwrap_err();

        assert_eq!(err.failed_step(), Some(Step::WriteDockerfile));
        assert!(err.to_string().starts_with("Error creating Dockerfile:"));
        assert_eq!(runner.calls.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn test_image_build_failure_is_reported() {
        let runner = MockRunner {
            fail_on: Some("docker"),
            ..Default::default()
        };
        let engine = ScaffoldEngine::new(runner, MockStorage::default());

        let err = engine.run(&recipe(), &context()).await.unwrap_err();

        assert_eq!(err.failed_step(), Some(Step::BuildImage));
        assert!(err.to_string().starts_with("Error building Docker image:"));
    }
}
