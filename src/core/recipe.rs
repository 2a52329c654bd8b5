use crate::config::toml_config::{ScaffoldConfig, JAVA_VERSION_PLACEHOLDER};
use crate::domain::model::{AppType, CommandSpec, ProjectContext, Step};
use std::path::{Component, Path, PathBuf};

pub const DOCKERFILE_NAME: &str = "Dockerfile";

const SPRING_STEPS: &[Step] = &[
    Step::GenerateProject,
    Step::BuildProject,
    Step::WriteDockerfile,
    Step::BuildImage,
];

/// The commands and files that make up one application type's pipeline.
#[derive(Debug, Clone)]
pub struct Recipe {
    app: AppType,
    config: ScaffoldConfig,
}

impl Recipe {
    pub fn new(app: AppType, config: ScaffoldConfig) -> Self {
        Self { app, config }
    }

    pub fn app(&self) -> AppType {
        self.app
    }

    pub fn steps(&self) -> &'static [Step] {
        match self.app {
            AppType::Spring => SPRING_STEPS,
        }
    }

    pub fn generator_command(&self, ctx: &ProjectContext) -> CommandSpec {
        let spring = &self.config.spring;
        CommandSpec::new(&self.config.tools.generator)
            .arg("init")
            .arg(format!("--build={}", spring.build_tool))
            .arg(format!("--java-version={}", ctx.version))
            .arg(format!("--name={}", ctx.name))
            .arg(format!("--type={}", spring.project_type))
            .arg(&ctx.project_path)
    }

    pub fn build_command(&self, ctx: &ProjectContext) -> CommandSpec {
        CommandSpec::new(self.build_wrapper(&ctx.project_path))
            .arg("build")
            .current_dir(&ctx.project_path)
    }

    /// Bare names go through PATH; relative paths belong to the generated project.
    fn build_wrapper(&self, project_path: &Path) -> PathBuf {
        let wrapper = Path::new(&self.config.spring.build_wrapper);
        let is_bare_name = matches!(
            wrapper.components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );

        if wrapper.is_absolute() || is_bare_name {
            wrapper.to_path_buf()
        } else {
            let relative: PathBuf = wrapper
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            project_path.join(relative)
        }
    }

    pub fn dockerfile_path(&self, ctx: &ProjectContext) -> PathBuf {
        ctx.project_path.join(DOCKERFILE_NAME)
    }

    pub fn render_dockerfile(&self, ctx: &ProjectContext) -> String {
        self.config
            .spring
            .dockerfile_template
            .replace(JAVA_VERSION_PLACEHOLDER, &ctx.version)
    }

    pub fn image_command(&self, ctx: &ProjectContext) -> CommandSpec {
        CommandSpec::new(&self.config.tools.container)
            .arg("build")
            .arg("-t")
            .arg(&ctx.image_name)
            .arg(&ctx.project_path)
    }
}
