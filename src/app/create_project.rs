use crate::config::ScaffoldConfig;
use crate::core::engine::{ScaffoldEngine, ScaffoldReport};
use crate::core::preflight;
use crate::core::prompt::Prompter;
use crate::core::recipe::Recipe;
use crate::domain::model::{AppType, ProjectContext};
use crate::domain::ports::{CommandRunner, Storage, ToolLocator};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// The `create-project` flow: preflight, prompts, then the recipe's steps.
pub struct CreateProject<L: ToolLocator, R: CommandRunner, S: Storage> {
    locator: L,
    engine: ScaffoldEngine<R, S>,
    config: ScaffoldConfig,
}

impl<L: ToolLocator, R: CommandRunner, S: Storage> CreateProject<L, R, S> {
    pub fn new(locator: L, runner: R, storage: S, config: ScaffoldConfig) -> Self {
        Self {
            locator,
            engine: ScaffoldEngine::new(runner, storage),
            config,
        }
    }

    /// `app` is checked after prompting, so an unsupported type still sees the
    /// name and directory prompts but never reaches a subprocess.
    pub async fn run<I: BufRead, O: Write>(
        &self,
        app: &str,
        prompter: &mut Prompter<I, O>,
        cwd: &Path,
    ) -> Result<ScaffoldReport> {
        preflight::ensure_generator(&self.locator, &self.config.tools.generator)?;

        let app_type = app.parse::<AppType>();
        let ask_version = app_type.as_ref().is_ok_and(AppType::requires_version);
        let answers = prompter.collect(ask_version);
        let app_type = app_type?;

        let ctx = ProjectContext::new(answers, cwd);
        let recipe = Recipe::new(app_type, self.config.clone());

        self.engine.run(&recipe, &ctx).await
    }
}
