use crate::domain::model::CommandSpec;
use crate::domain::ports::CommandRunner;
use crate::utils::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Spawns real child processes with stdin, stdout and stderr inherited.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec) -> Result<()> {
        tracing::debug!("Running: {}", command);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| ScaffoldError::SpawnError {
            program: command.program_name(),
            source: e,
        })?;

        tracing::debug!("`{}` finished with {}", command.program_name(), status);

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                program: command.program_name(),
                status,
            })
        }
    }
}
