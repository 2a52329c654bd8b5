use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::path::Path;
use wizcraft::domain::ports::{CommandRunner, Storage};
use wizcraft::utils::logger;
use wizcraft::{
    Cli, Commands, CreateProject, CreateProjectArgs, DryRunRunner, DryRunStorage, LocalStorage,
    PathLocator, Prompter, ScaffoldConfig, ScaffoldError, SystemRunner,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = match ScaffoldConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective configuration: {:?}", config);

    match command {
        Commands::CreateProject(args) => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            if args.dry_run {
                tracing::info!("🔍 DRY RUN MODE - no commands will be executed");
                create_project(&args, DryRunRunner, DryRunStorage, config, &cwd).await;
            } else {
                create_project(&args, SystemRunner, LocalStorage::new(), config, &cwd).await;
            }
        }
    }

    Ok(())
}

async fn create_project<R: CommandRunner, S: Storage>(
    args: &CreateProjectArgs,
    runner: R,
    storage: S,
    config: ScaffoldConfig,
    cwd: &Path,
) {
    let command = CreateProject::new(PathLocator, runner, storage, config);
    let mut prompter = Prompter::stdio();

    match command.run(&args.app, &mut prompter, cwd).await {
        Ok(report) => {
            tracing::info!(
                "✅ {} ready at {} ({:?})",
                report.image_name,
                report.project_path.display(),
                report.completed
            );
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &ScaffoldError) -> ! {
    tracing::debug!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("{}", e.report());

    std::process::exit(e.severity().exit_code())
}
