//! pyright-alright library, shared by the `pyright` launcher and the
//! `build-pyright` builder binaries.

mod cli;
pub mod launcher;

use anyhow::{Context, Result};
use clap::Parser;
use pyright_alright_builder::{BuildError, Builder, VersionRequest};
use pyright_alright_core::config::{load_dotenv, BuildConfig, LauncherConfig};
use pyright_alright_core::observability::{init_tracing, TracingMode};

pub use cli::BuildCli;
pub use launcher::Launcher;

/// Run the bundled Pyright with this process's arguments; returns the exit
/// code to terminate with.
pub fn run_launcher() -> Result<i32> {
    init_tracing(TracingMode::Launcher);
    let config = LauncherConfig::from_env()?;
    let launcher = Launcher::from_config(&config)?;
    launcher.launch(std::env::args_os().skip(1))
}

/// Parse the builder command line and run the pipeline.
pub fn run_build_cli() -> Result<()> {
    let cli = BuildCli::parse();
    load_dotenv();
    init_tracing(TracingMode::Builder);
    run_build(cli)
}

/// Run the pipeline for already-parsed arguments.
pub fn run_build(cli: BuildCli) -> Result<()> {
    let request: VersionRequest = cli.pyright_version.parse()?;
    let config = BuildConfig::from_env()?.with_cli_overrides(
        cli.package_dir,
        cli.temp_dir,
        cli.runtime.as_deref(),
    )?;
    let builder = Builder::new(config);
    tracing::debug!(config = ?builder.config(), "Build configuration");
    builder
        .run(&request)
        .with_context(|| format!("Failed to build pyright {request}"))?;
    Ok(())
}

/// Exit code for a failed build: a failed build subprocess's code is passed
/// through, anything else is 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<BuildError>())
        .map_or(1, BuildError::exit_code)
}
