//! The two bun build steps and the seam that runs them.

use pyright_alright_core::{exit_code, RuntimeCommand, ScratchLayout};
use std::fmt;
use std::path::PathBuf;

use crate::error::BuildError;

/// Which build step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    InstallDependencies,
    Build,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallDependencies => f.write_str("install dependencies"),
            Self::Build => f.write_str("build"),
        }
    }
}

/// One runtime invocation, scoped to `cwd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub kind: StepKind,
    pub cwd: PathBuf,
    /// Appended to the runtime command.
    pub args: Vec<&'static str>,
}

impl BuildStep {
    /// `install` at the source root, then `run build` in `packages/pyright`.
    pub fn sequence(scratch: &ScratchLayout) -> [BuildStep; 2] {
        [
            BuildStep {
                kind: StepKind::InstallDependencies,
                cwd: scratch.source_root().to_path_buf(),
                args: vec!["install"],
            },
            BuildStep {
                kind: StepKind::Build,
                cwd: scratch.package_dir(),
                args: vec!["run", "build"],
            },
        ]
    }
}

/// Runs a build step and reports the subprocess exit code.
pub trait StepRunner {
    fn run(&self, runtime: &RuntimeCommand, step: &BuildStep) -> Result<i32, BuildError>;
}

/// Spawns the runtime with inherited stdio. The child gets `cwd` as its
/// working directory; the builder's own directory never changes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl StepRunner for SystemRunner {
    fn run(&self, runtime: &RuntimeCommand, step: &BuildStep) -> Result<i32, BuildError> {
        let shown = runtime.display_with(&step.args);
        tracing::debug!("Running '{}' in {}", shown, step.cwd.display());
        let status = runtime
            .command(&step.args)
            .current_dir(&step.cwd)
            .status()
            .map_err(|source| BuildError::Spawn {
                command: shown,
                source,
            })?;
        Ok(exit_code(&status))
    }
}

/// Run install then build, stopping at the first non-zero exit code.
pub fn run_build_steps<R: StepRunner + ?Sized>(
    runner: &R,
    runtime: &RuntimeCommand,
    scratch: &ScratchLayout,
    version: &str,
) -> Result<(), BuildError> {
    for step in BuildStep::sequence(scratch) {
        match step.kind {
            StepKind::InstallDependencies => {
                tracing::info!("Install pyright {} dependencies", version)
            }
            StepKind::Build => tracing::info!("Build pyright {}", version),
        }
        let code = runner.run(runtime, &step)?;
        if code != 0 {
            tracing::error!("Failed with code {}", code);
            return Err(BuildError::StepFailed {
                step: step.kind,
                code,
            });
        }
    }
    Ok(())
}
