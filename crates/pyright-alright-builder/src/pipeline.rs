//! The build pipeline: resolve, clean, fetch, extract, build, place.
//!
//! Strictly sequential; the first error aborts the run and is returned. Nothing
//! is rolled back, the next run's clean step takes care of leftovers.

use pyright_alright_core::config::BuildConfig;
use pyright_alright_core::{PackageLayout, ScratchLayout};
use std::path::PathBuf;

use crate::clean::clean_artifacts;
use crate::error::BuildError;
use crate::extract::extract_archive;
use crate::fetch::download_archive;
use crate::http;
use crate::place::place_artifacts;
use crate::steps::{run_build_steps, StepRunner, SystemRunner};
use crate::version::{resolve_version, VersionRequest};

/// Everything derived from a resolved version, before any side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    pub version: String,
    pub archive_url: String,
    pub scratch: ScratchLayout,
    pub package: PackageLayout,
}

impl BuildPlan {
    pub fn new(config: &BuildConfig, version: &str) -> Self {
        Self {
            version: version.to_string(),
            archive_url: config.repo.archive_url(version),
            scratch: ScratchLayout::new(&config.temp_dir, config.repo.project(), version),
            package: PackageLayout::new(&config.package_dir),
        }
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub plan: BuildPlan,
    pub files_extracted: usize,
    pub artifact_dir: PathBuf,
}

/// Runs the pipeline for a [`BuildConfig`].
pub struct Builder<R: StepRunner = SystemRunner> {
    config: BuildConfig,
    runner: R,
    resolve_agent: ureq::Agent,
    download_agent: ureq::Agent,
}

impl Builder<SystemRunner> {
    pub fn new(config: BuildConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: StepRunner> Builder<R> {
    pub fn with_runner(config: BuildConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            resolve_agent: http::resolve_agent(),
            download_agent: http::download_agent(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve `request` and derive paths and URL, without touching the disk.
    pub fn plan(&self, request: &VersionRequest) -> Result<BuildPlan, BuildError> {
        let version = resolve_version(&self.resolve_agent, &self.config.repo, request)?;
        Ok(BuildPlan::new(&self.config, &version))
    }

    pub fn run(&self, request: &VersionRequest) -> Result<BuildReport, BuildError> {
        let plan = self.plan(request)?;
        tracing::info!("Request to build Pyright {}", plan.version);

        clean_artifacts(&plan.package)?;

        let archive = download_archive(&self.download_agent, &self.config.repo, &plan.version)?;

        tracing::info!(
            "Unzip and store pyright {} archive in {}",
            plan.version,
            self.config.temp_dir.display()
        );
        let files_extracted = extract_archive(&archive, &self.config.temp_dir)?;
        drop(archive);
        if !plan.scratch.source_root().is_dir() {
            return Err(BuildError::MissingSourceTree(
                plan.scratch.source_root().to_path_buf(),
            ));
        }

        run_build_steps(&self.runner, &self.config.runtime, &plan.scratch, &plan.version)?;

        place_artifacts(&plan.scratch, &plan.package)?;

        let artifact_dir = plan.package.artifact_dir();
        tracing::info!("Pyright {} ready in {}", plan.version, artifact_dir.display());
        Ok(BuildReport {
            plan,
            files_extracted,
            artifact_dir,
        })
    }
}
