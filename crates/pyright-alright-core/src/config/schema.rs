//! Configuration structs grouped by concern, loaded from the environment.

use super::env_keys::{build as build_keys, launcher as launcher_keys};
use super::env_keys::{observability as obv_keys, runtime as runtime_keys};
use super::loader::{env_bool, env_optional, env_or, load_dotenv};
use crate::error::ConfigError;
use crate::runtime::RuntimeCommand;
use std::path::PathBuf;

const DEFAULT_PACKAGE_DIR: &str = "./pyright_alright";
const DEFAULT_TEMP_DIR: &str = "./temp";
const DEFAULT_GITHUB_BASE: &str = "https://github.com";
const DEFAULT_REPO: &str = "microsoft/pyright";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::QUIET, obv_keys::QUIET_ALIASES, false),
            log_level: env_or(obv_keys::LOG_LEVEL, obv_keys::LOG_LEVEL_ALIASES, || {
                "info".to_string()
            }),
            log_json: env_bool(obv_keys::LOG_JSON, obv_keys::LOG_JSON_ALIASES, false),
        }
    }
}

/// Upstream GitHub repository the sources are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRepo {
    /// Scheme and host, no trailing slash (e.g. `https://github.com`).
    pub base: String,
    pub owner: String,
    pub name: String,
}

impl GithubRepo {
    /// Parse `owner/name` against `base`.
    pub fn parse(base: &str, repo: &str) -> Result<Self, ConfigError> {
        let (owner, name) = repo
            .trim()
            .split_once('/')
            .filter(|(o, n)| !o.is_empty() && !n.is_empty() && !n.contains('/'))
            .ok_or_else(|| ConfigError::InvalidRepo(repo.to_string()))?;
        Ok(Self {
            base: base.trim().trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    fn repo_url(&self) -> String {
        format!("{}/{}/{}", self.base, self.owner, self.name)
    }

    /// Source archive for a release tag.
    pub fn archive_url(&self, version: &str) -> String {
        format!("{}/archive/refs/tags/{}.zip", self.repo_url(), version)
    }

    /// Endpoint that redirects to the newest release.
    pub fn latest_release_url(&self) -> String {
        format!("{}/releases/latest", self.repo_url())
    }

    /// Prefix of the `Location` header returned by [`Self::latest_release_url`].
    pub fn release_tag_prefix(&self) -> String {
        format!("{}/releases/tag/", self.repo_url())
    }

    /// Top-level directory name of the archive is `<project>-<version>`.
    pub fn project(&self) -> &str {
        &self.name
    }
}

impl Default for GithubRepo {
    fn default() -> Self {
        Self {
            base: DEFAULT_GITHUB_BASE.to_string(),
            owner: "microsoft".to_string(),
            name: "pyright".to_string(),
        }
    }
}

/// Builder configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Wrapper package root; artifacts land in `<package_dir>/pyright/`.
    pub package_dir: PathBuf,
    /// Scratch root the archive is extracted into.
    pub temp_dir: PathBuf,
    pub runtime: RuntimeCommand,
    pub repo: GithubRepo,
}

impl BuildConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        let package_dir = env_or(build_keys::PACKAGE_DIR, build_keys::PACKAGE_DIR_ALIASES, || {
            DEFAULT_PACKAGE_DIR.to_string()
        });
        let temp_dir = env_or(build_keys::TEMP_DIR, build_keys::TEMP_DIR_ALIASES, || {
            DEFAULT_TEMP_DIR.to_string()
        });
        let runtime = env_or(runtime_keys::RUNTIME, runtime_keys::RUNTIME_ALIASES, || {
            RuntimeCommand::DEFAULT_PROGRAM.to_string()
        });
        let base = env_or(build_keys::GITHUB_BASE, &[], || DEFAULT_GITHUB_BASE.to_string());
        let repo = env_or(build_keys::REPO, &[], || DEFAULT_REPO.to_string());

        Ok(Self {
            package_dir: PathBuf::from(package_dir),
            temp_dir: PathBuf::from(temp_dir),
            runtime: RuntimeCommand::parse(&runtime)?,
            repo: GithubRepo::parse(&base, &repo)?,
        })
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_cli_overrides(
        mut self,
        package_dir: Option<PathBuf>,
        temp_dir: Option<PathBuf>,
        runtime: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(dir) = package_dir {
            self.package_dir = dir;
        }
        if let Some(dir) = temp_dir {
            self.temp_dir = dir;
        }
        if let Some(rt) = runtime {
            self.runtime = RuntimeCommand::parse(rt)?;
        }
        Ok(self)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            package_dir: PathBuf::from(DEFAULT_PACKAGE_DIR),
            temp_dir: PathBuf::from(DEFAULT_TEMP_DIR),
            runtime: RuntimeCommand::default(),
            repo: GithubRepo::default(),
        }
    }
}

/// Launcher configuration.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Explicit wrapper package directory; `None` means "next to the executable".
    pub home: Option<PathBuf>,
    pub runtime: RuntimeCommand,
}

impl LauncherConfig {
    // No `.env` here: the launcher runs in the user's project directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = env_or(runtime_keys::RUNTIME, runtime_keys::RUNTIME_ALIASES, || {
            RuntimeCommand::DEFAULT_PROGRAM.to_string()
        });
        Ok(Self {
            home: env_optional(launcher_keys::HOME, &[]).map(PathBuf::from),
            runtime: RuntimeCommand::parse(&runtime)?,
        })
    }
}
