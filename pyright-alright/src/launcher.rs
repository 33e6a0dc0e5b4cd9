//! `pyright` launcher: run the bundled `pyright/index.js` through the runtime
//! and exit with its code.
//!
//! The launcher expects to sit next to the `pyright/` directory of the
//! wrapper package, which is where a package built by `build-pyright
//! --package-dir <pkg>` installs it. Running it from anywhere else (e.g. a
//! development checkout, where the builder writes to `./pyright_alright`)
//! needs `PYRIGHT_ALRIGHT_HOME=<pkg>`.
//!
//! No validation happens here. A missing runtime or script surfaces as the
//! runtime's own failure (or the spawn error).

use anyhow::{Context, Result};
use pyright_alright_core::config::LauncherConfig;
use pyright_alright_core::{exit_code, PackageLayout, RuntimeCommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Wrapper package installation directory: `PYRIGHT_ALRIGHT_HOME` when set,
/// otherwise the directory holding the (symlink-resolved) executable.
pub fn install_dir(config: &LauncherConfig) -> Result<PathBuf> {
    if let Some(home) = &config.home {
        return Ok(home.clone());
    }
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable {} has no parent directory", exe.display()))
}

#[derive(Debug, Clone)]
pub struct Launcher {
    layout: PackageLayout,
    runtime: RuntimeCommand,
}

impl Launcher {
    pub fn new(layout: PackageLayout, runtime: RuntimeCommand) -> Self {
        Self { layout, runtime }
    }

    pub fn from_config(config: &LauncherConfig) -> Result<Self> {
        Ok(Self::new(
            PackageLayout::new(install_dir(config)?),
            config.runtime.clone(),
        ))
    }

    pub fn entry_script(&self) -> PathBuf {
        self.layout.entry_script()
    }

    /// `<runtime> run <index.js> <args...>` with inherited stdio.
    pub fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = self.runtime.command([OsStr::new("run"), self.entry_script().as_os_str()]);
        cmd.args(args);
        cmd
    }

    /// Run to completion and return the child's exit code.
    pub fn launch<I, S>(&self, args: I) -> Result<i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = self.command(args);
        tracing::debug!("Launching {:?}", cmd);
        let status = cmd
            .status()
            .with_context(|| format!("Failed to execute '{}'", self.runtime.program))?;
        Ok(exit_code(&status))
    }
}
