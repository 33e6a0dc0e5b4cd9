//! Filesystem layout of the wrapper package and of the scratch build tree.
//!
//! The artifact directory mirrors `packages/pyright/` of the upstream build
//! output: `dist/` plus the `index.js` entry script.

use std::path::{Path, PathBuf};

/// Directory inside the wrapper package holding the built tool.
pub const ARTIFACT_SUBDIR: &str = "pyright";
/// Build output directory name (upstream and wrapper side).
pub const DIST_DIR: &str = "dist";
/// Entry script name (upstream and wrapper side).
pub const ENTRY_SCRIPT: &str = "index.js";
/// Location of the CLI package inside the upstream source tree.
pub const UPSTREAM_PACKAGE_SUBDIR: &str = "packages/pyright";

/// Wrapper package side: `<root>/pyright/{dist/,index.js}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn artifact_dir(&self) -> PathBuf {
        self.root.join(ARTIFACT_SUBDIR)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.artifact_dir().join(DIST_DIR)
    }

    pub fn entry_script(&self) -> PathBuf {
        self.artifact_dir().join(ENTRY_SCRIPT)
    }
}

/// Scratch side: `<temp_root>/<project>-<version>/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchLayout {
    source_root: PathBuf,
}

impl ScratchLayout {
    pub fn new(temp_root: &Path, project: &str, version: &str) -> Self {
        Self {
            source_root: temp_root.join(format!("{project}-{version}")),
        }
    }

    /// Extracted source tree; dependency install runs here.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// CLI package directory; the build step runs here.
    pub fn package_dir(&self) -> PathBuf {
        self.source_root.join(UPSTREAM_PACKAGE_SUBDIR)
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.package_dir().join(DIST_DIR)
    }

    pub fn entry_script(&self) -> PathBuf {
        self.package_dir().join(ENTRY_SCRIPT)
    }
}
