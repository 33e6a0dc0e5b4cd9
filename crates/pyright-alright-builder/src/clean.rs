//! Removal of previously placed artifacts.

use pyright_alright_core::PackageLayout;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::BuildError;

/// Remove `<package>/pyright/dist/` and `<package>/pyright/index.js`.
///
/// Missing targets are fine, so running this twice leaves the same state as
/// running it once.
pub fn clean_artifacts(layout: &PackageLayout) -> Result<(), BuildError> {
    tracing::info!(
        "Clean existing pyright artifacts in {}",
        layout.artifact_dir().display()
    );
    let dist = layout.dist_dir();
    remove_missing_ok(&dist, fs::remove_dir_all(&dist))?;
    let entry = layout.entry_script();
    remove_missing_ok(&entry, fs::remove_file(&entry))?;
    Ok(())
}

fn remove_missing_ok(path: &Path, result: io::Result<()>) -> Result<(), BuildError> {
    match result {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::error!("Failed to remove {}: {}", path.display(), e);
            Err(BuildError::io("remove", path, e))
        }
    }
}
