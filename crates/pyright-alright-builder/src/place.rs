//! Copy the build output into the wrapper package.

use pyright_alright_core::{PackageLayout, ScratchLayout};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::BuildError;

/// Copy `packages/pyright/dist/` and `packages/pyright/index.js` into
/// `<package>/pyright/`, overwriting what is there.
pub fn place_artifacts(scratch: &ScratchLayout, layout: &PackageLayout) -> Result<(), BuildError> {
    tracing::info!(
        "Move built pyright into {}",
        layout.artifact_dir().display()
    );

    let src_dist = scratch.dist_dir();
    let src_entry = scratch.entry_script();
    for required in [&src_dist, &src_entry] {
        if !required.exists() {
            return Err(BuildError::MissingBuildOutput(required.clone()));
        }
    }

    let artifact_dir = layout.artifact_dir();
    fs::create_dir_all(&artifact_dir).map_err(|e| BuildError::io("create", &artifact_dir, e))?;

    let copied = copy_dir_all(&src_dist, &layout.dist_dir())?;
    let dest_entry = layout.entry_script();
    fs::copy(&src_entry, &dest_entry).map_err(|e| BuildError::io("copy", &src_entry, e))?;

    tracing::debug!("Copied {} files from {}", copied + 1, src_dist.display());
    Ok(())
}

/// Recursive copy; returns the number of files copied.
pub fn copy_dir_all(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    let mut files = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| BuildError::io("walk", src, io::Error::from(e)))?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| BuildError::io("create", &target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::io("create", parent, e))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| BuildError::io("copy", entry.path(), e))?;
            files += 1;
        }
    }
    Ok(files)
}
