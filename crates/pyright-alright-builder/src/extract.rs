//! Zip extraction into the scratch root.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::BuildError;

/// Unpack `bytes` under `dest`, returning the number of files written.
///
/// Entries that would land outside `dest` are skipped. Existing files are
/// overwritten.
pub fn extract_archive(bytes: &[u8], dest: &Path) -> Result<usize, BuildError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    fs::create_dir_all(dest).map_err(|e| BuildError::io("create", dest, e))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(rel) = entry.enclosed_name().map(Path::to_path_buf) else {
            tracing::warn!("Skipping unsafe archive entry '{}'", entry.name());
            continue;
        };
        let out_path = dest.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| BuildError::io("create", &out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::io("create", parent, e))?;
        }
        let mut out_file =
            fs::File::create(&out_path).map_err(|e| BuildError::io("create", &out_path, e))?;
        std::io::copy(&mut entry, &mut out_file)
            .map_err(|e| BuildError::io("extract", &out_path, e))?;

        restore_mode(&out_path, entry.unix_mode())?;

        written += 1;
    }

    Ok(written)
}

#[cfg(unix)]
fn restore_mode(path: &Path, mode: Option<u32>) -> Result<(), BuildError> {
    use std::os::unix::fs::PermissionsExt;
    if let Some(mode) = mode {
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o777))
            .map_err(|e| BuildError::io("set permissions on", path, e))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn restore_mode(_path: &Path, _mode: Option<u32>) -> Result<(), BuildError> {
    Ok(())
}
