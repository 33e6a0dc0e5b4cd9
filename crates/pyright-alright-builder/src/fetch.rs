//! Source archive download.

use pyright_alright_core::config::GithubRepo;

use crate::error::BuildError;
use crate::http;

/// Download `<repo>/archive/refs/tags/<version>.zip` into memory.
///
/// No checksum is verified; integrity relies on TLS.
pub fn download_archive(
    agent: &ureq::Agent,
    repo: &GithubRepo,
    version: &str,
) -> Result<Vec<u8>, BuildError> {
    let url = repo.archive_url(version);
    tracing::info!("Get pyright {} archive", version);
    tracing::debug!("GET {}", url);
    let bytes = http::get_bytes(agent, &url)?;
    tracing::debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes)
}
