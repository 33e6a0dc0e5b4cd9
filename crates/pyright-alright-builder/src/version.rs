//! Version resolution: literal tags pass through, `latest` is resolved from
//! the `Location` header of the "latest release" redirect.

use pyright_alright_core::config::{GithubRepo, LATEST_VERSION};
use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;
use crate::http;

/// Version given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRequest {
    Latest,
    Tag(String),
}

impl FromStr for VersionRequest {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BuildError::EmptyVersion);
        }
        if s == LATEST_VERSION {
            Ok(Self::Latest)
        } else {
            Ok(Self::Tag(s.to_string()))
        }
    }
}

impl fmt::Display for VersionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST_VERSION),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

/// Resolve a request to a bare tag. Only `Latest` touches the network.
pub fn resolve_version(
    agent: &ureq::Agent,
    repo: &GithubRepo,
    request: &VersionRequest,
) -> Result<String, BuildError> {
    match request {
        VersionRequest::Tag(tag) => Ok(tag.clone()),
        VersionRequest::Latest => fetch_latest_version(agent, repo),
    }
}

/// Ask the release endpoint where "latest" points. `agent` must not follow
/// redirects (see [`http::resolve_agent`]).
pub fn fetch_latest_version(agent: &ureq::Agent, repo: &GithubRepo) -> Result<String, BuildError> {
    let url = repo.latest_release_url();
    tracing::debug!("Resolving latest release via {}", url);
    let resp = http::get(agent, &url)?;
    let location = resp
        .header("location")
        .ok_or_else(|| BuildError::MissingLocation(url.clone()))?;
    let version = version_from_location(location, &repo.release_tag_prefix())?;
    tracing::info!("Latest pyright release is {}", version);
    Ok(version)
}

/// Strip the release tag prefix from a `Location` value.
pub fn version_from_location(location: &str, prefix: &str) -> Result<String, BuildError> {
    let unexpected = || BuildError::UnexpectedLocation {
        location: location.to_string(),
        prefix: prefix.to_string(),
    };
    let tag = location.trim().strip_prefix(prefix).ok_or_else(unexpected)?;
    if tag.is_empty() || tag.contains('/') {
        return Err(unexpected());
    }
    Ok(tag.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://github.com/microsoft/pyright/releases/tag/";

    #[test]
    fn test_parse_request() {
        assert_eq!("latest".parse::<VersionRequest>().unwrap(), VersionRequest::Latest);
        assert_eq!(
            " 1.1.378 ".parse::<VersionRequest>().unwrap(),
            VersionRequest::Tag("1.1.378".into())
        );
        assert!(matches!("  ".parse::<VersionRequest>(), Err(BuildError::EmptyVersion)));
    }

    #[test]
    fn test_literal_tag_passes_through() {
        let agent = http::resolve_agent();
        let v = resolve_version(
            &agent,
            &GithubRepo::default(),
            &VersionRequest::Tag("1.1.378".into()),
        )
        .unwrap();
        assert_eq!(v, "1.1.378");
    }

    #[test]
    fn test_version_from_location() {
        let v = version_from_location(
            "https://github.com/microsoft/pyright/releases/tag/1.2.0",
            PREFIX,
        )
        .unwrap();
        assert_eq!(v, "1.2.0");
    }

    #[test]
    fn test_version_from_location_rejects_other_urls() {
        for bad in [
            "https://github.com/microsoft/pyright/releases",
            "https://github.com/microsoft/pyright/releases/tag/",
            "https://example.com/releases/tag/1.2.0",
            "https://github.com/microsoft/pyright/releases/tag/1.2.0/extra",
        ] {
            assert!(
                matches!(
                    version_from_location(bad, PREFIX),
                    Err(BuildError::UnexpectedLocation { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }
}
