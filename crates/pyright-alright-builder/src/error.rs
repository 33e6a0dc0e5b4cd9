use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::steps::StepKind;

/// Errors returned by the build pipeline. The first one aborts the build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Version must not be empty")]
    EmptyVersion,

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("No Location header in response from {0}")]
    MissingLocation(String),

    #[error("Unexpected Location header '{location}' (expected prefix '{prefix}')")]
    UnexpectedLocation { location: String, prefix: String },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid zip archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive did not unpack to {}", .0.display())]
    MissingSourceTree(PathBuf),

    #[error("Build output not found: {}", .0.display())]
    MissingBuildOutput(PathBuf),

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Step '{step}' failed with code {code}")]
    StepFailed { step: StepKind, code: i32 },
}

impl BuildError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure: a failed build subprocess passes its
    /// own code through, everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StepFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
