//! Blocking HTTP helpers on top of `ureq`.

use std::io::Read;
use std::time::Duration;

use crate::error::BuildError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const RESOLVE_READ_TIMEOUT: Duration = Duration::from_secs(30);
const DOWNLOAD_READ_TIMEOUT: Duration = Duration::from_secs(300);

/// Agent for the "latest release" lookup: redirects are returned, not followed.
pub fn resolve_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(RESOLVE_READ_TIMEOUT)
        .redirects(0)
        .build()
}

/// Agent for archive downloads (GitHub answers with a redirect to codeload).
pub fn download_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(DOWNLOAD_READ_TIMEOUT)
        .build()
}

/// GET `url`; 4xx/5xx become [`BuildError::HttpStatus`].
pub fn get(agent: &ureq::Agent, url: &str) -> Result<ureq::Response, BuildError> {
    agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => BuildError::HttpStatus {
            url: url.to_string(),
            status,
        },
        e @ ureq::Error::Transport(_) => BuildError::Http {
            url: url.to_string(),
            source: Box::new(e),
        },
    })
}

/// GET `url` and buffer the whole body. Anything but 200 is an error.
pub fn get_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>, BuildError> {
    let resp = get(agent, url)?;
    let status = resp.status();
    if status != 200 {
        return Err(BuildError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let mut bytes = Vec::new();
    resp.into_reader()
        .read_to_end(&mut bytes)
        .map_err(|source| BuildError::Body {
            url: url.to_string(),
            source,
        })?;
    Ok(bytes)
}
