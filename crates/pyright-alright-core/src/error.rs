use thiserror::Error;

/// Errors raised while turning environment / CLI values into configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Runtime command is empty (set PYRIGHT_ALRIGHT_RUNTIME or --runtime)")]
    EmptyRuntime,

    #[error("Repository '{0}' must look like 'owner/name'")]
    InvalidRepo(String),
}
