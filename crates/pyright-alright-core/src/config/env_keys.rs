//! Environment variable keys.
//!
//! Primary keys use the `PYRIGHT_ALRIGHT_*` prefix; the short `ALRIGHT_*`
//! forms are accepted as aliases.

/// Builder: wrapper package, scratch root, upstream location.
pub mod build {
    pub const PACKAGE_DIR: &str = "PYRIGHT_ALRIGHT_PACKAGE_DIR";
    pub const PACKAGE_DIR_ALIASES: &[&str] = &["ALRIGHT_PACKAGE_DIR"];

    pub const TEMP_DIR: &str = "PYRIGHT_ALRIGHT_TEMP_DIR";
    pub const TEMP_DIR_ALIASES: &[&str] = &["ALRIGHT_TEMP_DIR"];

    pub const GITHUB_BASE: &str = "PYRIGHT_ALRIGHT_GITHUB_BASE";
    pub const REPO: &str = "PYRIGHT_ALRIGHT_REPO";
}

/// Shared by builder and launcher.
pub mod runtime {
    /// Program plus leading arguments, whitespace separated (e.g. `python -m pybun`).
    pub const RUNTIME: &str = "PYRIGHT_ALRIGHT_RUNTIME";
    pub const RUNTIME_ALIASES: &[&str] = &["ALRIGHT_RUNTIME"];
}

/// Launcher.
pub mod launcher {
    /// Overrides the wrapper package installation directory.
    pub const HOME: &str = "PYRIGHT_ALRIGHT_HOME";
}

/// Logging.
pub mod observability {
    pub const QUIET: &str = "PYRIGHT_ALRIGHT_QUIET";
    pub const QUIET_ALIASES: &[&str] = &["ALRIGHT_QUIET"];

    pub const LOG_LEVEL: &str = "PYRIGHT_ALRIGHT_LOG_LEVEL";
    pub const LOG_LEVEL_ALIASES: &[&str] = &["ALRIGHT_LOG_LEVEL"];

    pub const LOG_JSON: &str = "PYRIGHT_ALRIGHT_LOG_JSON";
    pub const LOG_JSON_ALIASES: &[&str] = &["ALRIGHT_LOG_JSON"];
}
