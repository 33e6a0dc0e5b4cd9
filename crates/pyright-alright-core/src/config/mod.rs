//! Unified configuration layer.
//!
//! Every environment variable is read here; the builder and launcher access
//! structured config instead of calling `std::env::var` directly.
//!
//! - `env_keys`: key constants and aliases
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `.env` loading
//! - `schema`: `BuildConfig`, `LauncherConfig`, `ObservabilityConfig`

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv, load_dotenv_from_dir};
pub use schema::{BuildConfig, GithubRepo, LauncherConfig, ObservabilityConfig};

/// Pyright release built when no version is given on the command line.
pub const DEFAULT_PYRIGHT_VERSION: &str = "1.1.378";

/// Sentinel version that is resolved through the "latest release" redirect.
pub const LATEST_VERSION: &str = "latest";
