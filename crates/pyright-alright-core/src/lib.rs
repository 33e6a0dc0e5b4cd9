//! pyright-alright core: configuration, wrapper package layout, runtime command
//! and tracing setup shared by the `pyright` launcher and the `build-pyright`
//! builder.

pub mod config;
pub mod error;
pub mod layout;
pub mod observability;
pub mod runtime;

pub use error::ConfigError;
pub use layout::{PackageLayout, ScratchLayout};
pub use runtime::{exit_code, RuntimeCommand};
