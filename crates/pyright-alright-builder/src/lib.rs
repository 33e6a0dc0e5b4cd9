//! Builder: resolve a Pyright release, fetch and extract its sources, run the
//! bun install/build steps and place `dist/` + `index.js` into the wrapper
//! package.

pub mod clean;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod pipeline;
pub mod place;
pub mod steps;
pub mod version;

pub use error::BuildError;
pub use pipeline::{BuildPlan, BuildReport, Builder};
pub use steps::{BuildStep, StepKind, StepRunner, SystemRunner};
pub use version::VersionRequest;
