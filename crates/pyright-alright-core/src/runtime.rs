//! JavaScript runtime used both to build Pyright and to run the built
//! `index.js`.

use crate::error::ConfigError;
use std::ffi::OsStr;
use std::process::{Command, ExitStatus};

/// Program plus leading arguments, e.g. `bun` or `python -m pybun`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl RuntimeCommand {
    pub const DEFAULT_PROGRAM: &'static str = "bun";

    /// Split on whitespace; the first word is the program.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut words = raw.split_whitespace().map(str::to_string);
        let program = words.next().ok_or(ConfigError::EmptyRuntime)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    /// `Command` for `<program> <args...> <extra...>`.
    pub fn command<I, S>(&self, extra: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).args(extra);
        cmd
    }

    /// Human-readable form for logs.
    pub fn display_with(&self, extra: &[&str]) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(extra.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for RuntimeCommand {
    fn default() -> Self {
        Self {
            program: Self::DEFAULT_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

/// Exit code a parent should report for `status`: the child's own code, or
/// `128 + signal` when it was killed by a signal.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
