use clap::Parser;
use pyright_alright_core::config::DEFAULT_PYRIGHT_VERSION;
use std::path::PathBuf;

/// Repackage Pyright with bun into the pyright-alright wrapper package
#[derive(Parser, Debug)]
#[command(name = "build-pyright")]
#[command(author, version, about, long_about = None)]
pub struct BuildCli {
    /// Pyright version to package: a release tag (e.g. 1.1.378) or "latest"
    #[arg(
        id = "pyright_version",
        value_name = "PYRIGHT_VERSION",
        default_value = DEFAULT_PYRIGHT_VERSION
    )]
    pub pyright_version: String,

    /// Wrapper package directory (default: $PYRIGHT_ALRIGHT_PACKAGE_DIR or ./pyright_alright)
    #[arg(long, value_name = "DIR")]
    pub package_dir: Option<PathBuf>,

    /// Scratch directory for the extracted sources (default: $PYRIGHT_ALRIGHT_TEMP_DIR or ./temp)
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Runtime command used for install/build (default: $PYRIGHT_ALRIGHT_RUNTIME or bun)
    #[arg(long, value_name = "CMD")]
    pub runtime: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        BuildCli::command().debug_assert();
    }

    #[test]
    fn test_version_flag_and_positional_coexist() {
        let err = BuildCli::try_parse_from(["build-pyright", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        let cli = BuildCli::try_parse_from(["build-pyright", "1.1.400"]).unwrap();
        assert_eq!(cli.pyright_version, "1.1.400");
    }

    #[test]
    fn test_version_defaults_to_pinned_release() {
        let cli = BuildCli::try_parse_from(["build-pyright"]).unwrap();
        assert_eq!(cli.pyright_version, "1.1.378");
        assert!(cli.package_dir.is_none());
    }

    #[test]
    fn test_latest_and_flags() {
        let cli = BuildCli::try_parse_from([
            "build-pyright",
            "latest",
            "--package-dir",
            "pkg",
            "--runtime",
            "python -m pybun",
        ])
        .unwrap();
        assert_eq!(cli.pyright_version, "latest");
        assert_eq!(cli.package_dir, Some(PathBuf::from("pkg")));
        assert_eq!(cli.runtime.as_deref(), Some("python -m pybun"));
    }

    #[test]
    fn test_rejects_extra_positionals() {
        assert!(BuildCli::try_parse_from(["build-pyright", "1.0", "2.0"]).is_err());
    }
}
