//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// TraceCode - Trace which development files ended up in a deployed codebase
///
/// Compares a development scan with a deployment scan (both ScanCode JSON
/// documents) and reports, for every development file, the deployed files it
/// was matched to by checksum or by path.
#[derive(Parser, Debug)]
#[command(name = "tracecode", display_name = "TraceCode")]
#[command(author, about, long_about = None)]
#[command(version = concat!("version ", env!("CARGO_PKG_VERSION")))]
pub struct Cli {
    /// Path to the "development" codebase scan file
    #[arg(long, value_name = "FILE")]
    pub develop: PathBuf,

    /// Path to the "deployed" codebase scan file
    #[arg(long, value_name = "FILE")]
    pub deploy: PathBuf,

    /// Path of the .json output file. Use "-" for on screen display
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub json: String,

    /// Analysis options file (.toml, .json, .yaml or .yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Output file, or `None` for stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        (self.json != "-").then(|| PathBuf::from(&self.json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_text() {
        let version = Cli::command().render_version();
        assert_eq!(version.trim_end(), concat!("TraceCode version ", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::parse_from(["tracecode", "--develop", "dev.json", "--deploy", "dep.json"]);
        assert_eq!(cli.develop, PathBuf::from("dev.json"));
        assert_eq!(cli.deploy, PathBuf::from("dep.json"));
        assert_eq!(cli.json, "-");
        assert!(cli.output_path().is_none());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_short_flags() {
        let cli = Cli::parse_from([
            "tracecode",
            "--develop",
            "dev.json",
            "--deploy",
            "dep.json",
            "-j",
            "out.json",
            "-c",
            "tracecode.toml",
            "-v",
        ]);
        assert_eq!(cli.output_path(), Some(PathBuf::from("out.json")));
        assert_eq!(cli.config, Some(PathBuf::from("tracecode.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn develop_and_deploy_are_required() {
        assert!(Cli::try_parse_from(["tracecode"]).is_err());
        assert!(Cli::try_parse_from(["tracecode", "--develop", "dev.json"]).is_err());
        assert!(Cli::try_parse_from(["tracecode", "--deploy", "dep.json"]).is_err());
    }
}
