//! Command line options for the archive-mover tool
use crate::{config::MoverConfig, errors::MoverError, github::GITHUB_API_URL, migrate::main_migrate};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// archive-mover - Move archived GitHub repositories to another organisation
#[derive(Parser, Clone, Debug)]
pub struct MoverCli {
    /// Source Github organisation we are moving archived repositories from
    #[arg(short, long = "source-org", visible_alias = "from")]
    pub source_org: String,

    /// Target Github organisation we are moving archived repositories to
    #[arg(short, long = "target-org", visible_alias = "to")]
    pub target_org: String,

    /// Path that the results file will be written to
    #[arg(short = 'o', long = "results-file", default_value = "migrated-repo-results.txt")]
    pub results_file: PathBuf,

    /// Root of the GitHub REST API (GitHub Enterprise Server)
    #[arg(long = "api-url", default_value = GITHUB_API_URL)]
    pub api_url: Url,

    /// Only transfer these archived repositories (repeatable)
    #[arg(long = "only", value_name = "REPO")]
    pub only: Vec<String>,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl MoverCli {
    /// Log level selected by the verbose flag
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Run the archive-mover tool with already parsed command line options
/// # Errors
/// Error if the configuration is incomplete or any step of the migration fails
pub async fn archive_mover_main(args: MoverCli) -> Result<(), MoverError> {
    let config = MoverConfig::try_new(args)?;
    main_migrate(&config).await
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_full_command_line() {
        let args = MoverCli::parse_from([
            "archive-mover",
            "--source-org",
            "acme",
            "--target-org",
            "acme-archive",
            "--results-file",
            "out.txt",
            "--api-url",
            "https://ghe.example.com/api/v3",
            "--only",
            "a",
            "--only",
            "b",
            "-vv",
        ]);
        assert_eq!(args.source_org, "acme");
        assert_eq!(args.target_org, "acme-archive");
        assert_eq!(args.results_file, PathBuf::from("out.txt"));
        assert_eq!(args.api_url.host_str(), Some("ghe.example.com"));
        assert_eq!(args.only, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(args.log_level(), log::LevelFilter::Trace);
    }

    #[test]
    fn required_orgs_are_enforced() {
        assert!(MoverCli::try_parse_from(["archive-mover", "--source-org", "acme"]).is_err());
        assert!(MoverCli::try_parse_from(["archive-mover", "--target-org", "acme"]).is_err());
    }

    #[test]
    fn default_log_level_is_info() {
        let args = MoverCli::parse_from(["archive-mover", "--from", "a", "--to", "b"]);
        assert_eq!(args.log_level(), log::LevelFilter::Info);
        assert_eq!(args.api_url.as_str(), "https://api.github.com/");
    }
}
