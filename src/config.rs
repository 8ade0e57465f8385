//! Configuration handling
use std::path::PathBuf;

use url::Url;

use crate::{
    cli::MoverCli,
    errors::{MoverError, MoverErrorKind},
};

/// Environment variable holding the GitHub token
pub const TOKEN_ENV_VAR: &str = "GITHUB_AUTH";

/// Everything a migration run needs, resolved up front
#[derive(Clone, Debug)]
pub struct MoverConfig {
    /// Organisation the archived repositories are moved from
    pub source_org: String,

    /// Organisation the archived repositories are moved to
    pub target_org: String,

    /// Where the migrated URLs are written
    pub results_file: PathBuf,

    /// Root of the GitHub REST API
    pub api_url: Url,

    /// Only these repositories are transferred when not empty
    pub only: Vec<String>,

    /// GitHub token
    pub token: String,
}

impl MoverConfig {
    /// Build the configuration from the CLI and the `GITHUB_AUTH` environment variable
    /// # Errors
    /// Error if a required value is missing
    pub fn try_new(cli_args: MoverCli) -> Result<Self, MoverError> {
        Self::with_token(cli_args, std::env::var(TOKEN_ENV_VAR).ok())
    }

    /// Build the configuration from the CLI and an explicit token
    /// # Errors
    /// Error if a required value is missing
    pub fn with_token(cli_args: MoverCli, token: Option<String>) -> Result<Self, MoverError> {
        let source_org = cli_args.source_org.trim().to_string();
        let target_org = cli_args.target_org.trim().to_string();
        if source_org.is_empty() || target_org.is_empty() {
            return Err(MoverError::new(MoverErrorKind::Config).with_text(
                "Source (--source-org) and target (--target-org) organisations must be specified",
            ));
        }
        if source_org.eq_ignore_ascii_case(&target_org) {
            return Err("Source and target organisations can't be the same".into());
        }
        let token = match token {
            Some(token) if !token.trim().is_empty() => token.trim().to_string(),
            _ => {
                return Err(MoverError::new(MoverErrorKind::MissingToken).with_text(&format!(
                    "{TOKEN_ENV_VAR} environment variable not set"
                )))
            }
        };
        Ok(MoverConfig {
            source_org,
            target_org,
            results_file: cli_args.results_file,
            api_url: cli_args.api_url,
            only: cli_args.only,
            token,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> MoverCli {
        MoverCli::parse_from(std::iter::once("archive-mover").chain(args.iter().copied()))
    }

    #[test]
    fn builds_from_cli_and_token() {
        let config = MoverConfig::with_token(
            cli(&["--source-org", "acme", "--target-org", "acme-archive"]),
            Some("ghp_secret".to_string()),
        )
        .unwrap();
        assert_eq!(config.source_org, "acme");
        assert_eq!(config.target_org, "acme-archive");
        assert_eq!(config.results_file, PathBuf::from("migrated-repo-results.txt"));
        assert_eq!(config.api_url.as_str(), "https://api.github.com/");
        assert!(config.only.is_empty());
        assert_eq!(config.token, "ghp_secret");
    }

    #[test]
    fn missing_token_is_fatal() {
        let args = cli(&["-s", "acme", "-t", "acme-archive"]);
        let err = MoverConfig::with_token(args.clone(), None).unwrap_err();
        assert_eq!(err.kind(), &MoverErrorKind::MissingToken);
        let err = MoverConfig::with_token(args, Some("  ".to_string())).unwrap_err();
        assert_eq!(err.kind(), &MoverErrorKind::MissingToken);
    }

    #[test]
    fn empty_org_is_rejected() {
        let err = MoverConfig::with_token(
            cli(&["--source-org", "", "--target-org", "acme-archive"]),
            Some("t".to_string()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), &MoverErrorKind::Config);
    }

    #[test]
    fn same_org_is_rejected() {
        let err = MoverConfig::with_token(
            cli(&["--source-org", "Acme", "--target-org", "acme"]),
            Some("t".to_string()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), &MoverErrorKind::Config);
    }
}
