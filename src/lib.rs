//! # archive-mover
//!
//! Move archived GitHub repositories from one organisation to another
//!
//! ## Usage
//!
//! ```txt
//! Usage: archive-mover [OPTIONS] --source-org <SOURCE_ORG> --target-org <TARGET_ORG>
//!
//! Options:
//!   -s, --source-org <SOURCE_ORG>      Source Github organisation we are moving archived repositories from [aliases: from]
//!   -t, --target-org <TARGET_ORG>      Target Github organisation we are moving archived repositories to [aliases: to]
//!   -o, --results-file <RESULTS_FILE>  Path that the results file will be written to [default: migrated-repo-results.txt]
//!       --api-url <API_URL>            Root of the GitHub REST API (GitHub Enterprise Server) [default: https://api.github.com]
//!       --only <REPO>                  Only transfer these archived repositories (repeatable)
//!   -v, --verbose...                   Verbose mode (-v, -vv)
//!   -h, --help                         Print help
//! ```
//!
//! The token is read from the `GITHUB_AUTH` environment variable (a `.env` file is honoured).

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod migrate;
pub(crate) mod platform;
pub(crate) mod report;
pub(crate) mod utils;

mod github;

pub use cli::{archive_mover_main, MoverCli};
pub use config::{MoverConfig, TOKEN_ENV_VAR};
pub use errors::{MoverError, MoverErrorKind, PartialTransfer};
pub use github::platform::GithubPlatform;
pub use github::GITHUB_API_URL;
pub use migrate::{list_archived_repos, main_migrate, run_migration, select_repos, transfer_repos};
pub use platform::{Platform, PlatformFuture};
pub use report::write_results;
pub use utils::{MigrationOutcome, Repo};
