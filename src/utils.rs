//! Shared repository and outcome types
use serde::{Deserialize, Serialize};

/// Repository information
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Repo {
    /// Name of the repository
    pub name: String,

    /// Whether the repository is archived
    pub archived: bool,

    /// Web URL of the repository
    pub html_url: String,
}

/// A transfer the platform accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationOutcome {
    /// Web URL of the repository before it moved
    pub original_url: String,
}

impl MigrationOutcome {
    /// Record an accepted transfer for the repository at `original_url`
    pub fn new<S: Into<String>>(original_url: S) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

impl From<&Repo> for MigrationOutcome {
    fn from(repo: &Repo) -> Self {
        Self::new(repo.html_url.clone())
    }
}
