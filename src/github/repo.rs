//! Github Repo struct and conversion to Repo struct
use crate::utils::Repo;
use serde::{Deserialize, Serialize};

/// Github Repo
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct RepoGithub {
    /// Repository ID
    pub id: u64,

    /// Repository name
    pub name: String,

    /// Repository archived status
    #[serde(default)]
    pub archived: bool,

    /// Repository URL
    pub html_url: String,
}

impl From<RepoGithub> for Repo {
    fn from(repo: RepoGithub) -> Self {
        Repo {
            name: repo.name,
            archived: repo.archived,
            html_url: repo.html_url,
        }
    }
}

/// Body of `POST /repos/{owner}/{repo}/transfer`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Organisation receiving the repository
    pub new_owner: String,

    /// Name of the repository in its new owner
    pub new_name: String,
}

impl TransferRequest {
    /// Move `repo` to `new_owner` without renaming it
    pub fn keep_name(repo: &Repo, new_owner: &str) -> Self {
        Self {
            new_owner: new_owner.to_string(),
            new_name: repo.name.clone(),
        }
    }
}
