//! Move archived repositories from one organisation to another
use log::{debug, error, info, warn};

use crate::{
    config::MoverConfig,
    errors::{MoverError, PartialTransfer},
    github::platform::GithubPlatform,
    platform::Platform,
    report::write_results,
    utils::{MigrationOutcome, Repo},
};

/// Every repository of `namespace` that is archived, in listing order
/// # Errors
/// Error if any page of the listing can't be fetched
pub async fn list_archived_repos(
    platform: &dyn Platform,
    namespace: &str,
) -> Result<Vec<Repo>, MoverError> {
    let repos = platform.get_all_repos(namespace).await?;
    debug!("Number of repos in {namespace}: {}", repos.len());
    let archived: Vec<Repo> = repos.into_iter().filter(|repo| repo.archived).collect();
    info!("Found {} archived repositories", archived.len());
    Ok(archived)
}

/// Keep only the repositories named in `only`, or all of them when it is empty
pub fn select_repos(repos: Vec<Repo>, only: &[String]) -> Vec<Repo> {
    if only.is_empty() {
        return repos;
    }
    for name in only {
        if !repos.iter().any(|repo| &repo.name == name) {
            warn!("{name} is not an archived repository, skipping");
        }
    }
    repos
        .into_iter()
        .filter(|repo| only.contains(&repo.name))
        .collect()
}

/// Transfer each repository to the target organisation, one at a time
///
/// Stops at the first refused transfer.
/// # Errors
/// The transfers accepted so far together with the error that stopped the batch
pub async fn transfer_repos(
    platform: &dyn Platform,
    config: &MoverConfig,
    repos: &[Repo],
) -> Result<Vec<MigrationOutcome>, PartialTransfer> {
    let mut migrated = Vec::with_capacity(repos.len());
    for (idx, repo) in repos.iter().enumerate() {
        debug!("[{}/{}] Transferring {}", idx + 1, repos.len(), repo.name);
        if let Err(error) = platform
            .transfer_repo(repo, &config.source_org, &config.target_org)
            .await
        {
            return Err(PartialTransfer { migrated, error });
        }
        info!(
            "Migrated repo {} from org {} to org {}",
            repo.name, config.source_org, config.target_org
        );
        migrated.push(MigrationOutcome::from(repo));
    }
    Ok(migrated)
}

/// List, transfer and report against the given platform
/// # Errors
/// Error if listing, any transfer or writing the results file fails
pub async fn run_migration(platform: &dyn Platform, config: &MoverConfig) -> Result<(), MoverError> {
    info!(
        "Moving archived repositories on {} from {} to {}",
        platform.get_remote_url(),
        config.source_org,
        config.target_org
    );
    let archived = list_archived_repos(platform, &config.source_org).await?;
    let archived = select_repos(archived, &config.only);
    let migrated = match transfer_repos(platform, config, &archived).await {
        Ok(migrated) => migrated,
        Err(partial) => {
            for outcome in &partial.migrated {
                warn!("Already transferred: {}", outcome.original_url);
            }
            error!(
                "Stopped after {} of {} transfers",
                partial.migrated.len(),
                archived.len()
            );
            return Err(partial.into());
        }
    };
    write_results(&config.results_file, &migrated)
}

/// Main function to migrate archived repositories on GitHub
/// # Errors
/// Error if any step of the migration fails
pub async fn main_migrate(config: &MoverConfig) -> Result<(), MoverError> {
    let platform = GithubPlatform::from_config(config);
    run_migration(&platform, config).await
}
