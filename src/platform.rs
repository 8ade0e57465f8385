//! Hosting platform abstraction
use std::future::Future;
use std::pin::Pin;

use crate::{errors::MoverError, utils::Repo};

/// Future returned by [`Platform`] methods
pub type PlatformFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, MoverError>> + Send + 'a>>;

/// A hosting platform exposing repository management
pub trait Platform: Sync + Send {
    /// List every repository owned by `namespace`, following all pages
    fn get_all_repos<'a>(&'a self, namespace: &'a str) -> PlatformFuture<'a, Vec<Repo>>;

    /// Ask the platform to move `repo` from `namespace` to `new_owner`, keeping its name
    fn transfer_repo<'a>(
        &'a self,
        repo: &'a Repo,
        namespace: &'a str,
        new_owner: &'a str,
    ) -> PlatformFuture<'a, ()>;

    /// Host the platform talks to
    fn get_remote_url(&self) -> &str;
}
