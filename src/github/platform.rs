//! Github Platform
use super::{GITHUB_API_HEADER, GITHUB_API_URL, GITHUB_API_VERSION, GITHUB_PAGE_SIZE};
use crate::{
    config::MoverConfig,
    errors::{MoverError, MoverErrorKind},
    github::repo::{RepoGithub, TransferRequest},
    platform::{Platform, PlatformFuture},
    utils::Repo,
};
use log::debug;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, LINK, USER_AGENT};
use reqwest::RequestBuilder;
use url::Url;
use urlencoding::encode;

/// Github Platform
#[derive(Debug, Clone)]
pub struct GithubPlatform {
    /// Github token
    token: String,

    /// Root of the REST API
    api_url: Url,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubPlatform {
    /// Create a new GithubPlatform talking to `api_url`
    pub fn new(token: String, api_url: Url) -> Self {
        Self {
            token,
            api_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create the platform described by the run configuration
    pub fn from_config(config: &MoverConfig) -> Self {
        Self::new(config.token.clone(), config.api_url.clone())
    }

    /// Absolute URL of an API path such as `orgs/foo/repos`
    fn endpoint(&self, path: &str) -> Result<Url, MoverError> {
        let root = self.api_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{root}/{path}"))?)
    }

    /// Add the headers every GitHub API call needs
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
    }
}

/// Target of the `rel="next"` entry of a `Link` header, if any
pub(crate) fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;
        if parts.any(|param| param.trim() == r#"rel="next""#) {
            Url::parse(target).ok()
        } else {
            None
        }
    })
}

impl Platform for GithubPlatform {
    fn get_remote_url(&self) -> &str {
        self.api_url.host_str().unwrap_or(GITHUB_API_URL)
    }

    fn get_all_repos<'a>(&'a self, namespace: &'a str) -> PlatformFuture<'a, Vec<Repo>> {
        Box::pin(async move {
            let list_error =
                |e: reqwest::Error| MoverError::new_with_source(MoverErrorKind::ListRepos, e);
            let mut first = self.endpoint(&format!("orgs/{}/repos", encode(namespace)))?;
            first
                .query_pairs_mut()
                .append_pair("type", "all")
                .append_pair("per_page", GITHUB_PAGE_SIZE)
                .append_pair("page", "1");

            let mut next = Some(first);
            let mut page: usize = 0;
            let mut all_repos = vec![];
            while let Some(url) = next.take() {
                page += 1;
                let response = self
                    .authorized(self.client.get(url))
                    .send()
                    .await
                    .map_err(list_error)?;
                let status = response.status();
                if !status.is_success() {
                    let text = response.text().await.map_err(list_error)?;
                    return Err(MoverError::new(MoverErrorKind::ListRepos).with_text(&format!(
                        "listing repositories in {namespace}: status code {status}: {text}"
                    )));
                }
                next = next_page_url(response.headers());
                let text = response.text().await.map_err(list_error)?;
                let repos: Vec<RepoGithub> = serde_json::from_str(&text)?;
                debug!("Requested github {namespace} (page {page}): {}", repos.len());
                all_repos.extend(repos.into_iter().map(Repo::from));
            }
            Ok(all_repos)
        })
    }

    fn transfer_repo<'a>(
        &'a self,
        repo: &'a Repo,
        namespace: &'a str,
        new_owner: &'a str,
    ) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            let url = self.endpoint(&format!(
                "repos/{}/{}/transfer",
                encode(namespace),
                encode(&repo.name)
            ))?;
            let body = TransferRequest::keep_name(repo, new_owner);
            let response = self
                .authorized(self.client.post(url))
                .json(&body)
                .send()
                .await
                .map_err(|e| MoverError::new_with_source(MoverErrorKind::Transfer, e))?;
            // 202 Accepted: the transfer runs asynchronously on GitHub's side
            let status = response.status();
            if status.is_success() {
                return Ok(());
            }
            let text = response.text().await?;
            Err(MoverError::new(MoverErrorKind::Transfer).with_text(&format!(
                "migrating repo {} from owner {namespace} to owner {new_owner}: status code {}: {text}",
                repo.name,
                status.as_u16()
            )))
        })
    }
}
