//! Error handling for the archive-mover crate.
use std::{error::Error as StdError, fmt};

use crate::utils::MigrationOutcome;

/// Error type for the archive-mover crate.
#[derive(Debug)]
pub struct MoverError {
    /// Inner error.
    inner: Box<Inner>,
}

impl MoverError {
    /// Create a new error.
    pub(crate) fn new(kind: MoverErrorKind) -> Self {
        Self {
            inner: Box::new(Inner { kind, source: None }),
        }
    }

    /// Create a new error of the given kind wrapping a source error.
    pub(crate) fn new_with_source<E>(kind: MoverErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(source.into()),
            }),
        }
    }

    /// Attach a text message as the source of the error.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Kind of the error.
    pub fn kind(&self) -> &MoverErrorKind {
        &self.inner.kind
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the archive-mover crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: MoverErrorKind,

    /// Source error.
    source: Option<BoxError>,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverErrorKind {
    /// Invalid command line or configuration value.
    Config,

    /// The API token is not set.
    MissingToken,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// Error related to url parsing.
    Url,

    /// Listing the source repositories failed.
    ListRepos,

    /// A repository transfer was refused.
    Transfer,

    /// Writing the results file failed.
    Report,
}

impl fmt::Display for MoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.source {
            Some(source) => write!(f, "{:?}: {}", self.inner.kind, source),
            None => write!(f, "{:?}", self.inner.kind),
        }
    }
}

impl StdError for MoverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for MoverError {
    fn from(e: reqwest::Error) -> Self {
        Self::new_with_source(MoverErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for MoverError {
    fn from(e: serde_json::Error) -> Self {
        Self::new_with_source(MoverErrorKind::Serde, e)
    }
}

impl From<url::ParseError> for MoverError {
    fn from(e: url::ParseError) -> Self {
        Self::new_with_source(MoverErrorKind::Url, e)
    }
}

impl From<std::io::Error> for MoverError {
    fn from(e: std::io::Error) -> Self {
        Self::new_with_source(MoverErrorKind::Report, e)
    }
}

impl From<&str> for MoverError {
    fn from(text: &str) -> Self {
        Self::new(MoverErrorKind::Config).with_text(text)
    }
}

impl From<String> for MoverError {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// A transfer batch that stopped early.
///
/// Holds the transfers that were accepted before the failing one, in order.
#[derive(Debug)]
pub struct PartialTransfer {
    /// Transfers accepted before the failure
    pub migrated: Vec<MigrationOutcome>,

    /// The error that stopped the batch
    pub error: MoverError,
}

impl fmt::Display for PartialTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} accepted transfers)",
            self.error,
            self.migrated.len()
        )
    }
}

impl StdError for PartialTransfer {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl From<PartialTransfer> for MoverError {
    fn from(partial: PartialTransfer) -> Self {
        partial.error
    }
}
