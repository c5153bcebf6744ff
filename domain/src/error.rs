//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors are modeled as a tree: this struct is the root, holding an
/// `error_kind` enum describing what went wrong plus the original `source`
/// error when one exists. Lower layers (the data-access backends) construct
/// these directly; the `web` layer reduces the kinds to HTTP status codes
/// without depending on any backend crate.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Kinds of internal errors: problems with our own data or infrastructure.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Entity(EntityErrorKind),
    Other(String),
}

/// Kinds of entity errors bubbling up from the data-access layer.
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    Invalid,
    Store(String),
    Other(String),
}

/// Kinds of external errors: failures of collaborators we call out to.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    Network,
    Other(String),
}

impl Error {
    /// An entity-level error with an underlying source.
    pub fn entity(
        kind: EntityErrorKind,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Error {
            source: Some(Box::new(source)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(kind)),
        }
    }

    /// A data-store failure described only by a message.
    pub fn store(message: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::Store(message.into()),
            )),
        }
    }

    pub fn invalid() -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(
                EntityErrorKind::Invalid,
            )),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Domain Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
