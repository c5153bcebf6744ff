//! Error types for the SSE encoder.
use std::error::Error as StdError;
use std::fmt;

/// Errors while encoding a record stream into SSE frames.
#[derive(Debug)]
pub struct Error {
    /// Underlying error, when one exists (serde error, upstream failure).
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    /// Which part of the pipeline failed.
    pub error_kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A record could not be turned into frame bytes.
    Serialization,
    /// The upstream producer failed.
    Producer,
}

impl Error {
    pub fn serialization(source: impl StdError + Send + Sync + 'static) -> Self {
        Error {
            source: Some(Box::new(source)),
            error_kind: ErrorKind::Serialization,
        }
    }

    pub fn producer(source: impl StdError + Send + Sync + 'static) -> Self {
        Error {
            source: Some(Box::new(source)),
            error_kind: ErrorKind::Producer,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SSE Encoding Error: {self:?}")
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
