//! Error types for the health probe.
use std::error::Error as StdError;
use std::fmt;

/// Errors raised by the session capabilities the probe consumes.
/// The probe itself never surfaces these to its caller; they are reduced to
/// a DOWN status and, for release failures, logged as diagnostic context.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The session factory failed to open a session.
    Acquisition,
    /// The verification operation failed.
    Verification,
    /// Closing the session failed.
    Release,
    /// Acquisition or verification did not complete within the deadline.
    Timeout,
}

impl Error {
    pub fn timeout() -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Timeout,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.error_kind {
            ErrorKind::Acquisition => write!(f, "failed to acquire session")?,
            ErrorKind::Verification => write!(f, "verification query failed")?,
            ErrorKind::Release => write!(f, "failed to release session")?,
            ErrorKind::Timeout => write!(f, "health check timed out")?,
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
