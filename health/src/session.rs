use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

/// A live, exclusively owned resource that requires explicit release.
///
/// A session belongs to exactly one probe invocation and never survives it:
/// the probe calls [`ProbeSession::close`] exactly once before its own call
/// returns, on every code path.
#[async_trait]
pub trait ProbeSession: Send + std::fmt::Debug {
    /// Runs the single read-only verification operation, returning a small
    /// identity/version payload on success.
    async fn verify(&mut self) -> Result<Value, Error>;

    /// Releases the underlying resource.
    async fn close(self: Box<Self>) -> Result<(), Error>;
}

/// Opens one session per probe invocation.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn session(&self) -> Result<Box<dyn ProbeSession>, Error>;
}
