//! Scoped health probe for session-like resources.
//!
//! A probe invocation acquires a short-lived session from a
//! [`SessionFactory`], runs exactly one verification operation against it,
//! guarantees the session is released on every exit path, and reduces the
//! outcome to an UP/DOWN [`Status`] value. `check()` never returns an
//! error: acquisition and verification failures become `Status::Down`,
//! release failures are logged and reported as DOWN, and a caller-supplied
//! timeout converts a hung dependency into DOWN as well.
//!
//! Per-invocation lifecycle: ACQUIRING -> VERIFYING -> RELEASING -> UP/DOWN.
//! RELEASING is never skipped once acquisition succeeded, and each
//! invocation owns its session exclusively, so concurrent checks do not
//! interfere.
//!
//! # Modules
//!
//! - `probe`: the probe itself
//! - `session`: the factory and session capabilities the probe consumes
//! - `status`: the UP/DOWN result value
//! - `error`: the crate error type

pub mod error;
pub mod probe;
pub mod session;
pub mod status;

pub use error::{Error, ErrorKind};
pub use probe::Probe;
pub use session::{ProbeSession, SessionFactory};
pub use status::Status;
