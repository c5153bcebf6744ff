//! Data-access layer for the cinegraph API.
//!
//! Implements the `domain` repository seams and the `health` session
//! factory for a concrete backing store. The only backend shipped here is
//! the seeded in-memory one in [`memory`]; a driver-backed graph database
//! backend is an external collaborator and would slot in beside it,
//! implementing the same traits.

pub mod memory;

pub use memory::MemoryBackend;
