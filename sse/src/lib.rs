//! Server-Sent Events (SSE) wire encoding for record streams.
//!
//! This crate adapts an asynchronous producer of serializable records into
//! the SSE wire format, one lazy chunk at a time. It is framework-agnostic:
//! the encoder speaks `futures::Stream` and `bytes::Bytes`, and the HTTP
//! layer plugs the result straight into its streaming response body.
//!
//! # Architecture
//!
//! - **Three chunks per record**: each record becomes exactly the prefix
//!   `"data: "`, the serialized record bytes, and the terminator `"\n\n"`,
//!   in that order. Frames never interleave.
//! - **Pull-based backpressure**: the encoder is a generator that only
//!   advances when the consumer polls it. The producer is asked for the
//!   next record only after the previous frame's chunks have been taken, so
//!   at most one record's pending output is buffered.
//! - **Pluggable serialization**: the encoder performs no type-specific
//!   branching. A [`Serializer`] capability turns records into bytes;
//!   [`JsonSerializer`] is the serde_json implementation.
//! - **No partial frames**: a record is serialized before any of its chunks
//!   is yielded, so a failing record contributes zero bytes. Producer and
//!   serialization failures end the stream with a failure item; dropping
//!   the stream (client disconnect) drops the producer subscription at a
//!   record boundary.
//!
//! # Modules
//!
//! - `encoder`: the stream adapter and the wire-format constants
//! - `serializer`: the `Serializer` capability and the JSON implementation
//! - `error`: the crate error type

pub mod encoder;
pub mod error;
pub mod serializer;

pub use encoder::{encode, TEXT_EVENT_STREAM};
pub use error::{Error, ErrorKind};
pub use serializer::{JsonSerializer, Serializer};
