//! Domain layer for the cinegraph API.
//!
//! Holds the movie/people models, the domain error tree, and the repository
//! trait seams that the web layer and the streaming encoder consume. The
//! repositories are capabilities: a backing store (a graph driver, the
//! in-memory reference backend in `graph_api`, a mock in tests) implements
//! them without this crate knowing which one is wired in.

use uuid::Uuid;

pub mod error;
pub mod movie;
pub mod person;
pub mod repository;

pub use error::Error;
pub use movie::Movie;
pub use person::{NewPerson, Person};
pub use repository::{MovieRepository, PeopleRepository};

/// A type alias that represents any entity's internal id field data type.
pub type Id = Uuid;
