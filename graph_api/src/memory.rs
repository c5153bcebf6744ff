//! Seeded in-memory backend.
//!
//! Stands in for a graph-database driver: movies and people live in
//! process-local storage, and health sessions verify against the running
//! process instead of a server. Session acquisition can be failed on
//! demand so DOWN paths stay reachable in tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use log::*;
use serde_json::{json, Value};

use domain::{Error, Movie, MovieRepository, NewPerson, PeopleRepository, Person};
use health::{ProbeSession, SessionFactory};

pub struct MemoryBackend {
    movies: RwLock<Vec<Movie>>,
    people: RwLock<Vec<Person>>,
    refuse_sessions: AtomicBool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
            people: RwLock::new(Vec::new()),
            refuse_sessions: AtomicBool::new(false),
        }
    }

    /// A backend pre-populated with a slice of the classic movies dataset.
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut movies = backend.movies.write().expect("fresh lock");
            movies.push(Movie::new(
                "The Matrix",
                Some(1999),
                Some("Welcome to the Real World"),
            ));
            movies.push(Movie::new(
                "The Matrix Reloaded",
                Some(2003),
                Some("Free your mind"),
            ));
            movies.push(Movie::new(
                "Cloud Atlas",
                Some(2012),
                Some("Everything is connected"),
            ));
            movies.push(Movie::new("A Few Good Men", Some(1992), None));
        }
        backend
    }

    /// Makes subsequent session acquisitions fail, so readiness DOWN paths
    /// can be exercised without tearing the backend down.
    pub fn set_refuse_sessions(&self, refuse: bool) {
        self.refuse_sessions.store(refuse, Ordering::SeqCst);
    }

    pub fn add_movie(&self, movie: Movie) -> Result<(), Error> {
        self.movies
            .write()
            .map_err(|_| Error::store("movie store lock poisoned"))?
            .push(movie);
        Ok(())
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieRepository for MemoryBackend {
    fn stream_all_ordered_by_title(&self) -> BoxStream<'static, Result<Movie, Error>> {
        let mut movies = match self.movies.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                return stream::once(async { Err(Error::store("movie store lock poisoned")) })
                    .boxed()
            }
        };
        movies.sort_by(|a, b| a.title.cmp(&b.title));

        debug!("Streaming {} movies ordered by title", movies.len());

        stream::iter(movies.into_iter().map(Ok)).boxed()
    }
}

#[async_trait]
impl PeopleRepository for MemoryBackend {
    async fn save(&self, params: NewPerson) -> Result<Person, Error> {
        if params.name.trim().is_empty() {
            warn!("Rejecting Person with a blank name");
            return Err(Error::invalid());
        }

        let person = Person::from(params);

        self.people
            .write()
            .map_err(|_| Error::store("people store lock poisoned"))?
            .push(person.clone());

        debug!("Saved new Person: {person:?}");

        Ok(person)
    }
}

#[derive(Debug)]
struct MemorySession;

#[async_trait]
impl ProbeSession for MemorySession {
    async fn verify(&mut self) -> Result<Value, health::Error> {
        Ok(json!({
            "server": format!("cinegraph-memory/{}@in-process", env!("CARGO_PKG_VERSION")),
        }))
    }

    async fn close(self: Box<Self>) -> Result<(), health::Error> {
        Ok(())
    }
}

#[async_trait]
impl SessionFactory for MemoryBackend {
    async fn session(&self) -> Result<Box<dyn ProbeSession>, health::Error> {
        if self.refuse_sessions.load(Ordering::SeqCst) {
            return Err(health::Error {
                source: None,
                error_kind: health::ErrorKind::Acquisition,
            });
        }
        Ok(Box::new(MemorySession))
    }
}
