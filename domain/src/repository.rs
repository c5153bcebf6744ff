//! Repository trait seams consumed by the web layer.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::Error;
use crate::movie::Movie;
use crate::person::{NewPerson, Person};

/// Read access to movies.
///
/// `stream_all_ordered_by_title` is an incremental producer: items are
/// pulled one at a time by the consumer, so a backend can page through an
/// unbounded result set without materializing it. The stream owns its data
/// (`'static`) because the HTTP response that drains it outlives the
/// handler borrow.
pub trait MovieRepository: Send + Sync {
    fn stream_all_ordered_by_title(&self) -> BoxStream<'static, Result<Movie, Error>>;
}

/// Write access to people.
///
/// Implementations reject a blank `name` with an `Invalid` entity error.
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    async fn save(&self, params: NewPerson) -> Result<Person, Error>;
}
