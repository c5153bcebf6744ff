use std::sync::Arc;

use domain::{MovieRepository, PeopleRepository};
use health::Probe;

use config::Config;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Needs to implement Clone to be able to be passed into Router as State.
#[derive(Clone)]
pub struct AppState {
    pub movie_repository: Arc<dyn MovieRepository>,
    pub people_repository: Arc<dyn PeopleRepository>,
    pub health_probe: Probe,
    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        movie_repository: Arc<dyn MovieRepository>,
        people_repository: Arc<dyn PeopleRepository>,
        health_probe: Probe,
    ) -> Self {
        Self {
            movie_repository,
            people_repository,
            health_probe,
            config,
        }
    }
}
