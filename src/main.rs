use std::sync::Arc;
use std::time::Duration;

use graph_api::memory::MemoryBackend;
use health::Probe;
use log::info;
use service::config::Config;
use service::logging::Logger;
use service::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::new();
    Logger::init_logger(&config);

    info!(
        "Starting cinegraph API (runtime env: {})",
        config.runtime_env
    );

    let backend = Arc::new(MemoryBackend::seeded());
    let probe = Probe::new(
        backend.clone(),
        Duration::from_secs(config.health_probe_timeout_secs),
    );

    let app_state = AppState::new(config, backend.clone(), backend.clone(), probe);

    web::init_server(app_state).await
}
