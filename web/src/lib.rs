use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use log::*;
use tower_http::cors::{AllowOrigin, CorsLayer};

use service::config::{Config, RustEnv};
use service::AppState;

pub(crate) mod controller;
mod error;
pub mod router;

pub use error::{Error, Result};

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = format!("{}:{}", app_state.config.interface, app_state.config.port);
    info!("Server starting... listening on {listen_addr}");

    let cors = cors_layer(&app_state.config);
    let router = router::define_routes(app_state).layer(cors);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, router).await
}

/// Development trusts any origin; production and staging trust only the
/// configured list.
fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = match config.runtime_env() {
        RustEnv::Development => AllowOrigin::any(),
        RustEnv::Production | RustEnv::Staging => {
            let origins: Vec<HeaderValue> = config
                .allowed_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!("Ignoring invalid CORS origin: {origin}");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
