use axum::{
    routing::{get, post},
    Router,
};

use crate::controller::{health_check_controller, movie_controller, person_controller};
use service::AppState;

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Cinegraph API"
        ),
        paths(
            movie_controller::index,
            person_controller::create,
            health_check_controller::liveness,
            health_check_controller::readiness,
        ),
        components(
            schemas(
                domain::Movie,
                domain::Person,
                domain::NewPerson,
            )
        ),
        tags(
            (name = "cinegraph", description = "Movies & People streaming API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(movie_routes(app_state.clone()))
        .merge(people_routes(app_state.clone()))
        .merge(health_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn movie_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/movies", get(movie_controller::index))
        .with_state(app_state)
}

fn people_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/people", post(person_controller::create))
        .with_state(app_state)
}

fn health_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/management/health/liveness",
            get(health_check_controller::liveness),
        )
        .route(
            "/management/health/readiness",
            get(health_check_controller::readiness),
        )
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use graph_api::MemoryBackend;
    use health::Probe;
    use serde_json::{json, Value};
    use service::config::Config;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn test_state(backend: Arc<MemoryBackend>) -> AppState {
        let config = Config::parse_from(["cinegraph"]);
        let probe = Probe::new(backend.clone(), Duration::from_secs(1));
        AppState::new(config, backend.clone(), backend, probe)
    }

    fn movie(title: &str) -> domain::Movie {
        domain::Movie {
            id: domain::Id::nil(),
            title: title.to_string(),
            released: None,
            tagline: None,
        }
    }

    #[tokio::test]
    async fn test_movies_stream_as_sse_frames_ordered_by_title() {
        let backend = Arc::new(MemoryBackend::new());
        backend.add_movie(movie("Top Gun")).unwrap();
        backend.add_movie(movie("Apollo 13")).unwrap();

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .uri("/api/movies")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let nil_id = domain::Id::nil();
        let expected = format!(
            "data: {{\"id\":\"{nil_id}\",\"title\":\"Apollo 13\"}}\n\n\
             data: {{\"id\":\"{nil_id}\",\"title\":\"Top Gun\"}}\n\n"
        );
        assert_eq!(&body[..], expected.as_bytes());
    }

    #[tokio::test]
    async fn test_create_person_returns_created_with_the_saved_document() {
        let backend = Arc::new(MemoryBackend::new());

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/people")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({"name": "Kevin Bacon", "born": 1958}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let person: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(person["name"], "Kevin Bacon");
        assert_eq!(person["born"], 1958);
        assert!(person["id"].as_str().is_some(), "id is server-generated");
    }

    #[tokio::test]
    async fn test_create_person_with_a_blank_name_is_unprocessable() {
        let backend = Arc::new(MemoryBackend::new());

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/people")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"name": ""}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_liveness_is_up_without_touching_the_backend() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_refuse_sessions(true);

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .uri("/management/health/liveness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, json!({"status": "UP"}));
    }

    #[tokio::test]
    async fn test_readiness_maps_up_to_200_with_server_payload() {
        let backend = Arc::new(MemoryBackend::new());

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .uri("/management/health/readiness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status["status"], "UP");
        assert!(status["data"]["server"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_readiness_maps_down_to_503() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_refuse_sessions(true);

        let response = define_routes(test_state(backend))
            .oneshot(
                Request::builder()
                    .uri("/management/health/readiness")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status["status"], "DOWN");
    }
}
