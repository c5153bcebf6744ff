use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use log::*;

use domain::error::EntityErrorKind;
use service::AppState;
use sse::JsonSerializer;

use crate::Error;

/// GET all movies as a Server-Sent-Events stream, ordered by title.
#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "Streams every Movie as one `data: <json>` frame, ordered by title", content_type = "text/event-stream", body = [domain::Movie]),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn index(State(app_state): State<AppState>) -> Result<impl IntoResponse, Error> {
    debug!("GET all Movies as an event stream");

    let records = app_state
        .movie_repository
        .stream_all_ordered_by_title()
        .map(|record| record.map_err(sse::Error::producer));

    let frames = sse::encode(records, JsonSerializer);

    // The content type is declared once, before any frame bytes are flushed.
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, sse::TEXT_EVENT_STREAM)
        .body(Body::from_stream(frames))
        .map_err(|e| {
            domain::Error::entity(
                EntityErrorKind::Other("failed to build streaming response".to_string()),
                e,
            )
        })?;

    Ok(response)
}
