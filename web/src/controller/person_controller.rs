use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::*;

use domain::NewPerson;
use service::AppState;

use crate::Error;

/// POST create a new Person
#[utoipa::path(
    post,
    path = "/api/people",
    request_body = domain::NewPerson,
    responses(
        (status = 201, description = "Successfully created a new Person", body = domain::Person),
        (status = 422, description = "Unprocessable Entity"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn create(
    State(app_state): State<AppState>,
    Json(params): Json<NewPerson>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a New Person from: {params:?}");

    let person = app_state.people_repository.save(params).await?;

    debug!("New Person: {person:?}");

    Ok((StatusCode::CREATED, Json(person)))
}
