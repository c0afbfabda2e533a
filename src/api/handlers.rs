//! API handlers

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::catalog::{decode_album, parse_album_id};
use crate::types::Album;
use crate::Error;

/// Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "up" })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// List every album in storage order
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.catalog.list().await)
}

/// Fetch the first album with the given id
pub async fn get_album(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Album>, Error> {
    let Path(raw_id) =
        raw_id.map_err(|rejection| Error::MalformedId(rejection.body_text()))?;
    let id = parse_album_id(&raw_id)?;

    match state.catalog.get(id).await {
        Ok(album) => Ok(Json(album)),
        Err(err) => {
            tracing::debug!(id, "Album lookup missed");
            Err(err)
        }
    }
}

/// Append an album decoded from the request body
///
/// The body is read raw so that decoding does not depend on the
/// request's Content-Type.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Album>), Error> {
    let album = decode_album(&body)?;
    let album = state.catalog.append(album).await;

    tracing::info!(id = album.id, title = %album.title, "Album created");

    Ok((StatusCode::CREATED, Json(album)))
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidId { .. } | Error::MalformedId(_) | Error::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::AlbumNotFound(_) => StatusCode::NOT_FOUND,
        };

        if self.is_bad_input() {
            tracing::debug!(error = %self, "Rejected client input");
        }

        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
