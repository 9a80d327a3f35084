//! Image upload and serving API routes.
//!
//! Maps the service-layer error kinds onto HTTP status codes: unsupported
//! formats are 400, missing images are 404, storage and codec faults 500.

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use imgvault_common::Error;
use serde::Deserialize;

use super::AppContext;

/// Create image-related routes.
pub fn image_routes() -> Router<AppContext> {
    Router::new()
        .route("/images", post(upload_image))
        .route("/images/:image_id", get(serve_image))
}

/// Query parameters for the image serving endpoint.
#[derive(Debug, Deserialize)]
pub struct RetrieveQuery {
    /// Desired output format. When absent the image is served in its
    /// original format.
    pub format: Option<String>,
}

/// Accept a multipart upload and store the image.
///
/// Expects a `file` part carrying the image bytes and a filename whose
/// extension names the format. Responds with the issued ID and the
/// canonicalized extension.
async fn upload_image(State(ctx): State<AppContext>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Malformed multipart request: {}", e),
                )
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return error_response(StatusCode::BAD_REQUEST, "No file selected");
        }

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    &format!("Failed to read upload: {}", e),
                )
            }
        };

        return match ctx.service.upload(&data, &filename) {
            Ok(uploaded) => {
                tracing::debug!(id = %uploaded.id, extension = %uploaded.extension, "stored uploaded image");
                Json(serde_json::json!({
                    "image_id": uploaded.id,
                    "extension": uploaded.extension,
                }))
                .into_response()
            }
            Err(e) => map_service_error(e),
        };
    }

    error_response(StatusCode::BAD_REQUEST, "No file part in the request")
}

/// Serve an image by ID, optionally converted via the `format` query
/// parameter. Records are immutable, so responses cache indefinitely.
async fn serve_image(
    State(ctx): State<AppContext>,
    Path(image_id): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> Response {
    match ctx.service.retrieve(&image_id, query.format.as_deref()) {
        Ok(retrieved) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, retrieved.format.mime_type()),
                (
                    header::CACHE_CONTROL,
                    "public, max-age=31536000, immutable",
                ),
            ],
            retrieved.bytes,
        )
            .into_response(),
        Err(e) => map_service_error(e),
    }
}

fn map_service_error(err: Error) -> Response {
    let status = match &err {
        Error::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::StorageWrite(_) | Error::Codec(_) | Error::Io(_) => {
            tracing::error!("Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, &err.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
