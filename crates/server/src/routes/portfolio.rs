use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::PathRejection,
        Multipart, Path, State,
    },
    Json,
};
use tracing::error;

use models::portfolio_image;
use service::{errors::ServiceError, portfolio_service};

use crate::errors::ApiError;
use crate::extract::MultipartForm;
use crate::state::ServerState;

pub async fn list_portfolio(
    State(state): State<ServerState>,
) -> Result<Json<Vec<portfolio_image::Model>>, ApiError> {
    portfolio_service::list_portfolio(&state.db).await.map(Json).map_err(|e| {
        error!(error = %e, "portfolio listing failed");
        ApiError::internal(e.client_message())
    })
}

/// Multipart with a single file part (`file` or `image`). Returns the created row.
pub async fn upload(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<portfolio_image::Model>, ApiError> {
    let mut form = MultipartForm::read(multipart?)
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;
    let file = form.take_any_file(&["file", "image"]);

    match portfolio_service::upload_portfolio_image(&state.db, &state.assets, file).await {
        Ok(row) => Ok(Json(row)),
        Err(e) if e.is_validation() => Err(ApiError::bad_request(e.client_message())),
        Err(e) => {
            error!(error = %e, "portfolio upload failed");
            Err(ApiError::internal(e.client_message()))
        }
    }
}

/// Plain-text body on success.
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<&'static str, ApiError> {
    let Path(id) = id?;
    match portfolio_service::delete_portfolio_image(&state.db, &state.assets, id).await {
        Ok(()) => Ok("Image deleted successfully"),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Image not found")),
        Err(e) => {
            error!(error = %e, id, "portfolio delete failed");
            Err(ApiError::internal(e.client_message()))
        }
    }
}
