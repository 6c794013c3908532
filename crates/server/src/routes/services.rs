use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::PathRejection,
        Multipart, Path, State,
    },
    Json,
};
use serde::Serialize;
use tracing::error;

use models::service as catalog;
use service::{catalog_service, errors::ServiceError};

use crate::errors::ApiError;
use crate::extract::MultipartForm;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct ServiceOutput {
    pub success: bool,
    pub service: catalog::Model,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutput {
    pub success: bool,
    pub deleted_id: i32,
}

pub async fn list_services(State(state): State<ServerState>) -> Result<Json<Vec<catalog::Model>>, ApiError> {
    catalog_service::list_services(&state.db).await.map(Json).map_err(|e| {
        error!(error = %e, "service listing failed");
        ApiError::internal(e.client_message())
    })
}

/// Multipart `Title` + `image`.
pub async fn create_service(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ServiceOutput>, ApiError> {
    let mut form = MultipartForm::read(multipart?)
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;
    let image = form.take_file("image");
    let result = catalog_service::create_service(&state.db, &state.assets, form.text("title"), image).await;
    respond(result, "create")
}

/// Multipart with optional `Title` and/or `image`.
pub async fn update_service(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ServiceOutput>, ApiError> {
    let Path(id) = id?;
    let mut form = MultipartForm::read(multipart?)
        .await
        .map_err(|e| ApiError::bad_request(e.body_text()))?;
    let image = form.take_file("image");
    let result = catalog_service::update_service(&state.db, &state.assets, id, form.text("title"), image).await;
    respond(result, "update")
}

pub async fn delete_service(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteOutput>, ApiError> {
    let Path(id) = id?;
    match catalog_service::delete_service(&state.db, &state.assets, id).await {
        Ok(deleted_id) => Ok(Json(DeleteOutput { success: true, deleted_id })),
        Err(e) => Err(map_error(e, "delete")),
    }
}

fn respond(result: Result<catalog::Model, ServiceError>, action: &str) -> Result<Json<ServiceOutput>, ApiError> {
    result
        .map(|service| Json(ServiceOutput { success: true, service }))
        .map_err(|e| map_error(e, action))
}

fn map_error(e: ServiceError, action: &str) -> ApiError {
    match e {
        ServiceError::NotFound(_) => ApiError::not_found("Service not found."),
        e if e.is_validation() => ApiError::bad_request(e.client_message()),
        e => {
            error!(error = %e, action, "service catalog operation failed");
            ApiError::internal(format!("An error occurred: {}", e.client_message()))
        }
    }
}
