use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::error;

use models::banner;
use service::{
    banner_service::{self, BannerUpdate},
    errors::ServiceError,
};

use crate::errors::ApiError;
use crate::extract::MultipartForm;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct BannerOutput {
    pub success: bool,
    pub banner: banner::Model,
}

/// GET /api/banner
pub async fn get_banner(State(state): State<ServerState>) -> Result<Json<banner::Model>, ApiError> {
    match banner_service::get_banner(&state.db).await {
        Ok(b) => Ok(Json(b)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Banner not found.")),
        Err(e) => {
            error!(error = %e, "banner fetch failed");
            Err(ApiError::internal(format!("Error retrieving banner: {}", e)))
        }
    }
}

/// POST|PUT /api/banner, multipart `title`, `subtitle`, `image`.
pub async fn update_banner(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<BannerOutput>, ApiError> {
    let multipart = multipart.map_err(|e| ApiError::new(e.status(), format!("Error updating banner: {}", e.body_text())))?;
    let mut form = MultipartForm::read(multipart)
        .await
        .map_err(|e| ApiError::bad_request(format!("Error updating banner: {}", e)))?;
    let update = BannerUpdate {
        title: form.text("title").map(str::to_string),
        subtitle: form.text("subtitle").map(str::to_string),
        image: form.take_any_file(&["image", "file"]),
    };

    match banner_service::update_banner(&state.db, &state.assets, update).await {
        Ok(banner) => Ok(Json(BannerOutput { success: true, banner })),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Banner not found.")),
        Err(e) => {
            error!(error = %e, "banner update failed");
            Err(ApiError::bad_request(format!("Error updating banner: {}", e)))
        }
    }
}
