use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::Serialize;
use tracing::error;

use models::event::{self, EventInput};
use service::event_service;

use crate::errors::ApiError;
use crate::extract::RequestOrigin;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct ReplaceOutput {
    pub success: bool,
    pub events: Vec<event::Model>,
}

/// GET /api/events, image paths made absolute for the caller's origin.
pub async fn list_events(
    State(state): State<ServerState>,
    RequestOrigin(origin): RequestOrigin,
) -> Result<Json<Vec<event::Model>>, ApiError> {
    event_service::list_events(&state.db, &origin, &state.default_event_image)
        .await
        .map(Json)
        .map_err(|e| {
            error!(error = %e, "event listing failed");
            ApiError::internal(e.client_message())
        })
}

/// POST /api/events/update-all with the complete desired list.
pub async fn replace_all(
    State(state): State<ServerState>,
    payload: Result<Json<Option<Vec<EventInput>>>, JsonRejection>,
) -> Result<Json<ReplaceOutput>, ApiError> {
    let events = match payload {
        Ok(Json(Some(events))) => events,
        _ => return Err(ApiError::bad_request("Events data is required.")),
    };
    match event_service::replace_all_events(&state.db, events).await {
        Ok(events) => Ok(Json(ReplaceOutput { success: true, events })),
        Err(e) if e.is_validation() => Err(ApiError::bad_request(e.client_message())),
        Err(e) => {
            error!(error = %e, "event replace failed");
            Err(ApiError::internal(e.client_message()))
        }
    }
}
