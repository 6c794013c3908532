use axum::{extract::{rejection::JsonRejection, State}, Json};
use common::types::Envelope;
use tracing::error;

use models::contact::{self, NewContact};
use service::contact_service::{self, TableCheck};

use crate::errors::ApiError;
use crate::state::ServerState;

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<ServerState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<Envelope>, ApiError> {
    let Json(input) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    match contact_service::submit_contact(&state.db, &input).await {
        Ok(_) => Ok(Json(Envelope::ok("Thank you! Your message has been sent. We will get back to you soon."))),
        Err(e) if e.is_validation() => Err(ApiError::bad_request(e.client_message())),
        Err(e) => {
            error!(error = ?e, "contact submission failed");
            Err(ApiError::internal("An error occurred while sending your message. Please try again later."))
        }
    }
}

/// GET /api/contact
pub async fn list_contacts(State(state): State<ServerState>) -> Result<Json<Vec<contact::Model>>, ApiError> {
    contact_service::list_contacts(&state.db).await.map(Json).map_err(|e| {
        error!(error = ?e, "contact listing failed");
        ApiError::internal("An error occurred while retrieving contacts.")
    })
}

/// GET /api/contact/check-table. Always 200.
pub async fn check_table(State(state): State<ServerState>) -> Json<TableCheck> {
    Json(contact_service::check_table(&state.db).await)
}
