use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::ServerState;

pub mod auth;
pub mod banner;
pub mod contact;
pub mod events;
pub mod portfolio;
pub mod services;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: JSON API, health probe and the static asset root as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, max_body_bytes: usize) -> Router {
    let static_files = ServeDir::new(state.assets.root().to_path_buf());

    let api = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/banner", get(banner::get_banner).post(banner::update_banner).put(banner::update_banner))
        .route("/api/contact", post(contact::submit_contact).get(contact::list_contacts))
        .route("/api/contact/check-table", get(contact::check_table))
        .route("/api/events", get(events::list_events))
        .route("/api/events/update-all", post(events::replace_all))
        .route("/api/portfolio", get(portfolio::list_portfolio).post(portfolio::upload))
        .route("/api/portfolio/:id", delete(portfolio::delete))
        .route("/api/service", get(services::list_services).post(services::create_service))
        .route("/api/service/:id", put(services::update_service).delete(services::delete_service));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback_service(static_files)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
