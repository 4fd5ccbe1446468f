//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the catalog API under `/api`: component listings for the dashboard
//! and the public browse pages, the filter taxonomy for the sidebar, and the
//! per-organization saved set. Handlers parse raw query strings, call the
//! services, and shape responses; they hold no logic of their own.

pub mod components;
pub mod saved;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/components", get(components::list_dashboard_components))
        .route("/api/browse", get(components::browse_components))
        .route("/api/browse/{category}", get(components::browse_category))
        .route("/api/filters", get(components::filter_lists))
        .route(
            "/api/organizations/{organization}/saved",
            get(saved::list_saved),
        )
        .route(
            "/api/organizations/{organization}/saved/{component_id}",
            put(saved::save).delete(saved::unsave),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
