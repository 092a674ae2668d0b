use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::routes::{analysis, dashboard, health, insights};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard UI is served from a separate origin during development.
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/companies", dashboard::companies_router())
        .nest("/api/dashboard", dashboard::router().merge(insights::router()))
        .nest("/api/analysis", analysis::router())
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}
