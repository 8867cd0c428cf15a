//! Router assembly.

pub mod catalog;
pub mod common;

pub use catalog::catalog_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

async fn not_found() -> AppError {
    AppError::NotFound("Not found")
}

/// Full application: catalog plus operational routes, unknown paths answered with a JSON 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(catalog_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
