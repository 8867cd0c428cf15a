//! Operational routes: liveness, readiness against the store, build metadata.

use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Shared by `/health` and `/ready`; `database` is only reported by readiness.
#[derive(Serialize)]
struct StatusBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl StatusBody {
    const ALIVE: Self = Self {
        status: "ok",
        database: None,
    };
    const READY: Self = Self {
        status: "ok",
        database: Some("ok"),
    };
    const DEGRADED: Self = Self {
        status: "degraded",
        database: Some("unavailable"),
    };
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

const BUILD: VersionBody = VersionBody {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

async fn liveness() -> Json<StatusBody> {
    Json(StatusBody::ALIVE)
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<StatusBody>) {
    match store::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, Json(StatusBody::READY)),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(StatusBody::DEGRADED))
        }
    }
}

async fn build_info() -> Json<VersionBody> {
    Json(BUILD)
}

/// GET /health, GET /ready (with a database round-trip), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(build_info))
        .with_state(state)
}
