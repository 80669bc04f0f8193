//! Health check mounted at the root, outside `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    /// The process is up but the trail store cannot be reached.
    Degraded,
}

impl ServiceStatus {
    fn from_store(reachable: bool) -> Self {
        if reachable {
            Self::Ok
        } else {
            Self::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match trails_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Trail store unreachable");
            false
        }
    };

    Json(HealthResponse {
        status: ServiceStatus::from_store(db_healthy),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_store_reachability() {
        assert_eq!(ServiceStatus::from_store(true), ServiceStatus::Ok);
        assert_eq!(ServiceStatus::from_store(false), ServiceStatus::Degraded);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ServiceStatus::Degraded).unwrap(), "degraded");
    }
}
