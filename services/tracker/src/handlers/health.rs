use axum::{extract::State, http::StatusCode};

use octofit_core::health::readiness;

use crate::state::AppState;

// ── GET /readyz ─────────────────────────────────────────────────────────────

/// Ready once the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    let ready = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "database ping failed");
            false
        }
    };
    readiness(ready)
}
