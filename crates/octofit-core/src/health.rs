use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Status for a readiness check: 200 once every dependency answered, 503 otherwise.
pub fn readiness(dependencies_ready: bool) -> StatusCode {
    if dependencies_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
