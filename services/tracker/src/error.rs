use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Field-level validation messages, keyed by request field name.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when nothing was collected, otherwise a validation error.
    pub fn into_result(self) -> Result<(), TrackerServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(TrackerServiceError::Validation(self))
        }
    }
}

/// Tracker service error variants.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error("team not found")]
    TeamNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("activity not found")]
    ActivityNotFound,
    #[error("leaderboard entry not found")]
    LeaderboardNotFound,
    #[error("workout not found")]
    WorkoutNotFound,
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TrackerServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ActivityNotFound => "ACTIVITY_NOT_FOUND",
            Self::LeaderboardNotFound => "LEADERBOARD_NOT_FOUND",
            Self::WorkoutNotFound => "WORKOUT_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }
}

impl From<JsonRejection> for TrackerServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation("body", rejection.body_text())
    }
}

impl From<QueryRejection> for TrackerServiceError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation("query", rejection.body_text())
    }
}

impl IntoResponse for TrackerServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::TeamNotFound
            | Self::UserNotFound
            | Self::ActivityNotFound
            | Self::LeaderboardNotFound
            | Self::WorkoutNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(ref fields) = self {
            body["fields"] = serde_json::json!(fields);
        }
        (status, axum::Json(body)).into_response()
    }
}
