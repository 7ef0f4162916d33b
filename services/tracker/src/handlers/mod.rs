pub mod activity;
pub mod api_root;
pub mod health;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

use uuid::Uuid;

use crate::error::{FieldErrors, TrackerServiceError};

const NULL_NOT_ALLOWED: &str = "This field may not be null.";

/// A malformed path id names no record, so it is reported as `not_found`.
fn parse_id(raw: &str, not_found: TrackerServiceError) -> Result<Uuid, TrackerServiceError> {
    raw.parse().map_err(|_| not_found)
}

/// Unwrap a PATCH field read with `double_option`. An explicit `null` on a
/// non-nullable field is recorded in `errors` and leaves the field unchanged.
fn non_null<T>(errors: &mut FieldErrors, field: &str, value: Option<Option<T>>) -> Option<T> {
    match value {
        Some(None) => {
            errors.add(field, NULL_NOT_ALLOWED);
            None
        }
        Some(Some(value)) => Some(value),
        None => None,
    }
}
