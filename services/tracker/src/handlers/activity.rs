use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use octofit_domain::activity::ActivityType;

use crate::domain::types::Activity;
use crate::error::{FieldErrors, TrackerServiceError};
use crate::handlers::{non_null, parse_id};
use crate::state::AppState;
use crate::usecase::activity::{
    CreateActivityInput, CreateActivityUseCase, DeleteActivityUseCase, GetActivityUseCase,
    ListActivitiesUseCase, UpdateActivityInput, UpdateActivityUseCase,
};

// ── Request / Response types ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ActivityRequest {
    pub user: Uuid,
    pub activity_type: ActivityType,
    #[serde(default)]
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

#[derive(Deserialize)]
pub struct ActivityPatchRequest {
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub user: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub activity_type: Option<Option<ActivityType>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub duration_minutes: Option<Option<i32>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub calories_burned: Option<Option<i32>>,
}

#[derive(Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub user: String,
    pub activity_type: ActivityType,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id.to_string(),
            user: activity.user_id.to_string(),
            activity_type: activity.activity_type,
            description: activity.description,
            duration_minutes: activity.duration_minutes,
            calories_burned: activity.calories_burned,
            timestamp: activity.timestamp,
        }
    }
}

type ActivityBody<T> = WithRejection<Json<T>, TrackerServiceError>;

// ── GET /api/activities/ ────────────────────────────────────────────────────

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, TrackerServiceError> {
    let uc = ListActivitiesUseCase {
        repo: state.activity_repo(),
    };
    let activities = uc.execute().await?;
    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}

// ── POST /api/activities/ ───────────────────────────────────────────────────

pub async fn create_activity(
    State(state): State<AppState>,
    WithRejection(Json(body), _): ActivityBody<ActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), TrackerServiceError> {
    let uc = CreateActivityUseCase {
        activities: state.activity_repo(),
        users: state.user_repo(),
    };
    let activity = uc
        .execute(CreateActivityInput {
            user_id: body.user,
            activity_type: body.activity_type,
            description: body.description,
            duration_minutes: body.duration_minutes,
            calories_burned: body.calories_burned,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

// ── GET /api/activities/{id}/ ───────────────────────────────────────────────

pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActivityResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::ActivityNotFound)?;
    let uc = GetActivityUseCase {
        repo: state.activity_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

// ── PUT /api/activities/{id}/ ───────────────────────────────────────────────

pub async fn replace_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): ActivityBody<ActivityRequest>,
) -> Result<Json<ActivityResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::ActivityNotFound)?;
    let input = UpdateActivityInput {
        user_id: Some(body.user),
        activity_type: Some(body.activity_type),
        description: Some(body.description),
        duration_minutes: Some(body.duration_minutes),
        calories_burned: Some(body.calories_burned),
    };
    update(&state, id, input).await
}

// ── PATCH /api/activities/{id}/ ─────────────────────────────────────────────

pub async fn patch_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): ActivityBody<ActivityPatchRequest>,
) -> Result<Json<ActivityResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::ActivityNotFound)?;
    let mut errors = FieldErrors::new();
    let input = UpdateActivityInput {
        user_id: non_null(&mut errors, "user", body.user),
        activity_type: non_null(&mut errors, "activity_type", body.activity_type),
        description: non_null(&mut errors, "description", body.description),
        duration_minutes: non_null(&mut errors, "duration_minutes", body.duration_minutes),
        calories_burned: non_null(&mut errors, "calories_burned", body.calories_burned),
    };
    errors.into_result()?;
    update(&state, id, input).await
}

async fn update(
    state: &AppState,
    id: Uuid,
    input: UpdateActivityInput,
) -> Result<Json<ActivityResponse>, TrackerServiceError> {
    let uc = UpdateActivityUseCase {
        activities: state.activity_repo(),
        users: state.user_repo(),
    };
    Ok(Json(uc.execute(id, input).await?.into()))
}

// ── DELETE /api/activities/{id}/ ────────────────────────────────────────────

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::ActivityNotFound)?;
    let uc = DeleteActivityUseCase {
        repo: state.activity_repo(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
