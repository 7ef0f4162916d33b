use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use octofit_domain::workout::{DifficultyLevel, WorkoutType};

use crate::domain::types::Workout;
use crate::error::{FieldErrors, TrackerServiceError};
use crate::handlers::{non_null, parse_id};
use crate::state::AppState;
use crate::usecase::workout::{
    CreateWorkoutInput, CreateWorkoutUseCase, DeleteWorkoutUseCase, GetWorkoutUseCase,
    ListWorkoutsUseCase, UpdateWorkoutInput, UpdateWorkoutUseCase,
};

// ── Request / Response types ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct WorkoutRequest {
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub difficulty_level: DifficultyLevel,
    #[serde(default)]
    pub instructions: String,
}

#[derive(Deserialize)]
pub struct WorkoutPatchRequest {
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub workout_type: Option<Option<WorkoutType>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub duration_minutes: Option<Option<i32>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub difficulty_level: Option<Option<DifficultyLevel>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub instructions: Option<Option<String>>,
}

#[derive(Serialize)]
pub struct WorkoutResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub difficulty_level: DifficultyLevel,
    pub instructions: String,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.to_string(),
            name: workout.name,
            description: workout.description,
            workout_type: workout.workout_type,
            duration_minutes: workout.duration_minutes,
            difficulty_level: workout.difficulty_level,
            instructions: workout.instructions,
            created_at: workout.created_at,
        }
    }
}

type WorkoutBody<T> = WithRejection<Json<T>, TrackerServiceError>;

// ── GET /api/workouts/ ──────────────────────────────────────────────────────

pub async fn list_workouts(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutResponse>>, TrackerServiceError> {
    let uc = ListWorkoutsUseCase {
        repo: state.workout_repo(),
    };
    let workouts = uc.execute().await?;
    Ok(Json(workouts.into_iter().map(WorkoutResponse::from).collect()))
}

// ── POST /api/workouts/ ─────────────────────────────────────────────────────

pub async fn create_workout(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WorkoutBody<WorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>), TrackerServiceError> {
    let uc = CreateWorkoutUseCase {
        repo: state.workout_repo(),
    };
    let workout = uc
        .execute(CreateWorkoutInput {
            name: body.name,
            description: body.description,
            workout_type: body.workout_type,
            duration_minutes: body.duration_minutes,
            difficulty_level: body.difficulty_level,
            instructions: body.instructions,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(workout.into())))
}

// ── GET /api/workouts/{id}/ ─────────────────────────────────────────────────

pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::WorkoutNotFound)?;
    let uc = GetWorkoutUseCase {
        repo: state.workout_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

// ── PUT /api/workouts/{id}/ ─────────────────────────────────────────────────

pub async fn replace_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WorkoutBody<WorkoutRequest>,
) -> Result<Json<WorkoutResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::WorkoutNotFound)?;
    let input = UpdateWorkoutInput {
        name: Some(body.name),
        description: Some(body.description),
        workout_type: Some(body.workout_type),
        duration_minutes: Some(body.duration_minutes),
        difficulty_level: Some(body.difficulty_level),
        instructions: Some(body.instructions),
    };
    update(&state, id, input).await
}

// ── PATCH /api/workouts/{id}/ ───────────────────────────────────────────────

pub async fn patch_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WorkoutBody<WorkoutPatchRequest>,
) -> Result<Json<WorkoutResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::WorkoutNotFound)?;
    let mut errors = FieldErrors::new();
    let input = UpdateWorkoutInput {
        name: non_null(&mut errors, "name", body.name),
        description: non_null(&mut errors, "description", body.description),
        workout_type: non_null(&mut errors, "workout_type", body.workout_type),
        duration_minutes: non_null(&mut errors, "duration_minutes", body.duration_minutes),
        difficulty_level: non_null(&mut errors, "difficulty_level", body.difficulty_level),
        instructions: non_null(&mut errors, "instructions", body.instructions),
    };
    errors.into_result()?;
    update(&state, id, input).await
}

async fn update(
    state: &AppState,
    id: Uuid,
    input: UpdateWorkoutInput,
) -> Result<Json<WorkoutResponse>, TrackerServiceError> {
    let uc = UpdateWorkoutUseCase {
        repo: state.workout_repo(),
    };
    Ok(Json(uc.execute(id, input).await?.into()))
}

// ── DELETE /api/workouts/{id}/ ──────────────────────────────────────────────

pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::WorkoutNotFound)?;
    let uc = DeleteWorkoutUseCase {
        repo: state.workout_repo(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
