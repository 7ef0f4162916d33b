use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use octofit_domain::team::TeamName;

use crate::domain::types::UserDetail;
use crate::error::{FieldErrors, TrackerServiceError};
use crate::handlers::activity::ActivityResponse;
use crate::handlers::{non_null, parse_id};
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserActivitiesUseCase,
    GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};

// ── Request / Response types ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserRequest {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub superhero_name: String,
    #[serde(default)]
    pub team: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct UserPatchRequest {
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub superhero_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub team: Option<Option<Uuid>>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub superhero_name: String,
    pub team: Option<String>,
    pub team_name: Option<TeamName>,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<UserDetail> for UserResponse {
    fn from(detail: UserDetail) -> Self {
        let user = detail.user;
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            superhero_name: user.superhero_name,
            team: user.team_id.map(|id| id.to_string()),
            team_name: detail.team_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

type UserBody<T> = WithRejection<Json<T>, TrackerServiceError>;

// ── GET /api/users/ ─────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, TrackerServiceError> {
    let uc = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = uc.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /api/users/ ────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): UserBody<UserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), TrackerServiceError> {
    let uc = CreateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };
    let user = uc
        .execute(CreateUserInput {
            email: body.email,
            name: body.name,
            superhero_name: body.superhero_name,
            team_id: body.team,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /api/users/{id}/ ────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::UserNotFound)?;
    let uc = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

// ── PUT /api/users/{id}/ ────────────────────────────────────────────────────

pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): UserBody<UserRequest>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::UserNotFound)?;
    let input = UpdateUserInput {
        email: Some(body.email),
        name: Some(body.name),
        superhero_name: Some(body.superhero_name),
        team_id: Some(body.team),
    };
    update(&state, id, input).await
}

// ── PATCH /api/users/{id}/ ──────────────────────────────────────────────────

pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): UserBody<UserPatchRequest>,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::UserNotFound)?;
    let mut errors = FieldErrors::new();
    let input = UpdateUserInput {
        email: non_null(&mut errors, "email", body.email),
        name: non_null(&mut errors, "name", body.name),
        superhero_name: non_null(&mut errors, "superhero_name", body.superhero_name),
        team_id: body.team,
    };
    errors.into_result()?;
    update(&state, id, input).await
}

async fn update(
    state: &AppState,
    id: Uuid,
    input: UpdateUserInput,
) -> Result<Json<UserResponse>, TrackerServiceError> {
    let uc = UpdateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };
    Ok(Json(uc.execute(id, input).await?.into()))
}

// ── DELETE /api/users/{id}/ ─────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::UserNotFound)?;
    let uc = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/users/{id}/activities/ ─────────────────────────────────────────

pub async fn get_user_activities(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ActivityResponse>>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::UserNotFound)?;
    let uc = GetUserActivitiesUseCase {
        users: state.user_repo(),
        activities: state.activity_repo(),
    };
    let activities = uc.execute(id).await?;
    Ok(Json(
        activities.into_iter().map(ActivityResponse::from).collect(),
    ))
}
