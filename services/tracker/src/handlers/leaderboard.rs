use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::LeaderboardDetail;
use crate::error::{FieldErrors, TrackerServiceError};
use crate::handlers::{non_null, parse_id};
use crate::state::AppState;
use crate::usecase::leaderboard::{
    CreateLeaderboardEntryInput, CreateLeaderboardEntryUseCase, DeleteLeaderboardEntryUseCase,
    GetLeaderboardByTeamUseCase, GetLeaderboardEntryUseCase, ListLeaderboardUseCase,
    UpdateLeaderboardEntryInput, UpdateLeaderboardEntryUseCase,
};

// ── Request / Response types ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LeaderboardRequest {
    pub user: Uuid,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub total_activities: i32,
    #[serde(default)]
    pub total_calories_burned: i32,
}

#[derive(Deserialize)]
pub struct LeaderboardPatchRequest {
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub user: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub total_points: Option<Option<i32>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub rank: Option<Option<i32>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub total_activities: Option<Option<i32>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub total_calories_burned: Option<Option<i32>>,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub id: String,
    pub user: String,
    pub user_name: String,
    pub user_email: String,
    pub total_points: i32,
    pub rank: i32,
    pub total_activities: i32,
    pub total_calories_burned: i32,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<LeaderboardDetail> for LeaderboardResponse {
    fn from(detail: LeaderboardDetail) -> Self {
        let entry = detail.entry;
        Self {
            id: entry.id.to_string(),
            user: entry.user_id.to_string(),
            user_name: detail.user_name,
            user_email: detail.user_email,
            total_points: entry.total_points,
            rank: entry.rank,
            total_activities: entry.total_activities,
            total_calories_burned: entry.total_calories_burned,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct ByTeamQuery {
    pub team: Option<String>,
}

type LeaderboardBody<T> = WithRejection<Json<T>, TrackerServiceError>;

fn to_responses(entries: Vec<LeaderboardDetail>) -> Json<Vec<LeaderboardResponse>> {
    Json(entries.into_iter().map(LeaderboardResponse::from).collect())
}

// ── GET /api/leaderboard/ ───────────────────────────────────────────────────

pub async fn list_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardResponse>>, TrackerServiceError> {
    let uc = ListLeaderboardUseCase {
        repo: state.leaderboard_repo(),
    };
    Ok(to_responses(uc.execute().await?))
}

// ── GET /api/leaderboard/by_team/?team=<name> ───────────────────────────────

pub async fn get_leaderboard_by_team(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ByTeamQuery>, TrackerServiceError>,
) -> Result<Json<Vec<LeaderboardResponse>>, TrackerServiceError> {
    let uc = GetLeaderboardByTeamUseCase {
        repo: state.leaderboard_repo(),
    };
    Ok(to_responses(uc.execute(query.team.as_deref()).await?))
}

// ── POST /api/leaderboard/ ──────────────────────────────────────────────────

pub async fn create_leaderboard_entry(
    State(state): State<AppState>,
    WithRejection(Json(body), _): LeaderboardBody<LeaderboardRequest>,
) -> Result<(StatusCode, Json<LeaderboardResponse>), TrackerServiceError> {
    let uc = CreateLeaderboardEntryUseCase {
        leaderboard: state.leaderboard_repo(),
        users: state.user_repo(),
    };
    let entry = uc
        .execute(CreateLeaderboardEntryInput {
            user_id: body.user,
            total_points: body.total_points,
            rank: body.rank,
            total_activities: body.total_activities,
            total_calories_burned: body.total_calories_burned,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

// ── GET /api/leaderboard/{id}/ ──────────────────────────────────────────────

pub async fn get_leaderboard_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LeaderboardResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::LeaderboardNotFound)?;
    let uc = GetLeaderboardEntryUseCase {
        repo: state.leaderboard_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

// ── PUT /api/leaderboard/{id}/ ──────────────────────────────────────────────

pub async fn replace_leaderboard_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): LeaderboardBody<LeaderboardRequest>,
) -> Result<Json<LeaderboardResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::LeaderboardNotFound)?;
    let input = UpdateLeaderboardEntryInput {
        user_id: Some(body.user),
        total_points: Some(body.total_points),
        rank: Some(body.rank),
        total_activities: Some(body.total_activities),
        total_calories_burned: Some(body.total_calories_burned),
    };
    update(&state, id, input).await
}

// ── PATCH /api/leaderboard/{id}/ ────────────────────────────────────────────

pub async fn patch_leaderboard_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): LeaderboardBody<LeaderboardPatchRequest>,
) -> Result<Json<LeaderboardResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::LeaderboardNotFound)?;
    let mut errors = FieldErrors::new();
    let input = UpdateLeaderboardEntryInput {
        user_id: non_null(&mut errors, "user", body.user),
        total_points: non_null(&mut errors, "total_points", body.total_points),
        rank: non_null(&mut errors, "rank", body.rank),
        total_activities: non_null(&mut errors, "total_activities", body.total_activities),
        total_calories_burned: non_null(
            &mut errors,
            "total_calories_burned",
            body.total_calories_burned,
        ),
    };
    errors.into_result()?;
    update(&state, id, input).await
}

async fn update(
    state: &AppState,
    id: Uuid,
    input: UpdateLeaderboardEntryInput,
) -> Result<Json<LeaderboardResponse>, TrackerServiceError> {
    let uc = UpdateLeaderboardEntryUseCase {
        leaderboard: state.leaderboard_repo(),
        users: state.user_repo(),
    };
    Ok(Json(uc.execute(id, input).await?.into()))
}

// ── DELETE /api/leaderboard/{id}/ ───────────────────────────────────────────

pub async fn delete_leaderboard_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::LeaderboardNotFound)?;
    let uc = DeleteLeaderboardEntryUseCase {
        repo: state.leaderboard_repo(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
