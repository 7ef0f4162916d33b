use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use octofit_domain::team::TeamName;

use crate::domain::types::Team;
use crate::error::{FieldErrors, TrackerServiceError};
use crate::handlers::{non_null, parse_id};
use crate::state::AppState;
use crate::usecase::team::{
    CreateTeamInput, CreateTeamUseCase, DeleteTeamUseCase, GetTeamUseCase, ListTeamsUseCase,
    UpdateTeamInput, UpdateTeamUseCase,
};

// ── Request / Response types ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct TeamRequest {
    pub name: TeamName,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct TeamPatchRequest {
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub name: Option<Option<TeamName>>,
    #[serde(default, deserialize_with = "octofit_core::serde::double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: TeamName,
    pub description: String,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "octofit_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.to_string(),
            name: team.name,
            description: team.description,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

type TeamBody<T> = WithRejection<Json<T>, TrackerServiceError>;

// ── GET /api/teams/ ─────────────────────────────────────────────────────────

pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, TrackerServiceError> {
    let uc = ListTeamsUseCase {
        repo: state.team_repo(),
    };
    let teams = uc.execute().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

// ── POST /api/teams/ ────────────────────────────────────────────────────────

pub async fn create_team(
    State(state): State<AppState>,
    WithRejection(Json(body), _): TeamBody<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), TrackerServiceError> {
    let uc = CreateTeamUseCase {
        repo: state.team_repo(),
    };
    let team = uc
        .execute(CreateTeamInput {
            name: body.name,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(team.into())))
}

// ── GET /api/teams/{id}/ ────────────────────────────────────────────────────

pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::TeamNotFound)?;
    let uc = GetTeamUseCase {
        repo: state.team_repo(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

// ── PUT /api/teams/{id}/ ────────────────────────────────────────────────────

pub async fn replace_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): TeamBody<TeamRequest>,
) -> Result<Json<TeamResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::TeamNotFound)?;
    let input = UpdateTeamInput {
        name: Some(body.name),
        description: Some(body.description),
    };
    update(&state, id, input).await
}

// ── PATCH /api/teams/{id}/ ──────────────────────────────────────────────────

pub async fn patch_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): TeamBody<TeamPatchRequest>,
) -> Result<Json<TeamResponse>, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::TeamNotFound)?;
    let mut errors = FieldErrors::new();
    let input = UpdateTeamInput {
        name: non_null(&mut errors, "name", body.name),
        description: non_null(&mut errors, "description", body.description),
    };
    errors.into_result()?;
    update(&state, id, input).await
}

async fn update(
    state: &AppState,
    id: uuid::Uuid,
    input: UpdateTeamInput,
) -> Result<Json<TeamResponse>, TrackerServiceError> {
    let uc = UpdateTeamUseCase {
        repo: state.team_repo(),
    };
    Ok(Json(uc.execute(id, input).await?.into()))
}

// ── DELETE /api/teams/{id}/ ─────────────────────────────────────────────────

pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TrackerServiceError> {
    let id = parse_id(&id, TrackerServiceError::TeamNotFound)?;
    let uc = DeleteTeamUseCase {
        repo: state.team_repo(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
