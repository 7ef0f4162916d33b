use chrono::Utc;
use uuid::Uuid;

use octofit_domain::team::TeamName;

use crate::domain::repository::TeamRepository;
use crate::domain::types::Team;
use crate::error::TrackerServiceError;

// ── ListTeams ───────────────────────────────────────────────────────────────

pub struct ListTeamsUseCase<R: TeamRepository> {
    pub repo: R,
}

impl<R: TeamRepository> ListTeamsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Team>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetTeam ─────────────────────────────────────────────────────────────────

pub struct GetTeamUseCase<R: TeamRepository> {
    pub repo: R,
}

impl<R: TeamRepository> GetTeamUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Team, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::TeamNotFound)
    }
}

// ── CreateTeam ──────────────────────────────────────────────────────────────

pub struct CreateTeamInput {
    pub name: TeamName,
    pub description: String,
}

pub struct CreateTeamUseCase<R: TeamRepository> {
    pub repo: R,
}

impl<R: TeamRepository> CreateTeamUseCase<R> {
    pub async fn execute(&self, input: CreateTeamInput) -> Result<Team, TrackerServiceError> {
        let now = Utc::now();
        let team = Team {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&team).await?;
        Ok(team)
    }
}

// ── UpdateTeam ──────────────────────────────────────────────────────────────

/// Fields to overwrite; `None` keeps the stored value.
#[derive(Default)]
pub struct UpdateTeamInput {
    pub name: Option<TeamName>,
    pub description: Option<String>,
}

pub struct UpdateTeamUseCase<R: TeamRepository> {
    pub repo: R,
}

impl<R: TeamRepository> UpdateTeamUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateTeamInput,
    ) -> Result<Team, TrackerServiceError> {
        let mut team = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::TeamNotFound)?;
        if let Some(name) = input.name {
            team.name = name;
        }
        if let Some(description) = input.description {
            team.description = description;
        }
        team.updated_at = Utc::now();
        self.repo.update(&team).await?;
        Ok(team)
    }
}

// ── DeleteTeam ──────────────────────────────────────────────────────────────

pub struct DeleteTeamUseCase<R: TeamRepository> {
    pub repo: R,
}

impl<R: TeamRepository> DeleteTeamUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::TeamNotFound);
        }
        tracing::info!(team_id = %id, "team deleted; members detached");
        Ok(())
    }
}
