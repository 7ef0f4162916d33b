use chrono::Utc;
use uuid::Uuid;

use octofit_domain::team::TeamName;

use crate::domain::repository::{LeaderboardRepository, UserRepository};
use crate::domain::types::{
    DUPLICATE_LEADERBOARD, LeaderboardDetail, LeaderboardEntry, check_non_negative,
    missing_reference,
};
use crate::error::{FieldErrors, TrackerServiceError};

async fn validate_entry<L, U>(
    leaderboard: &L,
    users: &U,
    entry: &LeaderboardEntry,
) -> Result<(), TrackerServiceError>
where
    L: LeaderboardRepository,
    U: UserRepository,
{
    let mut errors = FieldErrors::new();
    check_non_negative(&mut errors, "total_points", entry.total_points);
    check_non_negative(&mut errors, "rank", entry.rank);
    check_non_negative(&mut errors, "total_activities", entry.total_activities);
    check_non_negative(
        &mut errors,
        "total_calories_burned",
        entry.total_calories_burned,
    );
    if !users.exists(entry.user_id).await? {
        errors.add("user", missing_reference(entry.user_id));
    } else if let Some(existing) = leaderboard.find_by_user(entry.user_id).await? {
        if existing.id != entry.id {
            errors.add("user", DUPLICATE_LEADERBOARD);
        }
    }
    errors.into_result()
}

// ── ListLeaderboard ─────────────────────────────────────────────────────────

pub struct ListLeaderboardUseCase<R: LeaderboardRepository> {
    pub repo: R,
}

impl<R: LeaderboardRepository> ListLeaderboardUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<LeaderboardDetail>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetLeaderboardByTeam ────────────────────────────────────────────────────

pub struct GetLeaderboardByTeamUseCase<R: LeaderboardRepository> {
    pub repo: R,
}

impl<R: LeaderboardRepository> GetLeaderboardByTeamUseCase<R> {
    /// Entries of one team, highest points first. No (or an empty) team name
    /// means the whole leaderboard; a name that is not a known team matches nothing.
    pub async fn execute(
        &self,
        team: Option<&str>,
    ) -> Result<Vec<LeaderboardDetail>, TrackerServiceError> {
        let Some(raw) = team.filter(|t| !t.is_empty()) else {
            return self.repo.list().await;
        };
        match raw.parse::<TeamName>() {
            Ok(name) => self.repo.list_by_team(name).await,
            Err(err) => {
                tracing::debug!(error = %err, "leaderboard filtered by unknown team");
                Ok(Vec::new())
            }
        }
    }
}

// ── GetLeaderboardEntry ─────────────────────────────────────────────────────

pub struct GetLeaderboardEntryUseCase<R: LeaderboardRepository> {
    pub repo: R,
}

impl<R: LeaderboardRepository> GetLeaderboardEntryUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<LeaderboardDetail, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::LeaderboardNotFound)
    }
}

// ── CreateLeaderboardEntry ──────────────────────────────────────────────────

pub struct CreateLeaderboardEntryInput {
    pub user_id: Uuid,
    pub total_points: i32,
    pub rank: i32,
    pub total_activities: i32,
    pub total_calories_burned: i32,
}

pub struct CreateLeaderboardEntryUseCase<L: LeaderboardRepository, U: UserRepository> {
    pub leaderboard: L,
    pub users: U,
}

impl<L: LeaderboardRepository, U: UserRepository> CreateLeaderboardEntryUseCase<L, U> {
    pub async fn execute(
        &self,
        input: CreateLeaderboardEntryInput,
    ) -> Result<LeaderboardDetail, TrackerServiceError> {
        let entry = LeaderboardEntry {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            total_points: input.total_points,
            rank: input.rank,
            total_activities: input.total_activities,
            total_calories_burned: input.total_calories_burned,
            updated_at: Utc::now(),
        };
        validate_entry(&self.leaderboard, &self.users, &entry).await?;
        self.leaderboard.create(&entry).await?;
        self.leaderboard
            .find_by_id(entry.id)
            .await?
            .ok_or(TrackerServiceError::LeaderboardNotFound)
    }
}

// ── UpdateLeaderboardEntry ──────────────────────────────────────────────────

/// Totals are written as given; nothing is recomputed from activities.
#[derive(Default)]
pub struct UpdateLeaderboardEntryInput {
    pub user_id: Option<Uuid>,
    pub total_points: Option<i32>,
    pub rank: Option<i32>,
    pub total_activities: Option<i32>,
    pub total_calories_burned: Option<i32>,
}

pub struct UpdateLeaderboardEntryUseCase<L: LeaderboardRepository, U: UserRepository> {
    pub leaderboard: L,
    pub users: U,
}

impl<L: LeaderboardRepository, U: UserRepository> UpdateLeaderboardEntryUseCase<L, U> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateLeaderboardEntryInput,
    ) -> Result<LeaderboardDetail, TrackerServiceError> {
        let mut entry = self
            .leaderboard
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::LeaderboardNotFound)?
            .entry;
        if let Some(user_id) = input.user_id {
            entry.user_id = user_id;
        }
        if let Some(total_points) = input.total_points {
            entry.total_points = total_points;
        }
        if let Some(rank) = input.rank {
            entry.rank = rank;
        }
        if let Some(total_activities) = input.total_activities {
            entry.total_activities = total_activities;
        }
        if let Some(total_calories_burned) = input.total_calories_burned {
            entry.total_calories_burned = total_calories_burned;
        }
        entry.updated_at = Utc::now();
        validate_entry(&self.leaderboard, &self.users, &entry).await?;
        self.leaderboard.update(&entry).await?;
        self.leaderboard
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::LeaderboardNotFound)
    }
}

// ── DeleteLeaderboardEntry ──────────────────────────────────────────────────

pub struct DeleteLeaderboardEntryUseCase<R: LeaderboardRepository> {
    pub repo: R,
}

impl<R: LeaderboardRepository> DeleteLeaderboardEntryUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::LeaderboardNotFound);
        }
        Ok(())
    }
}
