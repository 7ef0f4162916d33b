#![allow(async_fn_in_trait)]

use uuid::Uuid;

use octofit_domain::team::TeamName;

use crate::domain::types::{
    Activity, LeaderboardDetail, LeaderboardEntry, Team, User, UserDetail, Workout,
};
use crate::error::TrackerServiceError;

/// Repository for teams.
pub trait TeamRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Team>, TrackerServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, TrackerServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn create(&self, team: &Team) -> Result<(), TrackerServiceError>;
    async fn update(&self, team: &Team) -> Result<(), TrackerServiceError>;

    /// Delete a team and null `team_id` on its members. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn delete_all(&self) -> Result<u64, TrackerServiceError>;
}

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<UserDetail>, TrackerServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserDetail>, TrackerServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TrackerServiceError>;
    async fn exists(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn create(&self, user: &User) -> Result<(), TrackerServiceError>;
    async fn update(&self, user: &User) -> Result<(), TrackerServiceError>;

    /// Delete a user together with its activities and leaderboard entry.
    /// Returns `true` if the user row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn delete_all(&self) -> Result<u64, TrackerServiceError>;
}

/// Repository for logged activities.
pub trait ActivityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Activity>, TrackerServiceError>;
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Activity>, TrackerServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, TrackerServiceError>;
    async fn create(&self, activity: &Activity) -> Result<(), TrackerServiceError>;
    async fn update(&self, activity: &Activity) -> Result<(), TrackerServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn delete_all(&self) -> Result<u64, TrackerServiceError>;
}

/// Repository for leaderboard entries. Lists are ordered by total points, highest first.
pub trait LeaderboardRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<LeaderboardDetail>, TrackerServiceError>;

    /// Entries whose user belongs to a team named `team`.
    async fn list_by_team(
        &self,
        team: TeamName,
    ) -> Result<Vec<LeaderboardDetail>, TrackerServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<LeaderboardDetail>, TrackerServiceError>;
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, TrackerServiceError>;
    async fn create(&self, entry: &LeaderboardEntry) -> Result<(), TrackerServiceError>;
    async fn update(&self, entry: &LeaderboardEntry) -> Result<(), TrackerServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn delete_all(&self) -> Result<u64, TrackerServiceError>;
}

/// Repository for workout templates.
pub trait WorkoutRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Workout>, TrackerServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, TrackerServiceError>;
    async fn create(&self, workout: &Workout) -> Result<(), TrackerServiceError>;
    async fn update(&self, workout: &Workout) -> Result<(), TrackerServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError>;
    async fn delete_all(&self) -> Result<u64, TrackerServiceError>;
}
