use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{ActivityRepository, TeamRepository, UserRepository};
use crate::domain::types::{
    Activity, DUPLICATE_EMAIL, User, UserDetail, check_email, check_max_len, check_required_text,
    missing_reference,
};
use crate::error::{FieldErrors, TrackerServiceError};

/// Validate a user's own fields and its references, collecting every failure.
async fn validate_user<U, T>(
    users: &U,
    teams: &T,
    user: &User,
) -> Result<(), TrackerServiceError>
where
    U: UserRepository,
    T: TeamRepository,
{
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &user.email);
    check_required_text(&mut errors, "name", &user.name);
    check_max_len(&mut errors, "superhero_name", &user.superhero_name);
    if let Some(team_id) = user.team_id {
        if !teams.exists(team_id).await? {
            errors.add("team", missing_reference(team_id));
        }
    }
    if let Some(other) = users.find_by_email(&user.email).await? {
        if other.id != user.id {
            errors.add("email", DUPLICATE_EMAIL);
        }
    }
    errors.into_result()
}

// ── ListUsers ───────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<UserDetail>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetUser ─────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<UserDetail, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── CreateUser ──────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub email: String,
    pub name: String,
    pub superhero_name: String,
    pub team_id: Option<Uuid>,
}

pub struct CreateUserUseCase<U: UserRepository, T: TeamRepository> {
    pub users: U,
    pub teams: T,
}

impl<U: UserRepository, T: TeamRepository> CreateUserUseCase<U, T> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<UserDetail, TrackerServiceError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: input.email,
            name: input.name,
            superhero_name: input.superhero_name,
            team_id: input.team_id,
            created_at: now,
            updated_at: now,
        };
        validate_user(&self.users, &self.teams, &user).await?;
        self.users.create(&user).await?;
        self.users
            .find_by_id(user.id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── UpdateUser ──────────────────────────────────────────────────────────────

/// Fields to overwrite; `None` keeps the stored value. `team_id: Some(None)` detaches the user.
#[derive(Default)]
pub struct UpdateUserInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub superhero_name: Option<String>,
    pub team_id: Option<Option<Uuid>>,
}

pub struct UpdateUserUseCase<U: UserRepository, T: TeamRepository> {
    pub users: U,
    pub teams: T,
}

impl<U: UserRepository, T: TeamRepository> UpdateUserUseCase<U, T> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateUserInput,
    ) -> Result<UserDetail, TrackerServiceError> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)?
            .user;
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(superhero_name) = input.superhero_name {
            user.superhero_name = superhero_name;
        }
        if let Some(team_id) = input.team_id {
            user.team_id = team_id;
        }
        user.updated_at = Utc::now();
        validate_user(&self.users, &self.teams, &user).await?;
        self.users.update(&user).await?;
        self.users
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::UserNotFound)
    }
}

// ── DeleteUser ──────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    /// Removes the user, its activities and its leaderboard entry.
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::UserNotFound);
        }
        tracing::info!(user_id = %id, "user deleted with activities and leaderboard entry");
        Ok(())
    }
}

// ── GetUserActivities ───────────────────────────────────────────────────────

pub struct GetUserActivitiesUseCase<U: UserRepository, A: ActivityRepository> {
    pub users: U,
    pub activities: A,
}

impl<U: UserRepository, A: ActivityRepository> GetUserActivitiesUseCase<U, A> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Activity>, TrackerServiceError> {
        if !self.users.exists(user_id).await? {
            return Err(TrackerServiceError::UserNotFound);
        }
        self.activities.list_by_user(user_id).await
    }
}
