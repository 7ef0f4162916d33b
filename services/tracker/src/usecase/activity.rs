use chrono::Utc;
use uuid::Uuid;

use octofit_domain::activity::ActivityType;

use crate::domain::repository::{ActivityRepository, UserRepository};
use crate::domain::types::{Activity, check_non_negative, missing_reference};
use crate::error::{FieldErrors, TrackerServiceError};

async fn validate_activity<U: UserRepository>(
    users: &U,
    activity: &Activity,
) -> Result<(), TrackerServiceError> {
    let mut errors = FieldErrors::new();
    check_non_negative(&mut errors, "duration_minutes", activity.duration_minutes);
    check_non_negative(&mut errors, "calories_burned", activity.calories_burned);
    if !users.exists(activity.user_id).await? {
        errors.add("user", missing_reference(activity.user_id));
    }
    errors.into_result()
}

// ── ListActivities ──────────────────────────────────────────────────────────

pub struct ListActivitiesUseCase<R: ActivityRepository> {
    pub repo: R,
}

impl<R: ActivityRepository> ListActivitiesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Activity>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetActivity ─────────────────────────────────────────────────────────────

pub struct GetActivityUseCase<R: ActivityRepository> {
    pub repo: R,
}

impl<R: ActivityRepository> GetActivityUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Activity, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::ActivityNotFound)
    }
}

// ── CreateActivity ──────────────────────────────────────────────────────────

pub struct CreateActivityInput {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
}

pub struct CreateActivityUseCase<A: ActivityRepository, U: UserRepository> {
    pub activities: A,
    pub users: U,
}

impl<A: ActivityRepository, U: UserRepository> CreateActivityUseCase<A, U> {
    /// The timestamp is always the moment of creation.
    pub async fn execute(
        &self,
        input: CreateActivityInput,
    ) -> Result<Activity, TrackerServiceError> {
        let activity = Activity {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            activity_type: input.activity_type,
            description: input.description,
            duration_minutes: input.duration_minutes,
            calories_burned: input.calories_burned,
            timestamp: Utc::now(),
        };
        validate_activity(&self.users, &activity).await?;
        self.activities.create(&activity).await?;
        Ok(activity)
    }
}

// ── UpdateActivity ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateActivityInput {
    pub user_id: Option<Uuid>,
    pub activity_type: Option<ActivityType>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
}

pub struct UpdateActivityUseCase<A: ActivityRepository, U: UserRepository> {
    pub activities: A,
    pub users: U,
}

impl<A: ActivityRepository, U: UserRepository> UpdateActivityUseCase<A, U> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateActivityInput,
    ) -> Result<Activity, TrackerServiceError> {
        let mut activity = self
            .activities
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::ActivityNotFound)?;
        if let Some(user_id) = input.user_id {
            activity.user_id = user_id;
        }
        if let Some(activity_type) = input.activity_type {
            activity.activity_type = activity_type;
        }
        if let Some(description) = input.description {
            activity.description = description;
        }
        if let Some(duration_minutes) = input.duration_minutes {
            activity.duration_minutes = duration_minutes;
        }
        if let Some(calories_burned) = input.calories_burned {
            activity.calories_burned = calories_burned;
        }
        validate_activity(&self.users, &activity).await?;
        self.activities.update(&activity).await?;
        Ok(activity)
    }
}

// ── DeleteActivity ──────────────────────────────────────────────────────────

pub struct DeleteActivityUseCase<R: ActivityRepository> {
    pub repo: R,
}

impl<R: ActivityRepository> DeleteActivityUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::ActivityNotFound);
        }
        Ok(())
    }
}
