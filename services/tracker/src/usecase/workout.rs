use chrono::Utc;
use uuid::Uuid;

use octofit_domain::workout::{DifficultyLevel, WorkoutType};

use crate::domain::repository::WorkoutRepository;
use crate::domain::types::{Workout, check_non_negative, check_required_text};
use crate::error::{FieldErrors, TrackerServiceError};

fn validate_workout(workout: &Workout) -> Result<(), TrackerServiceError> {
    let mut errors = FieldErrors::new();
    check_required_text(&mut errors, "name", &workout.name);
    check_non_negative(&mut errors, "duration_minutes", workout.duration_minutes);
    errors.into_result()
}

// ── ListWorkouts ────────────────────────────────────────────────────────────

pub struct ListWorkoutsUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> ListWorkoutsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Workout>, TrackerServiceError> {
        self.repo.list().await
    }
}

// ── GetWorkout ──────────────────────────────────────────────────────────────

pub struct GetWorkoutUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> GetWorkoutUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Workout, TrackerServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::WorkoutNotFound)
    }
}

// ── CreateWorkout ───────────────────────────────────────────────────────────

pub struct CreateWorkoutInput {
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub difficulty_level: DifficultyLevel,
    pub instructions: String,
}

pub struct CreateWorkoutUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> CreateWorkoutUseCase<R> {
    pub async fn execute(&self, input: CreateWorkoutInput) -> Result<Workout, TrackerServiceError> {
        let workout = Workout {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            workout_type: input.workout_type,
            duration_minutes: input.duration_minutes,
            difficulty_level: input.difficulty_level,
            instructions: input.instructions,
            created_at: Utc::now(),
        };
        validate_workout(&workout)?;
        self.repo.create(&workout).await?;
        Ok(workout)
    }
}

// ── UpdateWorkout ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateWorkoutInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub workout_type: Option<WorkoutType>,
    pub duration_minutes: Option<i32>,
    pub difficulty_level: Option<DifficultyLevel>,
    pub instructions: Option<String>,
}

pub struct UpdateWorkoutUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> UpdateWorkoutUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateWorkoutInput,
    ) -> Result<Workout, TrackerServiceError> {
        let mut workout = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(TrackerServiceError::WorkoutNotFound)?;
        if let Some(name) = input.name {
            workout.name = name;
        }
        if let Some(description) = input.description {
            workout.description = description;
        }
        if let Some(workout_type) = input.workout_type {
            workout.workout_type = workout_type;
        }
        if let Some(duration_minutes) = input.duration_minutes {
            workout.duration_minutes = duration_minutes;
        }
        if let Some(difficulty_level) = input.difficulty_level {
            workout.difficulty_level = difficulty_level;
        }
        if let Some(instructions) = input.instructions {
            workout.instructions = instructions;
        }
        validate_workout(&workout)?;
        self.repo.update(&workout).await?;
        Ok(workout)
    }
}

// ── DeleteWorkout ───────────────────────────────────────────────────────────

pub struct DeleteWorkoutUseCase<R: WorkoutRepository> {
    pub repo: R,
}

impl<R: WorkoutRepository> DeleteWorkoutUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), TrackerServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(TrackerServiceError::WorkoutNotFound);
        }
        Ok(())
    }
}
