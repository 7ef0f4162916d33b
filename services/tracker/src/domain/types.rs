use chrono::{DateTime, Utc};
use uuid::Uuid;

use octofit_domain::activity::ActivityType;
use octofit_domain::team::TeamName;
use octofit_domain::workout::{DifficultyLevel, WorkoutType};

use crate::error::FieldErrors;

/// Points awarded per logged activity when a leaderboard row is derived.
pub const POINTS_PER_ACTIVITY: i32 = 100;

pub const MAX_NAME_LEN: usize = 255;
pub const MAX_EMAIL_LEN: usize = 254;

pub const DUPLICATE_EMAIL: &str = "user with this email already exists.";
pub const DUPLICATE_LEADERBOARD: &str = "leaderboard with this user already exists.";

/// A named group of users.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: TeamName,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tracker user. Belongs to at most one team.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub superhero_name: String,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with the name of the team it points at, if any.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub team_name: Option<TeamName>,
}

/// A single logged exercise session.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub timestamp: DateTime<Utc>,
}

/// Cached per-user aggregate. Not recomputed when activities change.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_points: i32,
    pub rank: i32,
    pub total_activities: i32,
    pub total_calories_burned: i32,
    pub updated_at: DateTime<Utc>,
}

/// A leaderboard entry with the owning user's display fields.
#[derive(Debug, Clone)]
pub struct LeaderboardDetail {
    pub entry: LeaderboardEntry,
    pub user_name: String,
    pub user_email: String,
}

/// A reusable exercise template.
#[derive(Debug, Clone)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub duration_minutes: i32,
    pub difficulty_level: DifficultyLevel,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

/// Count and calorie sum over one user's activities. Sums saturate at `i32::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTotals {
    pub total_activities: i32,
    pub total_calories_burned: i32,
}

impl ActivityTotals {
    pub fn from_activities(activities: &[Activity]) -> Self {
        activities.iter().fold(Self::default(), |acc, a| Self {
            total_activities: acc.total_activities.saturating_add(1),
            total_calories_burned: acc.total_calories_burned.saturating_add(a.calories_burned),
        })
    }

    pub fn total_points(&self) -> i32 {
        self.total_activities.saturating_mul(POINTS_PER_ACTIVITY)
    }
}

/// Loose address check: one `@`, a non-empty local part, a dotted domain, no whitespace.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

// ── Field checks shared by create/update use cases ──────────────────────────

pub(crate) fn check_required_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, "This field may not be blank.");
    }
    check_max_len(errors, field, value);
}

pub(crate) fn check_max_len(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.chars().count() > MAX_NAME_LEN {
        errors.add(
            field,
            format!("Ensure this field has no more than {MAX_NAME_LEN} characters."),
        );
    }
}

pub(crate) fn check_non_negative(errors: &mut FieldErrors, field: &str, value: i32) {
    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
    }
}

pub(crate) fn check_email(errors: &mut FieldErrors, email: &str) {
    if !validate_email(email) {
        errors.add("email", "Enter a valid email address.");
    }
}

pub(crate) fn missing_reference(id: Uuid) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}
