use std::str::FromStr;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, SqlErr,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use octofit_domain::UnknownChoice;
use octofit_domain::team::TeamName;
use octofit_tracker_schema::{activities, leaderboard, teams, users, workouts};

use crate::domain::repository::{
    ActivityRepository, LeaderboardRepository, TeamRepository, UserRepository, WorkoutRepository,
};
use crate::domain::types::{
    Activity, DUPLICATE_EMAIL, DUPLICATE_LEADERBOARD, LeaderboardDetail, LeaderboardEntry, Team,
    User, UserDetail, Workout,
};
use crate::error::TrackerServiceError;

const MISSING_REFERENCE: &str = "Referenced object does not exist.";

/// Constraint a failed write may have tripped, and the request field it maps to.
enum Constraint<'a> {
    Unique { field: &'a str, message: &'a str },
    ForeignKey { field: &'a str },
}

/// Turn constraint violations into field errors; anything else is internal.
fn write_error(
    err: DbErr,
    context: &'static str,
    constraints: &[Constraint<'_>],
) -> TrackerServiceError {
    let violation = err.sql_err();
    for constraint in constraints {
        match (constraint, &violation) {
            (Constraint::Unique { field, message }, Some(SqlErr::UniqueConstraintViolation(_))) => {
                return TrackerServiceError::validation(field, *message);
            }
            (Constraint::ForeignKey { field }, Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                return TrackerServiceError::validation(field, MISSING_REFERENCE);
            }
            _ => {}
        }
    }
    anyhow::Error::new(err).context(context).into()
}

fn parse_choice<T>(raw: &str) -> Result<T, TrackerServiceError>
where
    T: FromStr<Err = UnknownChoice>,
{
    Ok(raw.parse::<T>().context("decode stored choice")?)
}

// ── Team repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTeamRepository {
    pub db: DatabaseConnection,
}

impl TeamRepository for DbTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, TrackerServiceError> {
        let models = teams::Entity::find()
            .order_by_asc(teams::Column::Id)
            .all(&self.db)
            .await
            .context("list teams")?;
        models.into_iter().map(team_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, TrackerServiceError> {
        let model = teams::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find team by id")?;
        model.map(team_from_model).transpose()
    }

    async fn exists(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let count = teams::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count team by id")?;
        Ok(count > 0)
    }

    async fn create(&self, team: &Team) -> Result<(), TrackerServiceError> {
        team_active_model(team)
            .insert(&self.db)
            .await
            .context("create team")?;
        Ok(())
    }

    async fn update(&self, team: &Team) -> Result<(), TrackerServiceError> {
        team_active_model(team)
            .update(&self.db)
            .await
            .context("update team")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    users::Entity::update_many()
                        .col_expr(users::Column::TeamId, Expr::value(None::<Uuid>))
                        .filter(users::Column::TeamId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = teams::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete team")?;
        Ok(deleted)
    }

    async fn delete_all(&self) -> Result<u64, TrackerServiceError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    users::Entity::update_many()
                        .col_expr(users::Column::TeamId, Expr::value(None::<Uuid>))
                        .filter(users::Column::TeamId.is_not_null())
                        .exec(txn)
                        .await?;
                    let result = teams::Entity::delete_many().exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete all teams")?;
        Ok(deleted)
    }
}

fn team_active_model(team: &Team) -> teams::ActiveModel {
    teams::ActiveModel {
        id: Set(team.id),
        name: Set(team.name.as_str().to_owned()),
        description: Set(team.description.clone()),
        created_at: Set(team.created_at),
        updated_at: Set(team.updated_at),
    }
}

fn team_from_model(model: teams::Model) -> Result<Team, TrackerServiceError> {
    Ok(Team {
        id: model.id,
        name: parse_choice(&model.name)?,
        description: model.description,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── User repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<UserDetail>, TrackerServiceError> {
        let rows = users::Entity::find()
            .find_also_related(teams::Entity)
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        rows.into_iter()
            .map(|(user, team)| user_detail_from_models(user, team))
            .collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserDetail>, TrackerServiceError> {
        let row = users::Entity::find_by_id(id)
            .find_also_related(teams::Entity)
            .one(&self.db)
            .await
            .context("find user by id")?;
        row.map(|(user, team)| user_detail_from_models(user, team))
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, TrackerServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn exists(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let count = users::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("count user by id")?;
        Ok(count > 0)
    }

    async fn create(&self, user: &User) -> Result<(), TrackerServiceError> {
        user_active_model(user)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "create user", USER_CONSTRAINTS))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), TrackerServiceError> {
        user_active_model(user)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "update user", USER_CONSTRAINTS))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    activities::Entity::delete_many()
                        .filter(activities::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    leaderboard::Entity::delete_many()
                        .filter(leaderboard::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = users::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete user")?;
        Ok(deleted)
    }

    async fn delete_all(&self) -> Result<u64, TrackerServiceError> {
        let deleted = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    activities::Entity::delete_many().exec(txn).await?;
                    leaderboard::Entity::delete_many().exec(txn).await?;
                    let result = users::Entity::delete_many().exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .context("delete all users")?;
        Ok(deleted)
    }
}

const USER_CONSTRAINTS: &[Constraint<'static>] = &[
    Constraint::Unique {
        field: "email",
        message: DUPLICATE_EMAIL,
    },
    Constraint::ForeignKey { field: "team" },
];

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        name: Set(user.name.clone()),
        superhero_name: Set(user.superhero_name.clone()),
        team_id: Set(user.team_id),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        superhero_name: model.superhero_name,
        team_id: model.team_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn user_detail_from_models(
    user: users::Model,
    team: Option<teams::Model>,
) -> Result<UserDetail, TrackerServiceError> {
    let team_name = team
        .map(|t| parse_choice::<TeamName>(&t.name))
        .transpose()?;
    Ok(UserDetail {
        user: user_from_model(user),
        team_name,
    })
}

// ── Activity repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityRepository {
    pub db: DatabaseConnection,
}

impl ActivityRepository for DbActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, TrackerServiceError> {
        let models = activities::Entity::find()
            .order_by_asc(activities::Column::Id)
            .all(&self.db)
            .await
            .context("list activities")?;
        models.into_iter().map(activity_from_model).collect()
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Activity>, TrackerServiceError> {
        let models = activities::Entity::find()
            .filter(activities::Column::UserId.eq(user_id))
            .order_by_asc(activities::Column::Id)
            .all(&self.db)
            .await
            .context("list activities by user")?;
        models.into_iter().map(activity_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, TrackerServiceError> {
        let model = activities::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find activity by id")?;
        model.map(activity_from_model).transpose()
    }

    async fn create(&self, activity: &Activity) -> Result<(), TrackerServiceError> {
        activity_active_model(activity)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "create activity", ACTIVITY_CONSTRAINTS))?;
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), TrackerServiceError> {
        activity_active_model(activity)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "update activity", ACTIVITY_CONSTRAINTS))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let result = activities::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete activity")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, TrackerServiceError> {
        let result = activities::Entity::delete_many()
            .exec(&self.db)
            .await
            .context("delete all activities")?;
        Ok(result.rows_affected)
    }
}

const ACTIVITY_CONSTRAINTS: &[Constraint<'static>] = &[Constraint::ForeignKey { field: "user" }];

fn activity_active_model(activity: &Activity) -> activities::ActiveModel {
    activities::ActiveModel {
        id: Set(activity.id),
        user_id: Set(activity.user_id),
        activity_type: Set(activity.activity_type.as_str().to_owned()),
        description: Set(activity.description.clone()),
        duration_minutes: Set(activity.duration_minutes),
        calories_burned: Set(activity.calories_burned),
        timestamp: Set(activity.timestamp),
    }
}

fn activity_from_model(model: activities::Model) -> Result<Activity, TrackerServiceError> {
    Ok(Activity {
        id: model.id,
        user_id: model.user_id,
        activity_type: parse_choice(&model.activity_type)?,
        description: model.description,
        duration_minutes: model.duration_minutes,
        calories_burned: model.calories_burned,
        timestamp: model.timestamp,
    })
}

// ── Leaderboard repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLeaderboardRepository {
    pub db: DatabaseConnection,
}

impl LeaderboardRepository for DbLeaderboardRepository {
    async fn list(&self) -> Result<Vec<LeaderboardDetail>, TrackerServiceError> {
        let rows = leaderboard::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(leaderboard::Column::TotalPoints)
            .order_by_asc(leaderboard::Column::Id)
            .all(&self.db)
            .await
            .context("list leaderboard")?;
        rows.into_iter()
            .map(|(entry, user)| leaderboard_detail_from_models(entry, user))
            .collect()
    }

    async fn list_by_team(
        &self,
        team: TeamName,
    ) -> Result<Vec<LeaderboardDetail>, TrackerServiceError> {
        let rows = leaderboard::Entity::find()
            .find_also_related(users::Entity)
            .join(JoinType::InnerJoin, users::Relation::Team.def())
            .filter(teams::Column::Name.eq(team.as_str()))
            .order_by_desc(leaderboard::Column::TotalPoints)
            .order_by_asc(leaderboard::Column::Id)
            .all(&self.db)
            .await
            .context("list leaderboard by team")?;
        rows.into_iter()
            .map(|(entry, user)| leaderboard_detail_from_models(entry, user))
            .collect()
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<LeaderboardDetail>, TrackerServiceError> {
        let row = leaderboard::Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(&self.db)
            .await
            .context("find leaderboard entry by id")?;
        row.map(|(entry, user)| leaderboard_detail_from_models(entry, user))
            .transpose()
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<LeaderboardEntry>, TrackerServiceError> {
        let model = leaderboard::Entity::find()
            .filter(leaderboard::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find leaderboard entry by user")?;
        Ok(model.map(leaderboard_entry_from_model))
    }

    async fn create(&self, entry: &LeaderboardEntry) -> Result<(), TrackerServiceError> {
        leaderboard_active_model(entry)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "create leaderboard entry", LEADERBOARD_CONSTRAINTS))?;
        Ok(())
    }

    async fn update(&self, entry: &LeaderboardEntry) -> Result<(), TrackerServiceError> {
        leaderboard_active_model(entry)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "update leaderboard entry", LEADERBOARD_CONSTRAINTS))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let result = leaderboard::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete leaderboard entry")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, TrackerServiceError> {
        let result = leaderboard::Entity::delete_many()
            .exec(&self.db)
            .await
            .context("delete all leaderboard entries")?;
        Ok(result.rows_affected)
    }
}

const LEADERBOARD_CONSTRAINTS: &[Constraint<'static>] = &[
    Constraint::Unique {
        field: "user",
        message: DUPLICATE_LEADERBOARD,
    },
    Constraint::ForeignKey { field: "user" },
];

fn leaderboard_active_model(entry: &LeaderboardEntry) -> leaderboard::ActiveModel {
    leaderboard::ActiveModel {
        id: Set(entry.id),
        user_id: Set(entry.user_id),
        total_points: Set(entry.total_points),
        rank: Set(entry.rank),
        total_activities: Set(entry.total_activities),
        total_calories_burned: Set(entry.total_calories_burned),
        updated_at: Set(entry.updated_at),
    }
}

fn leaderboard_entry_from_model(model: leaderboard::Model) -> LeaderboardEntry {
    LeaderboardEntry {
        id: model.id,
        user_id: model.user_id,
        total_points: model.total_points,
        rank: model.rank,
        total_activities: model.total_activities,
        total_calories_burned: model.total_calories_burned,
        updated_at: model.updated_at,
    }
}

fn leaderboard_detail_from_models(
    entry: leaderboard::Model,
    user: Option<users::Model>,
) -> Result<LeaderboardDetail, TrackerServiceError> {
    let user = user
        .with_context(|| format!("leaderboard entry {} has no user", entry.id))?;
    Ok(LeaderboardDetail {
        entry: leaderboard_entry_from_model(entry),
        user_name: user.name,
        user_email: user.email,
    })
}

// ── Workout repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkoutRepository {
    pub db: DatabaseConnection,
}

impl WorkoutRepository for DbWorkoutRepository {
    async fn list(&self) -> Result<Vec<Workout>, TrackerServiceError> {
        let models = workouts::Entity::find()
            .order_by_asc(workouts::Column::Id)
            .all(&self.db)
            .await
            .context("list workouts")?;
        models.into_iter().map(workout_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Workout>, TrackerServiceError> {
        let model = workouts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find workout by id")?;
        model.map(workout_from_model).transpose()
    }

    async fn create(&self, workout: &Workout) -> Result<(), TrackerServiceError> {
        workout_active_model(workout)
            .insert(&self.db)
            .await
            .context("create workout")?;
        Ok(())
    }

    async fn update(&self, workout: &Workout) -> Result<(), TrackerServiceError> {
        workout_active_model(workout)
            .update(&self.db)
            .await
            .context("update workout")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TrackerServiceError> {
        let result = workouts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete workout")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, TrackerServiceError> {
        let result = workouts::Entity::delete_many()
            .exec(&self.db)
            .await
            .context("delete all workouts")?;
        Ok(result.rows_affected)
    }
}

fn workout_active_model(workout: &Workout) -> workouts::ActiveModel {
    workouts::ActiveModel {
        id: Set(workout.id),
        name: Set(workout.name.clone()),
        description: Set(workout.description.clone()),
        workout_type: Set(workout.workout_type.as_str().to_owned()),
        duration_minutes: Set(workout.duration_minutes),
        difficulty_level: Set(workout.difficulty_level.as_str().to_owned()),
        instructions: Set(workout.instructions.clone()),
        created_at: Set(workout.created_at),
    }
}

fn workout_from_model(model: workouts::Model) -> Result<Workout, TrackerServiceError> {
    Ok(Workout {
        id: model.id,
        name: model.name,
        description: model.description,
        workout_type: parse_choice(&model.workout_type)?,
        duration_minutes: model.duration_minutes,
        difficulty_level: parse_choice(&model.difficulty_level)?,
        instructions: model.instructions,
        created_at: model.created_at,
    })
}
