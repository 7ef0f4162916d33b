use axum_test::TestServer;
use chrono::Utc;
use uuid::Uuid;

use octofit_domain::activity::ActivityType;
use octofit_domain::team::TeamName;
use octofit_testing::db::test_db;
use octofit_tracker::domain::repository::{
    ActivityRepository, LeaderboardRepository, TeamRepository, UserRepository,
};
use octofit_tracker::domain::types::{Activity, LeaderboardEntry, Team, User};
use octofit_tracker::infra::db::{
    DbActivityRepository, DbLeaderboardRepository, DbTeamRepository, DbUserRepository,
    DbWorkoutRepository,
};
use octofit_tracker::router::build_router;
use octofit_tracker::state::AppState;
use octofit_tracker::usecase::populate::PopulateDbUseCase;

// ── State / server ───────────────────────────────────────────────────────────

/// App state over a fresh, migrated in-memory database.
pub async fn test_state() -> AppState {
    AppState {
        db: test_db().await,
    }
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).expect("failed to build test server")
}

pub type DbPopulateDbUseCase = PopulateDbUseCase<
    DbTeamRepository,
    DbUserRepository,
    DbActivityRepository,
    DbLeaderboardRepository,
    DbWorkoutRepository,
>;

pub fn populate_use_case(state: &AppState) -> DbPopulateDbUseCase {
    PopulateDbUseCase {
        teams: state.team_repo(),
        users: state.user_repo(),
        activities: state.activity_repo(),
        leaderboard: state.leaderboard_repo(),
        workouts: state.workout_repo(),
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub async fn insert_team(state: &AppState, name: TeamName) -> Team {
    let now = Utc::now();
    let team = Team {
        id: Uuid::now_v7(),
        name,
        description: format!("{name} test team"),
        created_at: now,
        updated_at: now,
    };
    state.team_repo().create(&team).await.unwrap();
    team
}

pub async fn insert_user(state: &AppState, email: &str, team: Option<&Team>) -> User {
    let now = Utc::now();
    let user = User {
        id: Uuid::now_v7(),
        email: email.to_owned(),
        name: format!("Name of {email}"),
        superhero_name: format!("Alias of {email}"),
        team_id: team.map(|t| t.id),
        created_at: now,
        updated_at: now,
    };
    state.user_repo().create(&user).await.unwrap();
    user
}

pub async fn insert_activity(state: &AppState, user: &User, calories_burned: i32) -> Activity {
    let activity = Activity {
        id: Uuid::now_v7(),
        user_id: user.id,
        activity_type: ActivityType::Running,
        description: String::new(),
        duration_minutes: 30,
        calories_burned,
        timestamp: Utc::now(),
    };
    state.activity_repo().create(&activity).await.unwrap();
    activity
}

pub async fn insert_leaderboard_entry(
    state: &AppState,
    user: &User,
    total_points: i32,
) -> LeaderboardEntry {
    let entry = LeaderboardEntry {
        id: Uuid::now_v7(),
        user_id: user.id,
        total_points,
        rank: 0,
        total_activities: total_points / 100,
        total_calories_burned: 0,
        updated_at: Utc::now(),
    };
    state.leaderboard_repo().create(&entry).await.unwrap();
    entry
}
