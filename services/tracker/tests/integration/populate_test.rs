use std::collections::HashSet;

use octofit_domain::team::TeamName;
use octofit_tracker::domain::repository::{
    ActivityRepository, LeaderboardRepository, TeamRepository, UserRepository, WorkoutRepository,
};
use octofit_tracker::usecase::populate::PopulateSummary;

use crate::helpers::{populate_use_case, test_state};

const EXPECTED: PopulateSummary = PopulateSummary {
    teams: 2,
    users: 10,
    workouts: 5,
    activities: 50,
    leaderboard_entries: 10,
};

#[tokio::test]
async fn should_populate_the_demo_dataset() {
    let state = test_state().await;
    let summary = populate_use_case(&state).execute().await.unwrap();
    assert_eq!(summary, EXPECTED);

    let teams = state.team_repo().list().await.unwrap();
    let names: Vec<TeamName> = teams.iter().map(|t| t.name).collect();
    assert_eq!(names, vec![TeamName::Marvel, TeamName::Dc]);

    let users = state.user_repo().list().await.unwrap();
    assert_eq!(users[0].user.superhero_name, "Spider-Man");
    assert_eq!(users[0].team_name, Some(TeamName::Marvel));
    assert_eq!(users[9].user.superhero_name, "Aquaman");
    assert_eq!(users[9].team_name, Some(TeamName::Dc));

    let workouts = state.workout_repo().list().await.unwrap();
    assert_eq!(workouts[0].name, "Morning Run");
    assert_eq!(workouts[4].name, "Balance Training");
}

#[tokio::test]
async fn should_give_each_user_five_increasing_activities() {
    let state = test_state().await;
    populate_use_case(&state).execute().await.unwrap();

    let users = state.user_repo().list().await.unwrap();
    let spidey = &users[0].user;
    let activities = state.activity_repo().list_by_user(spidey.id).await.unwrap();

    let calories: Vec<i32> = activities.iter().map(|a| a.calories_burned).collect();
    assert_eq!(calories, vec![200, 250, 300, 350, 400]);
    let durations: Vec<i32> = activities.iter().map(|a| a.duration_minutes).collect();
    assert_eq!(durations, vec![30, 35, 40, 45, 50]);
    assert_eq!(
        activities[4].description,
        "Spider-Man completed a strength_training session"
    );
    for pair in activities.windows(2) {
        assert!(pair[0].timestamp > pair[1].timestamp);
    }
}

#[tokio::test]
async fn should_derive_leaderboard_totals_from_activities() {
    let state = test_state().await;
    populate_use_case(&state).execute().await.unwrap();

    let board = state.leaderboard_repo().list().await.unwrap();
    assert_eq!(board.len(), 10);
    for detail in &board {
        assert_eq!(detail.entry.total_activities, 5);
        assert_eq!(detail.entry.total_calories_burned, 1500);
        assert_eq!(detail.entry.total_points, 500);
    }
    // Equal points keep insertion order, which is also the assigned rank.
    let ranks: Vec<i32> = board.iter().map(|d| d.entry.rank).collect();
    assert_eq!(ranks, (1..=10).collect::<Vec<_>>());
    assert_eq!(board[0].user_email, "peter@marvel.com");
}

#[tokio::test]
async fn should_reset_before_populating_again() {
    let state = test_state().await;
    let uc = populate_use_case(&state);
    let first = uc.execute().await.unwrap();
    let first_ids: HashSet<_> = state
        .user_repo()
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.user.id)
        .collect();

    let second = uc.execute().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(state.team_repo().list().await.unwrap().len(), 2);
    assert_eq!(state.workout_repo().list().await.unwrap().len(), 5);
    assert_eq!(state.activity_repo().list().await.unwrap().len(), 50);
    assert_eq!(state.leaderboard_repo().list().await.unwrap().len(), 10);

    let users = state.user_repo().list().await.unwrap();
    assert_eq!(users.len(), 10);
    assert!(users.iter().all(|u| !first_ids.contains(&u.user.id)));
    for detail in state.leaderboard_repo().list().await.unwrap() {
        assert_eq!(detail.entry.total_calories_burned, 1500);
    }
}
