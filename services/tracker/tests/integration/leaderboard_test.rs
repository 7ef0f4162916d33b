use octofit_domain::team::TeamName;
use octofit_tracker::domain::types::DUPLICATE_LEADERBOARD;
use octofit_tracker::error::TrackerServiceError;
use octofit_tracker::usecase::leaderboard::{
    CreateLeaderboardEntryInput, CreateLeaderboardEntryUseCase, GetLeaderboardByTeamUseCase,
    ListLeaderboardUseCase,
};

use crate::helpers::{insert_leaderboard_entry, insert_team, insert_user, test_state};

/// Two marvel heroes, two dc heroes, one teamless user, each with a leaderboard row.
async fn seeded_state() -> octofit_tracker::state::AppState {
    let state = test_state().await;
    let marvel = insert_team(&state, TeamName::Marvel).await;
    let dc = insert_team(&state, TeamName::Dc).await;
    let peter = insert_user(&state, "peter@marvel.com", Some(&marvel)).await;
    let tony = insert_user(&state, "tony@marvel.com", Some(&marvel)).await;
    let clark = insert_user(&state, "clark@dc.com", Some(&dc)).await;
    let diana = insert_user(&state, "diana@dc.com", Some(&dc)).await;
    let loner = insert_user(&state, "loner@example.com", None).await;
    insert_leaderboard_entry(&state, &peter, 300).await;
    insert_leaderboard_entry(&state, &tony, 700).await;
    insert_leaderboard_entry(&state, &clark, 900).await;
    insert_leaderboard_entry(&state, &diana, 100).await;
    insert_leaderboard_entry(&state, &loner, 500).await;
    state
}

fn emails(entries: &[octofit_tracker::domain::types::LeaderboardDetail]) -> Vec<&str> {
    entries.iter().map(|e| e.user_email.as_str()).collect()
}

#[tokio::test]
async fn should_list_leaderboard_by_points_descending() {
    let state = seeded_state().await;
    let uc = ListLeaderboardUseCase {
        repo: state.leaderboard_repo(),
    };
    let entries = uc.execute().await.unwrap();
    assert_eq!(
        emails(&entries),
        vec![
            "clark@dc.com",
            "tony@marvel.com",
            "loner@example.com",
            "peter@marvel.com",
            "diana@dc.com",
        ]
    );
    assert_eq!(entries[0].user_name, "Name of clark@dc.com");
}

#[tokio::test]
async fn should_filter_leaderboard_by_team() {
    let state = seeded_state().await;
    let uc = GetLeaderboardByTeamUseCase {
        repo: state.leaderboard_repo(),
    };

    let marvel = uc.execute(Some("marvel")).await.unwrap();
    assert_eq!(emails(&marvel), vec!["tony@marvel.com", "peter@marvel.com"]);
    let points: Vec<i32> = marvel.iter().map(|e| e.entry.total_points).collect();
    assert_eq!(points, vec![700, 300]);

    let dc = uc.execute(Some("dc")).await.unwrap();
    assert_eq!(emails(&dc), vec!["clark@dc.com", "diana@dc.com"]);
}

#[tokio::test]
async fn should_return_whole_leaderboard_without_team() {
    let state = seeded_state().await;
    let uc = GetLeaderboardByTeamUseCase {
        repo: state.leaderboard_repo(),
    };
    assert_eq!(uc.execute(None).await.unwrap().len(), 5);
    assert_eq!(uc.execute(Some("")).await.unwrap().len(), 5);
}

#[tokio::test]
async fn should_return_empty_leaderboard_for_unknown_team() {
    let state = seeded_state().await;
    let uc = GetLeaderboardByTeamUseCase {
        repo: state.leaderboard_repo(),
    };
    assert!(uc.execute(Some("xmen")).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_second_entry_for_same_user() {
    let state = test_state().await;
    let peter = insert_user(&state, "peter@marvel.com", None).await;
    let uc = CreateLeaderboardEntryUseCase {
        leaderboard: state.leaderboard_repo(),
        users: state.user_repo(),
    };
    let input = || CreateLeaderboardEntryInput {
        user_id: peter.id,
        total_points: 100,
        rank: 1,
        total_activities: 1,
        total_calories_burned: 200,
    };

    let created = uc.execute(input()).await.unwrap();
    assert_eq!(created.user_email, "peter@marvel.com");

    let result = uc.execute(input()).await;
    match result {
        Err(TrackerServiceError::Validation(fields)) => {
            assert_eq!(
                fields.get("user"),
                Some(&[DUPLICATE_LEADERBOARD.to_owned()][..])
            );
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
