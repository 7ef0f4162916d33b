use octofit_domain::team::TeamName;
use octofit_tracker::domain::repository::{
    ActivityRepository, LeaderboardRepository, TeamRepository, UserRepository,
};
use octofit_tracker::error::TrackerServiceError;
use octofit_tracker::usecase::team::DeleteTeamUseCase;
use octofit_tracker::usecase::user::DeleteUserUseCase;

use crate::helpers::{
    insert_activity, insert_leaderboard_entry, insert_team, insert_user, test_state,
};

// ── DeleteUser ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_activities_and_leaderboard_entry() {
    let state = test_state().await;
    let peter = insert_user(&state, "peter@marvel.com", None).await;
    let tony = insert_user(&state, "tony@marvel.com", None).await;
    insert_activity(&state, &peter, 200).await;
    insert_activity(&state, &peter, 250).await;
    let kept = insert_activity(&state, &tony, 300).await;
    insert_leaderboard_entry(&state, &peter, 200).await;
    let kept_entry = insert_leaderboard_entry(&state, &tony, 100).await;

    let uc = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    uc.execute(peter.id).await.unwrap();

    assert!(state.user_repo().find_by_id(peter.id).await.unwrap().is_none());
    assert!(
        state
            .activity_repo()
            .list_by_user(peter.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        state
            .leaderboard_repo()
            .find_by_user(peter.id)
            .await
            .unwrap()
            .is_none()
    );

    let remaining = state.activity_repo().list().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    let board = state.leaderboard_repo().list().await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].entry.id, kept_entry.id);
}

#[tokio::test]
async fn should_return_user_not_found_when_deleting_unknown_user() {
    let state = test_state().await;
    let uc = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    let result = uc.execute(uuid::Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(TrackerServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

// ── DeleteTeam ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_detach_members_when_team_is_deleted() {
    let state = test_state().await;
    let marvel = insert_team(&state, TeamName::Marvel).await;
    let dc = insert_team(&state, TeamName::Dc).await;
    let peter = insert_user(&state, "peter@marvel.com", Some(&marvel)).await;
    let tony = insert_user(&state, "tony@marvel.com", Some(&marvel)).await;
    let clark = insert_user(&state, "clark@dc.com", Some(&dc)).await;

    let uc = DeleteTeamUseCase {
        repo: state.team_repo(),
    };
    uc.execute(marvel.id).await.unwrap();

    assert!(state.team_repo().find_by_id(marvel.id).await.unwrap().is_none());
    for member in [&peter, &tony] {
        let detail = state
            .user_repo()
            .find_by_id(member.id)
            .await
            .unwrap()
            .expect("member must survive team deletion");
        assert_eq!(detail.user.team_id, None);
        assert_eq!(detail.team_name, None);
    }
    let clark = state.user_repo().find_by_id(clark.id).await.unwrap().unwrap();
    assert_eq!(clark.user.team_id, Some(dc.id));
    assert_eq!(clark.team_name, Some(TeamName::Dc));
}

#[tokio::test]
async fn should_return_team_not_found_when_deleting_unknown_team() {
    let state = test_state().await;
    let uc = DeleteTeamUseCase {
        repo: state.team_repo(),
    };
    let result = uc.execute(uuid::Uuid::now_v7()).await;
    assert!(matches!(result, Err(TrackerServiceError::TeamNotFound)));
}
