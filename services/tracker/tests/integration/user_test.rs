use octofit_domain::team::TeamName;
use octofit_tracker::domain::repository::UserRepository;
use octofit_tracker::domain::types::DUPLICATE_EMAIL;
use octofit_tracker::error::TrackerServiceError;
use octofit_tracker::usecase::user::{
    CreateUserInput, CreateUserUseCase, GetUserActivitiesUseCase, UpdateUserInput,
    UpdateUserUseCase,
};
use uuid::Uuid;

use crate::helpers::{insert_activity, insert_team, insert_user, test_state};

fn input(email: &str, team_id: Option<Uuid>) -> CreateUserInput {
    CreateUserInput {
        email: email.to_owned(),
        name: "Peter Parker".to_owned(),
        superhero_name: "Spider-Man".to_owned(),
        team_id,
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_with_team_name() {
    let state = test_state().await;
    let marvel = insert_team(&state, TeamName::Marvel).await;
    let uc = CreateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };

    let detail = uc
        .execute(input("peter@marvel.com", Some(marvel.id)))
        .await
        .unwrap();

    assert_eq!(detail.user.email, "peter@marvel.com");
    assert_eq!(detail.user.team_id, Some(marvel.id));
    assert_eq!(detail.team_name, Some(TeamName::Marvel));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let state = test_state().await;
    let uc = CreateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };
    uc.execute(input("peter@marvel.com", None)).await.unwrap();

    let result = uc.execute(input("peter@marvel.com", None)).await;
    match result {
        Err(TrackerServiceError::Validation(fields)) => {
            assert_eq!(fields.get("email"), Some(&[DUPLICATE_EMAIL.to_owned()][..]));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert_eq!(state.user_repo().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_map_unique_index_violation_to_validation() {
    let state = test_state().await;
    let first = insert_user(&state, "tony@marvel.com", None).await;
    let mut clone = first.clone();
    clone.id = Uuid::now_v7();

    let result = state.user_repo().create(&clone).await;
    assert!(
        matches!(&result, Err(TrackerServiceError::Validation(f)) if f.get("email").is_some()),
        "expected email Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_unknown_team_reference() {
    let state = test_state().await;
    let uc = CreateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };
    let result = uc
        .execute(input("peter@marvel.com", Some(Uuid::now_v7())))
        .await;
    assert!(
        matches!(&result, Err(TrackerServiceError::Validation(f)) if f.get("team").is_some())
    );
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_own_email_on_update() {
    let state = test_state().await;
    let peter = insert_user(&state, "peter@marvel.com", None).await;
    let uc = UpdateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };

    let updated = uc
        .execute(
            peter.id,
            UpdateUserInput {
                email: Some("peter@marvel.com".to_owned()),
                name: Some("Peter B. Parker".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.user.name, "Peter B. Parker");
    assert!(updated.user.updated_at >= peter.updated_at);
}

#[tokio::test]
async fn should_clear_team_on_explicit_null() {
    let state = test_state().await;
    let marvel = insert_team(&state, TeamName::Marvel).await;
    let peter = insert_user(&state, "peter@marvel.com", Some(&marvel)).await;
    let uc = UpdateUserUseCase {
        users: state.user_repo(),
        teams: state.team_repo(),
    };

    let unchanged = uc
        .execute(peter.id, UpdateUserInput::default())
        .await
        .unwrap();
    assert_eq!(unchanged.user.team_id, Some(marvel.id));

    let cleared = uc
        .execute(
            peter.id,
            UpdateUserInput {
                team_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.user.team_id, None);
    assert_eq!(cleared.team_name, None);
}

// ── GetUserActivities ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_only_the_users_activities() {
    let state = test_state().await;
    let peter = insert_user(&state, "peter@marvel.com", None).await;
    let clark = insert_user(&state, "clark@dc.com", None).await;
    let first = insert_activity(&state, &peter, 200).await;
    insert_activity(&state, &clark, 999).await;
    let second = insert_activity(&state, &peter, 250).await;

    let uc = GetUserActivitiesUseCase {
        users: state.user_repo(),
        activities: state.activity_repo(),
    };
    let activities = uc.execute(peter.id).await.unwrap();

    let ids: Vec<Uuid> = activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(activities.iter().all(|a| a.user_id == peter.id));
}

#[tokio::test]
async fn should_return_user_not_found_for_unknown_user_activities() {
    let state = test_state().await;
    let uc = GetUserActivitiesUseCase {
        users: state.user_repo(),
        activities: state.activity_repo(),
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(TrackerServiceError::UserNotFound)));
}
