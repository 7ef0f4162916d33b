use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{populate_use_case, test_server, test_state};

async fn populated_server() -> axum_test::TestServer {
    let state = test_state().await;
    populate_use_case(&state).execute().await.unwrap();
    test_server(state)
}

// ── Index / health ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_serve_health_and_api_index() {
    let server = test_server(test_state().await);

    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();

    let index: Value = server.get("/api/").await.json();
    assert_eq!(index["teams"], "/api/teams/");
    assert_eq!(index["leaderboard"], "/api/leaderboard/");
}

#[tokio::test]
async fn should_echo_request_id_header() {
    let server = test_server(test_state().await);
    let response = server.get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
}

// ── Teams ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_get_update_and_delete_team() {
    let server = test_server(test_state().await);

    let created = server
        .post("/api/teams/")
        .json(&json!({ "name": "marvel", "description": "Avengers" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let team: Value = created.json();
    let path = format!("/api/teams/{}/", team["id"].as_str().unwrap());
    assert_eq!(team["name"], "marvel");

    let fetched: Value = server.get(&path).await.json();
    assert_eq!(fetched["description"], "Avengers");

    let patched: Value = server
        .patch(&path)
        .json(&json!({ "description": "Earth's mightiest" }))
        .await
        .json();
    assert_eq!(patched["name"], "marvel");
    assert_eq!(patched["description"], "Earth's mightiest");

    let replaced: Value = server.put(&path).json(&json!({ "name": "dc" })).await.json();
    assert_eq!(replaced["name"], "dc");
    assert_eq!(replaced["description"], "");

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.get(&path).await.assert_status_not_found();
}

#[tokio::test]
async fn should_report_malformed_path_id_as_not_found() {
    let server = test_server(test_state().await);
    let response = server.get("/api/teams/not-a-uuid/").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["kind"], "TEAM_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_unknown_team_name() {
    let server = test_server(test_state().await);
    let response = server
        .post("/api/teams/")
        .json(&json!({ "name": "xmen" }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert!(body["fields"]["body"].is_array());
}

// ── Users ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_duplicate_email_over_http() {
    let server = test_server(test_state().await);
    let user = json!({ "email": "peter@marvel.com", "name": "Peter Parker" });

    server
        .post("/api/users/")
        .json(&user)
        .await
        .assert_status(StatusCode::CREATED);
    let response = server.post("/api/users/").json(&user).await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(
        body["fields"]["email"][0],
        "user with this email already exists."
    );
}

#[tokio::test]
async fn should_clear_user_team_with_explicit_null() {
    let server = test_server(test_state().await);
    let team: Value = server
        .post("/api/teams/")
        .json(&json!({ "name": "dc" }))
        .await
        .json();
    let user: Value = server
        .post("/api/users/")
        .json(&json!({
            "email": "clark@dc.com",
            "name": "Clark Kent",
            "superhero_name": "Superman",
            "team": team["id"],
        }))
        .await
        .json();
    assert_eq!(user["team"], team["id"]);
    assert_eq!(user["team_name"], "dc");
    let path = format!("/api/users/{}/", user["id"].as_str().unwrap());

    let renamed: Value = server
        .patch(&path)
        .json(&json!({ "name": "Kal-El" }))
        .await
        .json();
    assert_eq!(renamed["team"], team["id"]);

    let detached: Value = server
        .patch(&path)
        .json(&json!({ "team": null }))
        .await
        .json();
    assert_eq!(detached["team"], Value::Null);
    assert_eq!(detached["team_name"], Value::Null);
    assert_eq!(detached["name"], "Kal-El");
}

#[tokio::test]
async fn should_reject_explicit_null_on_non_nullable_patch_fields() {
    let server = test_server(test_state().await);
    let user: Value = server
        .post("/api/users/")
        .json(&json!({ "email": "bruce@dc.com", "name": "Bruce Wayne" }))
        .await
        .json();
    let path = format!("/api/users/{}/", user["id"].as_str().unwrap());

    let response = server
        .patch(&path)
        .json(&json!({ "email": null, "name": null }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["fields"]["email"][0], "This field may not be null.");
    assert_eq!(body["fields"]["name"][0], "This field may not be null.");

    let unchanged: Value = server.get(&path).await.json();
    assert_eq!(unchanged["email"], "bruce@dc.com");
    assert_eq!(unchanged["name"], "Bruce Wayne");

    let workout: Value = server
        .post("/api/workouts/")
        .json(&json!({
            "name": "Plank",
            "workout_type": "strength",
            "duration_minutes": 10,
            "difficulty_level": "easy",
        }))
        .await
        .json();
    let response = server
        .patch(&format!("/api/workouts/{}/", workout["id"].as_str().unwrap()))
        .json(&json!({ "duration_minutes": null }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(
        body["fields"]["duration_minutes"][0],
        "This field may not be null."
    );
}

#[tokio::test]
async fn should_list_user_activities_and_cascade_on_delete() {
    let server = populated_server().await;
    let users: Vec<Value> = server.get("/api/users/").await.json();
    let peter = &users[0];
    let path = format!("/api/users/{}/", peter["id"].as_str().unwrap());

    let activities: Vec<Value> = server
        .get(&format!("{path}activities/"))
        .await
        .json();
    assert_eq!(activities.len(), 5);
    assert!(activities.iter().all(|a| a["user"] == peter["id"]));

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("{path}activities/"))
        .await
        .assert_status_not_found();
    let all: Vec<Value> = server.get("/api/activities/").await.json();
    assert_eq!(all.len(), 45);
    let board: Vec<Value> = server.get("/api/leaderboard/").await.json();
    assert_eq!(board.len(), 9);
    assert!(board.iter().all(|e| e["user"] != peter["id"]));
}

// ── Leaderboard ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_leaderboard_by_team_over_http() {
    let server = populated_server().await;

    let marvel: Vec<Value> = server
        .get("/api/leaderboard/by_team/")
        .add_query_param("team", "marvel")
        .await
        .json();
    assert_eq!(marvel.len(), 5);
    assert!(
        marvel
            .iter()
            .all(|e| e["user_email"].as_str().unwrap().ends_with("@marvel.com"))
    );
    assert_eq!(marvel[0]["user_name"], "Peter Parker");

    let all: Vec<Value> = server.get("/api/leaderboard/by_team/").await.json();
    assert_eq!(all.len(), 10);

    let unknown: Vec<Value> = server
        .get("/api/leaderboard/by_team/")
        .add_query_param("team", "xmen")
        .await
        .json();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn should_reject_malformed_by_team_query_as_json() {
    let server = populated_server().await;

    let response = server
        .get("/api/leaderboard/by_team/?team=marvel&team=dc")
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert!(body["fields"]["query"][0].is_string());
}

#[tokio::test]
async fn should_reorder_leaderboard_after_direct_points_write() {
    let server = populated_server().await;
    let board: Vec<Value> = server.get("/api/leaderboard/").await.json();
    let last = &board[9];
    let path = format!("/api/leaderboard/{}/", last["id"].as_str().unwrap());

    let updated: Value = server
        .patch(&path)
        .json(&json!({ "total_points": 9000 }))
        .await
        .json();
    assert_eq!(updated["total_points"], 9000);
    assert_eq!(updated["total_activities"], 5);

    let board: Vec<Value> = server.get("/api/leaderboard/").await.json();
    assert_eq!(board[0]["id"], last["id"]);
}

// ── Workouts / activities ────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_workout_with_unknown_difficulty() {
    let server = test_server(test_state().await);
    let response = server
        .post("/api/workouts/")
        .json(&json!({
            "name": "Chaos Run",
            "description": "Run until it hurts",
            "workout_type": "cardio",
            "duration_minutes": 30,
            "difficulty_level": "extreme",
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    let workouts: Vec<Value> = server.get("/api/workouts/").await.json();
    assert!(workouts.is_empty());
}

#[tokio::test]
async fn should_create_workout_with_default_instructions() {
    let server = test_server(test_state().await);
    let response = server
        .post("/api/workouts/")
        .json(&json!({
            "name": "Plank",
            "description": "Hold still",
            "workout_type": "balance",
            "duration_minutes": 5,
            "difficulty_level": "easy",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let workout: Value = response.json();
    assert_eq!(workout["instructions"], "");
    assert_eq!(workout["difficulty_level"], "easy");
    assert!(workout["created_at"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn should_reject_activity_for_unknown_user() {
    let server = test_server(test_state().await);
    let response = server
        .post("/api/activities/")
        .json(&json!({
            "user": uuid::Uuid::now_v7(),
            "activity_type": "running",
            "duration_minutes": 30,
            "calories_burned": 200,
        }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["fields"]["user"].is_array());
}
