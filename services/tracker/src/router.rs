use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use octofit_core::health::healthz;
use octofit_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    activity::{
        create_activity, delete_activity, get_activity, list_activities, patch_activity,
        replace_activity,
    },
    api_root::api_root,
    health::readyz,
    leaderboard::{
        create_leaderboard_entry, delete_leaderboard_entry, get_leaderboard_by_team,
        get_leaderboard_entry, list_leaderboard, patch_leaderboard_entry,
        replace_leaderboard_entry,
    },
    team::{create_team, delete_team, get_team, list_teams, patch_team, replace_team},
    user::{
        create_user, delete_user, get_user, get_user_activities, list_users, patch_user,
        replace_user,
    },
    workout::{
        create_workout, delete_workout, get_workout, list_workouts, patch_workout,
        replace_workout,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Index
        .route("/api/", get(api_root))
        // Teams
        .route("/api/teams/", get(list_teams).post(create_team))
        .route(
            "/api/teams/{id}/",
            get(get_team)
                .put(replace_team)
                .patch(patch_team)
                .delete(delete_team),
        )
        // Users
        .route("/api/users/", get(list_users).post(create_user))
        .route(
            "/api/users/{id}/",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .route("/api/users/{id}/activities/", get(get_user_activities))
        // Activities
        .route("/api/activities/", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}/",
            get(get_activity)
                .put(replace_activity)
                .patch(patch_activity)
                .delete(delete_activity),
        )
        // Leaderboard
        .route(
            "/api/leaderboard/",
            get(list_leaderboard).post(create_leaderboard_entry),
        )
        .route("/api/leaderboard/by_team/", get(get_leaderboard_by_team))
        .route(
            "/api/leaderboard/{id}/",
            get(get_leaderboard_entry)
                .put(replace_leaderboard_entry)
                .patch(patch_leaderboard_entry)
                .delete(delete_leaderboard_entry),
        )
        // Workouts
        .route("/api/workouts/", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}/",
            get(get_workout)
                .put(replace_workout)
                .patch(patch_workout)
                .delete(delete_workout),
        )
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
