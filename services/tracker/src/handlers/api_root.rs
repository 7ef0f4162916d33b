use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiRootResponse {
    pub teams: &'static str,
    pub users: &'static str,
    pub activities: &'static str,
    pub leaderboard: &'static str,
    pub workouts: &'static str,
}

// ── GET /api/ ───────────────────────────────────────────────────────────────

pub async fn api_root() -> Json<ApiRootResponse> {
    Json(ApiRootResponse {
        teams: "/api/teams/",
        users: "/api/users/",
        activities: "/api/activities/",
        leaderboard: "/api/leaderboard/",
        workouts: "/api/workouts/",
    })
}
