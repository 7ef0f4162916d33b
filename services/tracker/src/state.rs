use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActivityRepository, DbLeaderboardRepository, DbTeamRepository, DbUserRepository,
    DbWorkoutRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn team_repo(&self) -> DbTeamRepository {
        DbTeamRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_repo(&self) -> DbActivityRepository {
        DbActivityRepository {
            db: self.db.clone(),
        }
    }

    pub fn leaderboard_repo(&self) -> DbLeaderboardRepository {
        DbLeaderboardRepository {
            db: self.db.clone(),
        }
    }

    pub fn workout_repo(&self) -> DbWorkoutRepository {
        DbWorkoutRepository {
            db: self.db.clone(),
        }
    }
}
