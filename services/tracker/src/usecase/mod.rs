pub mod activity;
pub mod leaderboard;
pub mod populate;
pub mod team;
pub mod user;
pub mod workout;
