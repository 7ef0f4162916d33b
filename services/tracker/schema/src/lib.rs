//! sea-orm entities for the tracker's five collections.

pub mod activities;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;
