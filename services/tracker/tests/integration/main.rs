mod helpers;

mod cascade_test;
mod http_test;
mod leaderboard_test;
mod populate_test;
mod user_test;
