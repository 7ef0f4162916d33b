use chrono::{TimeDelta, Utc};
use uuid::Uuid;

use octofit_domain::activity::ActivityType;
use octofit_domain::team::TeamName;
use octofit_domain::workout::{DifficultyLevel, WorkoutType};

use crate::domain::repository::{
    ActivityRepository, LeaderboardRepository, TeamRepository, UserRepository, WorkoutRepository,
};
use crate::domain::types::{
    Activity, ActivityTotals, LeaderboardEntry, Team, User, Workout,
};
use crate::error::TrackerServiceError;

const ACTIVITIES_PER_USER: i32 = 5;

struct Hero {
    email: &'static str,
    name: &'static str,
    superhero_name: &'static str,
}

const fn hero(email: &'static str, name: &'static str, superhero_name: &'static str) -> Hero {
    Hero {
        email,
        name,
        superhero_name,
    }
}

const MARVEL_HEROES: [Hero; 5] = [
    hero("peter@marvel.com", "Peter Parker", "Spider-Man"),
    hero("tony@marvel.com", "Tony Stark", "Iron Man"),
    hero("steve@marvel.com", "Steve Rogers", "Captain America"),
    hero("bruce@marvel.com", "Bruce Banner", "Hulk"),
    hero("thor@marvel.com", "Thor Odinson", "Thor"),
];

const DC_HEROES: [Hero; 5] = [
    hero("clark@dc.com", "Clark Kent", "Superman"),
    hero("bruce.wayne@dc.com", "Bruce Wayne", "Batman"),
    hero("diana@dc.com", "Diana Prince", "Wonder Woman"),
    hero("barry@dc.com", "Barry Allen", "The Flash"),
    hero("arthur@dc.com", "Arthur Curry", "Aquaman"),
];

struct WorkoutSeed {
    name: &'static str,
    description: &'static str,
    workout_type: WorkoutType,
    duration_minutes: i32,
    difficulty_level: DifficultyLevel,
    instructions: &'static str,
}

const WORKOUTS: [WorkoutSeed; 5] = [
    WorkoutSeed {
        name: "Morning Run",
        description: "A refreshing morning run to start the day",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 30,
        difficulty_level: DifficultyLevel::Medium,
        instructions: "Run at a steady pace for 30 minutes",
    },
    WorkoutSeed {
        name: "Strength Training",
        description: "Full body strength training session",
        workout_type: WorkoutType::Strength,
        duration_minutes: 45,
        difficulty_level: DifficultyLevel::Hard,
        instructions: "Perform 3 sets of 8-10 reps for each exercise",
    },
    WorkoutSeed {
        name: "Yoga Session",
        description: "Relaxing yoga for flexibility and balance",
        workout_type: WorkoutType::Flexibility,
        duration_minutes: 60,
        difficulty_level: DifficultyLevel::Easy,
        instructions: "Follow the yoga sequence at your own pace",
    },
    WorkoutSeed {
        name: "HIIT Training",
        description: "High intensity interval training",
        workout_type: WorkoutType::Cardio,
        duration_minutes: 30,
        difficulty_level: DifficultyLevel::Hard,
        instructions: "30 seconds on, 30 seconds rest, repeat 10 times",
    },
    WorkoutSeed {
        name: "Balance Training",
        description: "Improve core balance and stability",
        workout_type: WorkoutType::Balance,
        duration_minutes: 20,
        difficulty_level: DifficultyLevel::Medium,
        instructions: "Practice balance exercises daily",
    },
];

/// Record counts written by one population run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulateSummary {
    pub teams: usize,
    pub users: usize,
    pub workouts: usize,
    pub activities: usize,
    pub leaderboard_entries: usize,
}

// ── PopulateDb ──────────────────────────────────────────────────────────────

/// Wipes every collection and writes the demo dataset.
///
/// Runs as a plain sequence of writes; a failure aborts the run and leaves
/// whatever was written so far.
pub struct PopulateDbUseCase<T, U, A, L, W>
where
    T: TeamRepository,
    U: UserRepository,
    A: ActivityRepository,
    L: LeaderboardRepository,
    W: WorkoutRepository,
{
    pub teams: T,
    pub users: U,
    pub activities: A,
    pub leaderboard: L,
    pub workouts: W,
}

impl<T, U, A, L, W> PopulateDbUseCase<T, U, A, L, W>
where
    T: TeamRepository,
    U: UserRepository,
    A: ActivityRepository,
    L: LeaderboardRepository,
    W: WorkoutRepository,
{
    pub async fn execute(&self) -> Result<PopulateSummary, TrackerServiceError> {
        self.wipe().await?;
        tracing::info!("deleted existing data");

        let mut summary = PopulateSummary::default();

        let marvel = self
            .create_team(TeamName::Marvel, "The mighty Marvel superheroes team")
            .await?;
        let dc = self
            .create_team(TeamName::Dc, "The heroic DC superheroes team")
            .await?;
        summary.teams = 2;
        tracing::info!("created teams: marvel and dc");

        let mut users = Vec::with_capacity(MARVEL_HEROES.len() + DC_HEROES.len());
        for (team, heroes) in [(&marvel, &MARVEL_HEROES), (&dc, &DC_HEROES)] {
            for hero in heroes {
                users.push(self.create_user(team, hero).await?);
            }
        }
        summary.users = users.len();
        tracing::info!(count = summary.users, "created superhero users");

        for seed in &WORKOUTS {
            self.create_workout(seed).await?;
        }
        summary.workouts = WORKOUTS.len();
        tracing::info!(count = summary.workouts, "created workouts");

        for user in &users {
            summary.activities += self.create_activities(user).await?;
        }
        tracing::info!(count = summary.activities, "created activities");

        for (idx, user) in users.iter().enumerate() {
            self.create_leaderboard_entry(user, idx as i32 + 1).await?;
        }
        summary.leaderboard_entries = users.len();
        tracing::info!(
            count = summary.leaderboard_entries,
            "created leaderboard entries"
        );

        Ok(summary)
    }

    async fn wipe(&self) -> Result<(), TrackerServiceError> {
        self.users.delete_all().await?;
        self.teams.delete_all().await?;
        self.activities.delete_all().await?;
        self.leaderboard.delete_all().await?;
        self.workouts.delete_all().await?;
        Ok(())
    }

    async fn create_team(
        &self,
        name: TeamName,
        description: &str,
    ) -> Result<Team, TrackerServiceError> {
        let now = Utc::now();
        let team = Team {
            id: Uuid::now_v7(),
            name,
            description: description.to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.teams.create(&team).await?;
        Ok(team)
    }

    async fn create_user(&self, team: &Team, hero: &Hero) -> Result<User, TrackerServiceError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: hero.email.to_owned(),
            name: hero.name.to_owned(),
            superhero_name: hero.superhero_name.to_owned(),
            team_id: Some(team.id),
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;
        Ok(user)
    }

    async fn create_workout(&self, seed: &WorkoutSeed) -> Result<(), TrackerServiceError> {
        let workout = Workout {
            id: Uuid::now_v7(),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            workout_type: seed.workout_type,
            duration_minutes: seed.duration_minutes,
            difficulty_level: seed.difficulty_level,
            instructions: seed.instructions.to_owned(),
            created_at: Utc::now(),
        };
        self.workouts.create(&workout).await
    }

    async fn create_activities(&self, user: &User) -> Result<usize, TrackerServiceError> {
        let now = Utc::now();
        let types = ActivityType::ALL;
        for i in 0..ACTIVITIES_PER_USER {
            let activity_type = types[i as usize % types.len()];
            let activity = Activity {
                id: Uuid::now_v7(),
                user_id: user.id,
                activity_type,
                description: format!(
                    "{} completed a {} session",
                    user.superhero_name, activity_type
                ),
                duration_minutes: 30 + i * 5,
                calories_burned: 200 + i * 50,
                timestamp: now - TimeDelta::days(i64::from(i)),
            };
            self.activities.create(&activity).await?;
        }
        Ok(ACTIVITIES_PER_USER as usize)
    }

    /// Totals come from re-reading the user's stored activities.
    async fn create_leaderboard_entry(
        &self,
        user: &User,
        rank: i32,
    ) -> Result<(), TrackerServiceError> {
        let activities = self.activities.list_by_user(user.id).await?;
        let totals = ActivityTotals::from_activities(&activities);
        let entry = LeaderboardEntry {
            id: Uuid::now_v7(),
            user_id: user.id,
            total_points: totals.total_points(),
            rank,
            total_activities: totals.total_activities,
            total_calories_burned: totals.total_calories_burned,
            updated_at: Utc::now(),
        };
        self.leaderboard.create(&entry).await
    }
}
