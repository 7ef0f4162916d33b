//! Activity domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownChoice;

/// Kind of exercise session a user logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Running,
    Cycling,
    Swimming,
    Walking,
    StrengthTraining,
}

impl ActivityType {
    /// All activity types, in the order the seed generator cycles through them.
    pub const ALL: [Self; 5] = [
        Self::Running,
        Self::Cycling,
        Self::Swimming,
        Self::Walking,
        Self::StrengthTraining,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Walking => "walking",
            Self::StrengthTraining => "strength_training",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            "swimming" => Ok(Self::Swimming),
            "walking" => Ok(Self::Walking),
            "strength_training" => Ok(Self::StrengthTraining),
            other => Err(UnknownChoice::new("activity type", other)),
        }
    }
}
