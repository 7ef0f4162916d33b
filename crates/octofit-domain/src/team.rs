//! Team domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownChoice;

/// The predefined teams a user can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamName {
    Marvel,
    Dc,
}

impl TeamName {
    pub const ALL: [Self; 2] = [Self::Marvel, Self::Dc];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Marvel => "marvel",
            Self::Dc => "dc",
        }
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamName {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "marvel" => Ok(Self::Marvel),
            "dc" => Ok(Self::Dc),
            other => Err(UnknownChoice::new("team name", other)),
        }
    }
}
