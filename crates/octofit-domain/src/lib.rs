//! Domain types shared across OctoFit services.
//!
//! This crate contains only pure types with no framework dependencies.
//! The closed enumerations here back every choice-restricted field of the
//! tracker's entities; the wire and storage form is the snake_case name.

pub mod activity;
pub mod team;
pub mod workout;

use thiserror::Error;

/// Error returned when a string does not name a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownChoice {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }
}
