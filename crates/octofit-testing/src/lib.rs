//! Test utilities for OctoFit services.
//!
//! Provides a migrated in-memory database. Import from dev-dependencies only,
//! never in production code.

pub mod db;
