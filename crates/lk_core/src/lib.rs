//! # lk_core - Round-Robin League Scheduling Engine
//!
//! This library generates complete round-robin fixture lists for amateur
//! sports leagues: in every round each team plays every other team exactly
//! once, home and away sides alternate by round parity, and each round's
//! fixtures are reordered so that no team appears in two consecutive slots
//! of the published order.
//!
//! The consecutive-slot constraint is soft: the search is randomized under
//! a fixed retry budget, and rounds where no clash-free ordering was found
//! (or none exists, as with a three-team roster) are reported in the
//! result rather than failing the run.
//!
//! ## Features
//! - Complete single round-robin pairing per round
//! - Constrained reordering with a bounded retry budget (best effort)
//! - Optional seed for reproducible schedules (same seed = same schedule)
//! - JSON API for easy integration with host applications
//!
//! ## Quick start
//! ```
//! use lk_core::{generate_schedule, TeamId};
//!
//! let teams = vec![TeamId(1), TeamId(2), TeamId(3), TeamId(4)];
//! let schedule = generate_schedule(teams, 2).unwrap();
//! assert_eq!(schedule.fixture_count(), 12);
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the main API surface
pub use api::{generate_schedule_json, ScheduleRequest, ScheduleResult};
pub use engine::{
    generate_schedule, ScheduleEngine, SchedulePlan, MAX_SHUFFLE_ATTEMPTS,
};
pub use error::{Result, ScheduleError};
pub use models::{Fixture, FixtureStatus, Schedule, TeamId};
