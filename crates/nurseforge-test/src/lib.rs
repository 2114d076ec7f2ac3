//! Shared test fixtures for NurseForge crates.
//!
//! This crate provides rosters, schedule builders and seeded random
//! schedules. It does NOT depend on `nurseforge-scoring` to avoid circular
//! dependencies.
//!
//! - [`roster`] - ready-made rosters and preference tables
//! - [`schedule`] - [`ScheduleBuilder`] for setting bits by staff/day/shift
//! - [`random`] - reproducible random schedules and staff permutations
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! nurseforge-test = { workspace = true }
//! ```

pub mod random;
pub mod roster;
pub mod schedule;

pub use random::{permute_staff, random_permutation, random_schedule, random_schedule_with_density};
pub use roster::{roster_of, single_nurse, ward};
pub use schedule::ScheduleBuilder;
