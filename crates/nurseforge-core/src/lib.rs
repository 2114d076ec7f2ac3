//! NurseForge Core - Core types for nurse schedule cost evaluation
//!
//! This crate provides the shared vocabulary of NurseForge:
//! - Score types for representing schedule cost
//! - Shift-of-day and calendar code types for the flat schedule layout
//! - Constraint identification for the five scoring rules
//! - The error type shared by all crates

pub mod constraint;
pub mod error;
pub mod score;
pub mod shift;

pub use constraint::{ConstraintKind, ConstraintRef};
pub use error::{NurseForgeError, Result};
pub use score::{Cost, HardSoftScore, Score, ScoreLevel};
pub use shift::{DayCode, ShiftOfDay, DAYS_PER_WEEK, SHIFTS_PER_DAY, SHIFTS_PER_WEEK};
