//! Score types for representing schedule cost
//!
//! Scores here are penalties: zero is a schedule that breaks no rule, and
//! a lower score is a better schedule. All score types are immutable and
//! implement arithmetic operations.

#[macro_use]
mod macros;

mod cost;
mod hard_soft;
mod level;
mod traits;


pub use cost::Cost;
pub use hard_soft::HardSoftScore;
pub use level::ScoreLevel;
pub use traits::Score;
