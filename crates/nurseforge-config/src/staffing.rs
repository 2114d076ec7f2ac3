//! Staffing constants for the scoring rules.

use std::path::Path;

use nurseforge_core::{Cost, ShiftOfDay, SHIFTS_PER_DAY};
use serde::{Deserialize, Serialize};

use crate::{load_file, parse_str, ConfigError, ConfigFormat};

/// Default minimum staff per shift: [morning, afternoon, night].
pub const DEFAULT_MIN_PER_SHIFT: [u32; SHIFTS_PER_DAY] = [4, 3, 2];

/// Default maximum staff per shift: [morning, afternoon, night].
pub const DEFAULT_MAX_PER_SHIFT: [u32; SHIFTS_PER_DAY] = [6, 5, 4];

/// Default maximum shifts one staff member may work per week.
pub const DEFAULT_MAX_SHIFTS_PER_WEEK: u32 = 5;

/// Default weight applied to every hard violation.
pub const DEFAULT_HARD_PENALTY_WEIGHT: f64 = 2.13;

/// Staffing constants used by the scoring rules.
///
/// Every field is optional in a file; missing fields take the defaults
/// documented on each constant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StaffingConfig {
    /// Minimum staff per shift-of-day: [morning, afternoon, night].
    pub min_per_shift: [u32; SHIFTS_PER_DAY],

    /// Maximum staff per shift-of-day: [morning, afternoon, night].
    pub max_per_shift: [u32; SHIFTS_PER_DAY],

    /// Maximum shifts any one staff member may work per 7-day week.
    pub max_shifts_per_week: u32,

    /// Factor applied to the sum of hard violations.
    pub hard_penalty_weight: f64,

    /// Number of 7-day weeks the schedule spans.
    pub weeks: usize,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        StaffingConfig {
            min_per_shift: DEFAULT_MIN_PER_SHIFT,
            max_per_shift: DEFAULT_MAX_PER_SHIFT,
            max_shifts_per_week: DEFAULT_MAX_SHIFTS_PER_WEEK,
            hard_penalty_weight: DEFAULT_HARD_PENALTY_WEIGHT,
            weeks: 1,
        }
    }
}

impl StaffingConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        parse_str(s, ConfigFormat::Toml)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        parse_str(s, ConfigFormat::Yaml)
    }

    /// Sets the number of weeks.
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = weeks;
        self
    }

    /// Sets the hard penalty weight.
    pub fn with_hard_penalty_weight(mut self, weight: f64) -> Self {
        self.hard_penalty_weight = weight;
        self
    }

    /// Sets the weekly shift cap.
    pub fn with_max_shifts_per_week(mut self, max: u32) -> Self {
        self.max_shifts_per_week = max;
        self
    }

    /// Sets both staffing bounds.
    pub fn with_bounds(
        mut self,
        min_per_shift: [u32; SHIFTS_PER_DAY],
        max_per_shift: [u32; SHIFTS_PER_DAY],
    ) -> Self {
        self.min_per_shift = min_per_shift;
        self.max_per_shift = max_per_shift;
        self
    }

    /// Returns the minimum staff for a shift-of-day.
    pub fn min_for(&self, shift: ShiftOfDay) -> u32 {
        self.min_per_shift[shift.index()]
    }

    /// Returns the maximum staff for a shift-of-day.
    pub fn max_for(&self, shift: ShiftOfDay) -> u32 {
        self.max_per_shift[shift.index()]
    }

    /// Returns the hard penalty weight as an exact decimal cost.
    pub fn hard_penalty_cost(&self) -> Cost {
        Cost::from_f64(self.hard_penalty_weight)
    }

    /// Checks the invariants the scoring rules rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weeks == 0 {
            return Err(ConfigError::Invalid(
                "weeks must be at least 1".to_string(),
            ));
        }
        for shift in ShiftOfDay::ALL {
            let (min, max) = (self.min_for(shift), self.max_for(shift));
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "min_per_shift ({}) exceeds max_per_shift ({}) for {} shift",
                    min, max, shift
                )));
            }
        }
        let weight = self.hard_penalty_weight;
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hard_penalty_weight must be a finite non-negative number, got {}",
                weight
            )));
        }
        match Cost::try_from_f64(weight) {
            None => Err(ConfigError::Invalid(format!(
                "hard_penalty_weight {} exceeds the largest supported weight {}",
                weight,
                Cost::MAX_UNSCALED
            ))),
            Some(cost) if cost == Cost::ZERO && weight > 0.0 => {
                Err(ConfigError::Invalid(format!(
                    "hard_penalty_weight {} is below the 0.00001 cost resolution",
                    weight
                )))
            }
            Some(_) => Ok(()),
        }
    }
}
