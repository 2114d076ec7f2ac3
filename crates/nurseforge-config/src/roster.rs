//! Staff roster and shift preferences.

use std::collections::HashSet;
use std::path::Path;

use nurseforge_core::SHIFTS_PER_DAY;
use serde::{Deserialize, Serialize};

use crate::{load_file, parse_str, ConfigError, ConfigFormat, StaffingConfig};

/// One staff member and the shifts they want to work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaffMember {
    /// Unique identifier of the staff member.
    pub id: String,

    /// Desired shifts [morning, afternoon, night]; 1 means wanted every day.
    #[serde(default)]
    pub preference: [u8; SHIFTS_PER_DAY],
}

impl StaffMember {
    /// Creates a staff member with the given preference flags.
    pub fn new(id: impl Into<String>, preference: [u8; SHIFTS_PER_DAY]) -> Self {
        Self {
            id: id.into(),
            preference,
        }
    }
}

/// The ordered staff roster.
///
/// Order is significant: the n-th member owns the n-th chunk of the flat
/// schedule.
///
/// ```
/// use nurseforge_config::RosterConfig;
///
/// let roster = RosterConfig::from_toml_str(r#"
///     [[staff]]
///     id = "ana"
///     preference = [1, 0, 0]
///
///     [[staff]]
///     id = "luis"
///     preference = [0, 1, 1]
/// "#).unwrap();
///
/// assert_eq!(roster.ids(), vec!["ana".to_string(), "luis".to_string()]);
/// assert_eq!(roster.preferences()[1], [0, 1, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RosterConfig {
    /// Staffing constants shipped alongside the roster, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staffing: Option<StaffingConfig>,

    /// Staff members in schedule order.
    #[serde(default)]
    pub staff: Vec<StaffMember>,
}

impl RosterConfig {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a roster from a TOML or YAML file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_file(path)
    }

    /// Parses a roster from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        parse_str(s, ConfigFormat::Toml)
    }

    /// Parses a roster from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        parse_str(s, ConfigFormat::Yaml)
    }

    /// Appends a staff member.
    pub fn with_member(mut self, id: impl Into<String>, preference: [u8; SHIFTS_PER_DAY]) -> Self {
        self.staff.push(StaffMember::new(id, preference));
        self
    }

    /// Attaches staffing constants.
    pub fn with_staffing(mut self, staffing: StaffingConfig) -> Self {
        self.staffing = Some(staffing);
        self
    }

    /// Returns the staff identifiers in roster order.
    pub fn ids(&self) -> Vec<String> {
        self.staff.iter().map(|m| m.id.clone()).collect()
    }

    /// Returns the preference table in roster order.
    pub fn preferences(&self) -> Vec<[u8; SHIFTS_PER_DAY]> {
        self.staff.iter().map(|m| m.preference).collect()
    }

    /// Returns the number of staff members.
    pub fn len(&self) -> usize {
        self.staff.len()
    }

    /// Returns true if the roster has no staff.
    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    /// Checks the roster and the staffing constants it embeds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_staff()?;
        if let Some(staffing) = &self.staffing {
            staffing.validate()?;
        }
        Ok(())
    }

    /// Checks that the roster is non-empty, ids are unique and preference
    /// flags are binary. Embedded staffing is not checked.
    pub fn validate_staff(&self) -> Result<(), ConfigError> {
        if self.staff.is_empty() {
            return Err(ConfigError::Invalid("roster has no staff".to_string()));
        }
        let mut seen = HashSet::new();
        for member in &self.staff {
            if !seen.insert(member.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate staff id '{}'",
                    member.id
                )));
            }
            if member.preference.iter().any(|&flag| flag > 1) {
                return Err(ConfigError::Invalid(format!(
                    "preference flags of '{}' must be 0 or 1, got {:?}",
                    member.id, member.preference
                )));
            }
        }
        Ok(())
    }
}
