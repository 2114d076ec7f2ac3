//! Roster fixtures.

use nurseforge_config::RosterConfig;

/// Cycle of single-shift preferences used by [`ward`].
pub const PREFERENCE_CYCLE: [[u8; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// One nurse, `"ana"`, who wants mornings only.
pub fn single_nurse() -> RosterConfig {
    RosterConfig::new().with_member("ana", [1, 0, 0])
}

/// A ward of `size` nurses named `nurse-01`, `nurse-02`, ...
///
/// Preferences cycle morning, afternoon, night.
pub fn ward(size: usize) -> RosterConfig {
    (0..size).fold(RosterConfig::new(), |roster, i| {
        roster.with_member(
            format!("nurse-{:02}", i + 1),
            PREFERENCE_CYCLE[i % PREFERENCE_CYCLE.len()],
        )
    })
}

/// Builds a roster from `(id, preference)` pairs.
pub fn roster_of(members: &[(&str, [u8; 3])]) -> RosterConfig {
    members
        .iter()
        .fold(RosterConfig::new(), |roster, (id, preference)| {
            roster.with_member(*id, *preference)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ward_names_and_preferences() {
        let roster = ward(4);
        assert_eq!(
            roster.ids(),
            vec!["nurse-01", "nurse-02", "nurse-03", "nurse-04"]
        );
        assert_eq!(roster.preferences()[3], [1, 0, 0]);
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_roster_of() {
        let roster = roster_of(&[("ana", [1, 1, 0]), ("luis", [0, 0, 1])]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.preferences(), vec![[1, 1, 0], [0, 0, 1]]);
    }
}
