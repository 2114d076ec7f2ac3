//! Loading configuration from files on disk.

use std::io::Write;

use nurseforge_config::{ConfigError, RosterConfig, StaffingConfig};
use tempfile::Builder;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_staffing_from_toml_file() {
    let file = write_temp(".toml", "max_shifts_per_week = 3\nweeks = 2\n");

    let config = StaffingConfig::load(file.path()).unwrap();
    assert_eq!(config.max_shifts_per_week, 3);
    assert_eq!(config.weeks, 2);

    let same = StaffingConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(same, config);
}

#[test]
fn loads_staffing_from_yaml_file_by_extension() {
    let file = write_temp(".yaml", "hard_penalty_weight: 10.0\n");

    let config = StaffingConfig::load(file.path()).unwrap();
    assert_eq!(config.hard_penalty_weight, 10.0);

    let same = StaffingConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(same, config);
}

#[test]
fn loads_roster_from_toml_file() {
    let file = write_temp(
        ".toml",
        r#"
[staffing]
weeks = 3

[[staff]]
id = "ana"
preference = [1, 0, 0]

[[staff]]
id = "luis"
preference = [0, 0, 1]
"#,
    );

    let roster = RosterConfig::load(file.path()).unwrap();
    assert_eq!(roster.ids(), vec!["ana", "luis"]);
    assert_eq!(roster.staffing.unwrap().weeks, 3);
}

#[test]
fn missing_file_is_an_io_error() {
    let result = StaffingConfig::load("/nonexistent/nurseforge/staffing.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
    assert_eq!(
        StaffingConfig::load("/nonexistent/nurseforge/staffing.toml").unwrap_or_default(),
        StaffingConfig::default()
    );
}
