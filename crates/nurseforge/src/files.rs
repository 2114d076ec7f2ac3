//! Loading rosters, staffing constants and schedules from disk.

use std::fs;
use std::path::{Path, PathBuf};

use nurseforge_config::{ConfigError, RosterConfig, StaffingConfig};
use nurseforge_core::NurseForgeError;
use nurseforge_scoring::ScheduleModel;
use thiserror::Error;
use tracing::info;

/// Errors from reading input files.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schedule token '{token}' at position {position}: expected 0 or 1")]
    InvalidToken { position: usize, token: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Model(#[from] NurseForgeError),
}

/// Parses a schedule of `0`/`1` tokens separated by whitespace or commas.
///
/// ```
/// use nurseforge::files::parse_schedule;
///
/// assert_eq!(parse_schedule("1 0,0\n 1").unwrap(), vec![1, 0, 0, 1]);
/// assert!(parse_schedule("1 2").is_err());
/// ```
pub fn parse_schedule(text: &str) -> Result<Vec<u8>, FileError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| match token {
            "0" => Ok(0),
            "1" => Ok(1),
            _ => Err(FileError::InvalidToken {
                position,
                token: token.to_string(),
            }),
        })
        .collect()
}

/// Reads and parses a schedule file.
pub fn load_schedule(path: impl AsRef<Path>) -> Result<Vec<u8>, FileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schedule = parse_schedule(&text)?;

    info!(
        event = "file_loaded",
        path = %path.display(),
        bits = schedule.len(),
    );
    Ok(schedule)
}

/// Builds a model from a roster file.
///
/// Staffing constants come from `config` if given, else from the roster's
/// own `[staffing]` section, else the defaults. `weeks` overrides the week
/// count from either source.
pub fn load_model(
    roster: impl AsRef<Path>,
    config: Option<&Path>,
    weeks: Option<usize>,
) -> Result<ScheduleModel, FileError> {
    let roster_path = roster.as_ref();
    let roster = RosterConfig::load(roster_path)?;
    info!(event = "file_loaded", path = %roster_path.display());

    let mut staffing = match config {
        Some(path) => {
            let staffing = StaffingConfig::load(path)?;
            info!(event = "file_loaded", path = %path.display());
            staffing
        }
        None => roster.staffing.clone().unwrap_or_default(),
    };
    if let Some(weeks) = weeks {
        staffing = staffing.with_weeks(weeks);
    }

    Ok(ScheduleModel::from_roster_with(&roster, staffing)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        let schedule = parse_schedule("1,0,0\n0 1 0\t0,,1\n").unwrap();
        assert_eq!(schedule, vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_schedule("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_other_tokens() {
        match parse_schedule("0 1 x 1") {
            Err(FileError::InvalidToken { position, token }) => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_schedule("/nonexistent/schedule.txt").unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/schedule.txt"));
    }
}
