//! Calendar and diagnostics report for one schedule.

use std::fmt;

use nurseforge_core::{ConstraintKind, DayCode, Result};
use nurseforge_scoring::{ScheduleModel, ScoreExplanation};
use owo_colors::OwoColorize;

/// One staff member's calendar: a code per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarLine {
    pub staff_id: String,
    pub codes: Vec<DayCode>,
}

impl fmt::Display for CalendarLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.staff_id)?;
        for code in &self.codes {
            write!(f, " {}", code)?;
        }
        Ok(())
    }
}

/// The calendar of every staff member plus the diagnostics of every rule.
///
/// `Display` renders plain text; [`Report::colored`] renders the same lines
/// for a terminal.
///
/// # Example
///
/// ```
/// use nurseforge_console::Report;
/// use nurseforge_scoring::ScheduleModel;
///
/// let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
/// let schedule: Vec<u8> = [1, 0, 0].repeat(7);
/// let report = Report::new(&model, &schedule).unwrap();
///
/// let text = report.to_string();
/// assert!(text.contains("ana : M M M M M M M"));
/// assert!(text.contains("Cost = 123.54"));
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    calendar: Vec<CalendarLine>,
    explanation: ScoreExplanation,
}

impl Report {
    /// Scores a schedule and prepares its report.
    pub fn new(model: &ScheduleModel, schedule: &[u8]) -> Result<Self> {
        let calendar = model
            .decode(schedule)?
            .iter()
            .map(|staff| CalendarLine {
                staff_id: staff.staff_id.to_string(),
                codes: staff.day_codes().collect(),
            })
            .collect();
        let explanation = model.explain(schedule)?;

        Ok(Self {
            calendar,
            explanation,
        })
    }

    /// Returns the calendar lines in roster order.
    pub fn calendar(&self) -> &[CalendarLine] {
        &self.calendar
    }

    /// Returns the underlying explanation.
    pub fn explanation(&self) -> &ScoreExplanation {
        &self.explanation
    }

    /// Renders the report with terminal colors.
    pub fn colored(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "Calendar:".bold()));
        for line in &self.calendar {
            out.push_str(&format!("{} :", line.staff_id.white().bold()));
            for code in &line.codes {
                out.push(' ');
                out.push_str(&color_code(*code));
            }
            out.push('\n');
        }

        for section in self.sections() {
            out.push('\n');
            for (label, value) in &section.lists {
                out.push_str(&format!("{} = {}\n", label, value.bright_black()));
            }
            let count = if section.violations > 0 {
                section.violations.bright_red().bold().to_string()
            } else {
                section.violations.bright_green().to_string()
            };
            out.push_str(&format!("{} = {}\n", section.label, count));
        }

        out.push('\n');
        let score = self.explanation.score.to_string();
        let score = if self.explanation.is_feasible() {
            score.bright_green().to_string()
        } else {
            score.bright_red().to_string()
        };
        out.push_str(&format!(
            "{} = {} ({})\n",
            "Cost".bold(),
            self.explanation.cost.to_string().bright_yellow().bold(),
            score
        ));
        out
    }

    fn sections(&self) -> Vec<Section> {
        let e = &self.explanation;
        let counts = e.counts();
        let section = |kind: ConstraintKind, lists: Vec<(&'static str, String)>| Section {
            label: violation_label(kind),
            lists,
            violations: counts.get(kind),
        };

        vec![
            section(ConstraintKind::ConsecutiveShifts, Vec::new()),
            section(ConstraintKind::SameDayDoubleShift, Vec::new()),
            section(
                ConstraintKind::WeeklyShiftCap,
                vec![("Shifts per week", format!("{:?}", e.weekly.weekly_totals))],
            ),
            section(
                ConstraintKind::StaffingBounds,
                vec![("Staff per shift", format!("{:?}", e.staffing.staffed_per_slot))],
            ),
            section(
                ConstraintKind::ShiftPreference,
                vec![("Unmet preferences", format!("{:?}", e.preferences.per_staff))],
            ),
        ]
    }
}

struct Section {
    label: &'static str,
    lists: Vec<(&'static str, String)>,
    violations: u64,
}

fn violation_label(kind: ConstraintKind) -> &'static str {
    match kind {
        ConstraintKind::ConsecutiveShifts => "Consecutive shift violations",
        ConstraintKind::SameDayDoubleShift => "Same-day double shift violations",
        ConstraintKind::WeeklyShiftCap => "Weekly cap violations",
        ConstraintKind::StaffingBounds => "Staffing violations",
        ConstraintKind::ShiftPreference => "Preference violations",
    }
}

fn color_code(code: DayCode) -> String {
    match code {
        DayCode::Morning => code.bright_yellow().to_string(),
        DayCode::Afternoon => code.bright_blue().to_string(),
        DayCode::Night => code.bright_magenta().to_string(),
        DayCode::Double => code.bright_red().bold().to_string(),
        DayCode::Rest => code.bright_black().to_string(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calendar:")?;
        for line in &self.calendar {
            writeln!(f, "{}", line)?;
        }

        for section in self.sections() {
            writeln!(f)?;
            for (label, value) in &section.lists {
                writeln!(f, "{} = {}", label, value)?;
            }
            writeln!(f, "{} = {}", section.label, section.violations)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Cost = {} ({})",
            self.explanation.cost, self.explanation.score
        )
    }
}

#[cfg(test)]
mod tests {
    use nurseforge_core::ShiftOfDay;
    use nurseforge_test::ScheduleBuilder;

    use super::*;

    #[test]
    fn test_plain_report() {
        let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
        let schedule = ScheduleBuilder::new(1, 1).every_day(0, [1, 0, 0]).build();

        let report = Report::new(&model, &schedule).unwrap();
        let expected = "\
Calendar:
ana : M M M M M M M

Consecutive shift violations = 0

Same-day double shift violations = 0

Shifts per week = [7]
Weekly cap violations = 2

Staff per shift = [1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0]
Staffing violations = 56

Unmet preferences = [0]
Preference violations = 0

Cost = 123.54 (58hard/0soft)
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_calendar_codes() {
        let model = ScheduleModel::new(["ana", "luis"], vec![[1, 0, 0], [0, 0, 1]]).unwrap();
        let schedule = ScheduleBuilder::new(2, 1)
            .set_day(0, 0, [1, 0, 1])
            .set_day(0, 1, [1, 1, 0])
            .set_day(0, 2, [0, 1, 1])
            .assign(1, 3, ShiftOfDay::Night)
            .build();

        let report = Report::new(&model, &schedule).unwrap();
        let lines: Vec<String> = report.calendar().iter().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["ana : D M T L L L L", "luis : L L L N L L L"]);
    }

    #[test]
    fn test_colored_report_keeps_content() {
        let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
        let schedule = ScheduleBuilder::new(1, 1).build();

        let colored = Report::new(&model, &schedule).unwrap().colored();
        assert!(colored.contains("Staffing violations"));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_wrong_length_fails() {
        let model = ScheduleModel::new(["ana"], vec![[1, 0, 0]]).unwrap();
        assert!(Report::new(&model, &[0; 3]).is_err());
    }
}
