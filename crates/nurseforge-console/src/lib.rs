//! Colorful console output and schedule reports.
//!
//! Provides a custom `tracing` layer that formats NurseForge events with
//! colors, and the [`Report`] printer for one scored schedule.
//!
//! ## Log Levels
//!
//! - **INFO**: Model construction and file loading
//! - **DEBUG**: Score explanations and rejected schedules
//! - **TRACE**: Individual cost evaluations

mod report;

pub use report::{CalendarLine, Report};

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console logging at INFO.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default directive.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console logging with a default level for NurseForge crates.
pub fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(NurseConsoleLayer)
            .try_init();
    });
}

/// Maps a `-v` count to a level: INFO, then DEBUG, then TRACE.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn default_directive(level: LevelFilter) -> String {
    let level = [
        (LevelFilter::OFF, "off"),
        (LevelFilter::ERROR, "error"),
        (LevelFilter::WARN, "warn"),
        (LevelFilter::INFO, "info"),
        (LevelFilter::DEBUG, "debug"),
    ]
    .iter()
    .find(|(filter, _)| *filter == level)
    .map_or("trace", |(_, name)| *name);
    format!("nurseforge={}", level)
}

/// A tracing layer that formats NurseForge events with colors.
///
/// Events go to stderr so that scores on stdout stay machine-readable.
pub struct NurseConsoleLayer;

impl<S: Subscriber> Layer<S> for NurseConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("nurseforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    path: Option<String>,
    cost: Option<String>,
    staff_count: Option<u64>,
    weeks: Option<u64>,
    schedule_length: Option<u64>,
    expected: Option<u64>,
    actual: Option<u64>,
    hard: Option<u64>,
    soft: Option<u64>,
    bits: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "message" => self.message = Some(s),
            "path" => self.path = Some(s.trim_matches('"').to_string()),
            "cost" => self.cost = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "staff_count" => self.staff_count = Some(value),
            "weeks" => self.weeks = Some(value),
            "schedule_length" => self.schedule_length = Some(value),
            "expected" => self.expected = Some(value),
            "actual" => self.actual = Some(value),
            "hard" => self.hard = Some(value),
            "soft" => self.soft = Some(value),
            "bits" => self.bits = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "message" => self.message = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "cost" => self.cost = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "model_built" => format_model_built(v),
        "file_loaded" => format_file_loaded(v),
        "schedule_rejected" => format_schedule_rejected(v),
        "score_explained" => format_score_line(v, "Explained", "◆".bright_cyan().to_string()),
        "cost_evaluated" if level == Level::TRACE => {
            format_score_line(v, "Evaluated", "·".bright_black().to_string())
        }
        "" => v.message.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} Model ready │ {} staff │ {} weeks │ {} slots",
        "▶".bright_green().bold(),
        count(v.staff_count).bright_yellow(),
        count(v.weeks).bright_yellow(),
        count(v.schedule_length).bright_yellow(),
    )
}

fn format_file_loaded(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Loaded {}",
        "▶".bright_blue(),
        v.path.as_deref().unwrap_or("?").white().bold()
    );
    if v.bits.is_some() {
        output.push_str(&format!(" │ {} bits", count(v.bits).bright_yellow()));
    }
    output
}

fn format_schedule_rejected(v: &EventVisitor) -> String {
    format!(
        "{} Schedule rejected │ expected {} bits │ got {}",
        "✗".bright_red().bold(),
        count(v.expected).bright_yellow(),
        count(v.actual).bright_red(),
    )
}

fn format_score_line(v: &EventVisitor, label: &str, marker: String) -> String {
    let hard = v.hard.unwrap_or(0);
    let soft = v.soft.unwrap_or(0);
    let score = format!("{}hard/{}soft", hard, soft);
    let score = if hard > 0 {
        score.bright_red().to_string()
    } else {
        score.bright_green().to_string()
    };

    format!(
        "{} {} │ {} │ cost {}",
        marker,
        label,
        score,
        v.cost.as_deref().unwrap_or("N/A").white().bold()
    )
}
