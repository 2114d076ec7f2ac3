use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use nurseforge::console;
use nurseforge::files::{load_model, load_schedule, FileError};
use nurseforge::Report;

#[derive(Parser)]
#[command(name = "nurseforge")]
#[command(version)]
#[command(about = "Scores nurse shift schedules", long_about = None)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the cost of a schedule file
    Score {
        /// Roster file (TOML or YAML)
        #[arg(short, long)]
        roster: PathBuf,

        /// Schedule file of 0/1 tokens separated by whitespace or commas
        #[arg(short, long)]
        schedule: PathBuf,

        /// Staffing constants file (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of weeks, overriding the configuration
        #[arg(short, long)]
        weeks: Option<usize>,

        /// Print the calendar and every diagnostic
        #[arg(long)]
        report: bool,
    },

    /// Validates a roster and prints the expected schedule length
    Check {
        /// Roster file (TOML or YAML)
        #[arg(short, long)]
        roster: PathBuf,

        /// Staffing constants file (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of weeks, overriding the configuration
        #[arg(short, long)]
        weeks: Option<usize>,
    },
}

fn score(
    roster: PathBuf,
    schedule: PathBuf,
    config: Option<PathBuf>,
    weeks: Option<usize>,
    report: bool,
) -> Result<(), FileError> {
    let model = load_model(roster, config.as_deref(), weeks)?;
    let schedule = load_schedule(schedule)?;

    if report {
        let report = Report::new(&model, &schedule)?;
        if io::stdout().is_terminal() {
            print!("{}", report.colored());
        } else {
            print!("{}", report);
        }
    } else {
        println!("{}", model.cost(&schedule)?);
    }
    Ok(())
}

fn check(roster: PathBuf, config: Option<PathBuf>, weeks: Option<usize>) -> Result<(), FileError> {
    let model = load_model(roster, config.as_deref(), weeks)?;
    println!(
        "{} staff, {} weeks, schedule length {}",
        model.staff_count(),
        model.weeks(),
        model.total_length().to_formatted_string(&Locale::en)
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    console::init_with_level(console::level_for_verbosity(cli.verbose));

    let result = match cli.command {
        Commands::Score {
            roster,
            schedule,
            config,
            weeks,
            report,
        } => score(roster, schedule, config, weeks, report),
        Commands::Check {
            roster,
            config,
            weeks,
        } => check(roster, config, weeks),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
