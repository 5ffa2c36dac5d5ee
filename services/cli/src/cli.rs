use crate::commands::{run_report, run_sample, run_score, ReportArgs, SampleArgs, ScoreArgs};
use clap::{Parser, Subcommand};
use ef_diagnostic::config::AppConfig;
use ef_diagnostic::error::AppError;
use ef_diagnostic::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Whetstone Execution Profiler",
    about = "Score executive function self-assessments and render profile reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a completed assessment and print the diagnostic outcome as JSON
    Score(ScoreArgs),
    /// Render the full PDF profile report for a completed assessment
    Report(ReportArgs),
    /// Write a sample assessment input file to fill in
    Sample(SampleArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Report(args) => run_report(args, &config),
        Command::Sample(args) => run_sample(args),
    }
}
