use crate::input::DiagnosticInput;
use chrono::{Local, NaiveDate};
use clap::Args;
use ef_diagnostic::config::AppConfig;
use ef_diagnostic::diagnostic::{
    report_file_name, DiagnosticCatalog, DiagnosticEngine, ReportInput, ReportRenderer,
};
use ef_diagnostic::error::AppError;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a completed assessment (JSON, see `sample`)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Pretty-print the outcome JSON
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to a completed assessment (JSON, see `sample`)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Output path for the PDF (defaults to the configured output
    /// directory and a name derived from the assessee)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
    /// Report date (YYYY-MM-DD, defaults to REPORT_DATE or today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SampleArgs {
    /// Write the sample here instead of stdout
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let input = DiagnosticInput::from_path(&args.input)?;
    let ratings = input.validated_ratings()?;

    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let outcome = engine.compute_results(&ratings, &input.adopted)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string(&outcome)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let input = DiagnosticInput::from_path(&args.input)?;
    let ratings = input.validated_ratings()?;

    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let outcome = engine.compute_results(&ratings, &input.adopted)?;

    let generated_on = args
        .date
        .or(config.report.generated_on)
        .unwrap_or_else(|| Local::now().date_naive());

    let renderer = ReportRenderer::new(&catalog);
    let report = renderer.render(&ReportInput {
        display_name: input.name.as_deref(),
        generated_on,
        audience: input.audience,
        ratings: &ratings,
        outcome: &outcome,
        status: &input.adopted,
    })?;

    let out_path = args.out.unwrap_or_else(|| {
        config
            .report
            .output_dir
            .join(report_file_name(input.name.as_deref()))
    });
    fs::write(&out_path, &report.bytes)?;

    info!(
        path = %out_path.display(),
        pages = report.pages,
        recommendation = ?outcome.recommendation,
        "profile report written"
    );
    Ok(())
}

pub(crate) fn run_sample(args: SampleArgs) -> Result<(), AppError> {
    let sample = serde_json::to_string_pretty(&DiagnosticInput::sample())?;
    match args.out {
        Some(path) => {
            fs::write(&path, sample)?;
            info!(path = %path.display(), "sample assessment written");
        }
        None => println!("{sample}"),
    }
    Ok(())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
