pub mod audience;
mod catalog;
pub mod domain;
pub mod report;
pub mod scoring;

pub use catalog::{CapacityProfile, DiagnosticCatalog, InterventionTemplate, QuickWinTheme};
pub use report::{report_file_name, RenderedReport, ReportError, ReportInput, ReportRenderer};
pub use scoring::{DiagnosticEngine, DiagnosticOutcome};
