mod layout;
mod pages;
mod theme;

pub use theme::SeverityBand;

use super::audience::Audience;
use super::catalog::DiagnosticCatalog;
use super::domain::{InterventionStatus, Ratings};
use super::scoring::DiagnosticOutcome;
use chrono::NaiveDate;
use layout::PageComposer;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("pdf backend failure: {0}")]
    Backend(#[from] printpdf::Error),
}

/// Everything the renderer needs. The generation date is an explicit
/// input so identical inputs always produce identical bytes.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub display_name: Option<&'a str>,
    pub generated_on: NaiveDate,
    pub audience: Audience,
    pub ratings: &'a Ratings,
    pub outcome: &'a DiagnosticOutcome,
    pub status: &'a InterventionStatus,
}

/// Finished document plus its page count.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Lays the scoring outcome out as the fixed 4-section profile report:
/// cover, growth-area detail, quick-win action plan, and complete
/// scores with the tier recommendation.
pub struct ReportRenderer<'a> {
    catalog: &'a DiagnosticCatalog,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(catalog: &'a DiagnosticCatalog) -> Self {
        Self { catalog }
    }

    pub fn render(&self, input: &ReportInput<'_>) -> Result<RenderedReport, ReportError> {
        let mut composer = PageComposer::new("Executive Function Profile", input.generated_on)?;

        pages::cover(&composer, self.catalog, input);
        composer.new_section_page();
        pages::growth_areas(&mut composer, self.catalog, input);
        composer.next_section();
        pages::action_plan(&mut composer, input);
        composer.next_section();
        pages::full_scores(&mut composer, self.catalog, input);
        composer.footer();

        let pages = composer.pages();
        let bytes = composer.finish()?;
        Ok(RenderedReport { bytes, pages })
    }
}

/// Download filename for a rendered report, whitespace collapsed to
/// hyphens.
pub fn report_file_name(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.trim().is_empty() => {
            let slug = name.split_whitespace().collect::<Vec<_>>().join("-");
            format!("Execution-Profile-{slug}.pdf")
        }
        _ => "Execution-Profile.pdf".to_owned(),
    }
}
