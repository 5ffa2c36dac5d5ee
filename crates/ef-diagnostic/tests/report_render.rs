use chrono::NaiveDate;
use ef_diagnostic::diagnostic::audience::Audience;
use ef_diagnostic::diagnostic::domain::{CapacityId, InterventionStatus, Ratings};
use ef_diagnostic::diagnostic::{
    DiagnosticCatalog, DiagnosticEngine, ReportInput, ReportRenderer,
};

fn sample_ratings() -> Ratings {
    let mut ratings = Ratings::new();
    let scores = [
        (CapacityId::ResponseInhibition, 3),
        (CapacityId::EmotionalRegulation, 5),
        (CapacityId::SustainedAttention, 2),
        (CapacityId::TaskInitiation, 4),
        (CapacityId::GoalPersistence, 6),
        (CapacityId::Planning, 7),
        (CapacityId::Organization, 8),
        (CapacityId::TimeAwareness, 5),
        (CapacityId::WorkingMemory, 6),
        (CapacityId::CognitiveFlexibility, 9),
        (CapacityId::Metacognition, 7),
    ];
    for (capacity, value) in scores {
        ratings.set(capacity, value).expect("rating in range");
    }
    ratings
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid report date")
}

#[test]
fn render_produces_a_multi_section_pdf() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let ratings = sample_ratings();
    let status = InterventionStatus::new();
    let outcome = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");

    let renderer = ReportRenderer::new(&catalog);
    let report = renderer
        .render(&ReportInput {
            display_name: Some("Avery Parker"),
            generated_on: report_date(),
            audience: Audience::Student,
            ratings: &ratings,
            outcome: &outcome,
            status: &status,
        })
        .expect("report renders");

    assert!(report.bytes.starts_with(b"%PDF"));
    // Cover, growth areas, action plan, and complete results each open
    // a page of their own; growth detail may spill onto more.
    assert!(report.pages >= 4, "only {} pages rendered", report.pages);
}

#[test]
fn rendering_is_byte_for_byte_deterministic() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let ratings = sample_ratings();
    let mut status = InterventionStatus::new();
    status.adopt("sa_pomodoro");
    status.adopt("ri_sleep");
    let outcome = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");

    let renderer = ReportRenderer::new(&catalog);
    let input = ReportInput {
        display_name: None,
        generated_on: report_date(),
        audience: Audience::Parent,
        ratings: &ratings,
        outcome: &outcome,
        status: &status,
    };

    let first = renderer.render(&input).expect("report renders");
    // Cross a wall-clock second boundary between renders; document
    // metadata must come from the report date, not the clock.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let second = renderer.render(&input).expect("report renders");

    assert_eq!(first.pages, second.pages);
    assert_eq!(first.bytes, second.bytes);
}

#[test]
fn document_dates_are_pinned_to_the_report_date() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let ratings = sample_ratings();
    let status = InterventionStatus::new();
    let outcome = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");

    let report = ReportRenderer::new(&catalog)
        .render(&ReportInput {
            display_name: None,
            generated_on: report_date(),
            audience: Audience::Student,
            ratings: &ratings,
            outcome: &outcome,
            status: &status,
        })
        .expect("report renders");

    // PDF date literal for 2025-11-03 midnight UTC.
    let pinned = b"D:20251103000000";
    assert!(
        report
            .bytes
            .windows(pinned.len())
            .any(|window| window == pinned),
        "creation/mod dates not pinned to the report date"
    );
}

#[test]
fn render_handles_an_empty_action_plan() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);
    let ratings = sample_ratings();

    // Everything adopted: no unadopted interventions, no quick wins.
    let mut status = InterventionStatus::new();
    for capacity in CapacityId::ordered() {
        for template in catalog.interventions_for(capacity) {
            status.adopt(template.id);
        }
    }
    let outcome = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");
    assert!(outcome.quick_wins.is_empty());

    let renderer = ReportRenderer::new(&catalog);
    let report = renderer
        .render(&ReportInput {
            display_name: Some("Jordan"),
            generated_on: report_date(),
            audience: Audience::Student,
            ratings: &ratings,
            outcome: &outcome,
            status: &status,
        })
        .expect("report renders");

    assert!(report.bytes.starts_with(b"%PDF"));
    assert!(report.pages >= 4);
}
