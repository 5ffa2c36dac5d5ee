use super::super::audience::rephrase_for_audience;
use super::super::catalog::{CapacityProfile, DiagnosticCatalog};
use super::super::domain::{Lever, Ratings};
use super::super::scoring::Recommendation;
use super::layout::{self, PageComposer, CONTENT_WIDTH, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use super::theme::{
    SeverityBand, Tone, AMBER, BLACK, BODY, DARK, GOLD, GRAY, GREEN, GREEN_BG, LIGHT, PAPER, RULE,
    WHITE,
};
use super::ReportInput;

/// All 11 capacities with their ratings, ascending; the stable sort
/// keeps catalog order on ties.
fn capacities_by_rating<'a>(
    catalog: &'a DiagnosticCatalog,
    ratings: &Ratings,
) -> Vec<(&'a CapacityProfile, u8)> {
    let mut all: Vec<(&CapacityProfile, u8)> = catalog
        .capacities()
        .iter()
        .map(|profile| (profile, ratings.get(profile.id).unwrap_or(0)))
        .collect();
    all.sort_by_key(|(_, rating)| *rating);
    all
}

pub(crate) fn cover(composer: &PageComposer, catalog: &DiagnosticCatalog, input: &ReportInput<'_>) {
    composer.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, DARK);

    composer.text("WHETSTONE", 11.0, true, MARGIN, 30.0, Tone::new(180, 180, 180));
    composer.text(
        "|  The Execution System",
        11.0,
        false,
        MARGIN + 30.0,
        30.0,
        Tone::new(100, 100, 100),
    );
    composer.line(MARGIN, 40.0, MARGIN + 50.0, 40.0, GOLD, 0.8);

    composer.text("Executive Function", 34.0, true, MARGIN, 70.0, WHITE);
    composer.text("Profile", 34.0, true, MARGIN, 82.0, WHITE);

    // Single-line context: the cover truncates rather than wraps.
    let mut date_y = 100.0;
    if let Some(name) = input.display_name {
        let prepared = format!("Prepared for {}", layout::truncate_chars(name, 40));
        composer.text(&prepared, 16.0, false, MARGIN, 100.0, Tone::new(180, 180, 180));
        date_y = 110.0;
    }
    let date = input.generated_on.format("%B %-d, %Y").to_string();
    composer.text(&date, 11.0, false, MARGIN, date_y, Tone::new(120, 120, 120));

    composer.rect(MARGIN, 130.0, CONTENT_WIDTH, 38.0, Tone::new(30, 30, 30));
    let average = format!("{:.1}", input.ratings.average());
    composer.text(&average, 36.0, true, MARGIN + 12.0, 154.0, GOLD);
    composer.text(
        "/10 average across 11 executive capacities",
        10.0,
        false,
        MARGIN + 35.0,
        147.0,
        Tone::new(160, 160, 160),
    );
    composer.text(
        "This score reflects your self-assessment. It's a starting point, not a verdict.",
        9.0,
        false,
        MARGIN + 35.0,
        157.0,
        Tone::new(120, 120, 120),
    );

    composer.text(
        "YOUR CAPACITIES AT A GLANCE",
        9.0,
        false,
        MARGIN,
        188.0,
        Tone::new(100, 100, 100),
    );

    let track_width = CONTENT_WIDTH - 40.0;
    let mut bar_y = 195.0;
    for (profile, rating) in capacities_by_rating(catalog, input.ratings) {
        let tone = SeverityBand::for_rating(rating).tone();
        composer.text(
            profile.id.label(),
            8.0,
            false,
            MARGIN,
            bar_y,
            Tone::new(160, 160, 160),
        );
        composer.text(
            &rating.to_string(),
            8.0,
            true,
            PAGE_WIDTH - MARGIN - 5.0,
            bar_y,
            tone,
        );
        bar_y += 1.5;
        composer.bar(
            MARGIN,
            bar_y,
            track_width,
            2.5,
            f32::from(rating) / 10.0,
            tone,
            Tone::new(40, 40, 40),
        );
        bar_y += 7.0;
    }

    composer.text(
        "© Whetstone Advisory LLC  ·  hello@whetstoneadmissions.com  ·  Confidential",
        8.0,
        false,
        MARGIN,
        PAGE_HEIGHT - 10.0,
        Tone::new(80, 80, 80),
    );
}

pub(crate) fn growth_areas(
    composer: &mut PageComposer,
    catalog: &DiagnosticCatalog,
    input: &ReportInput<'_>,
) {
    composer.text("YOUR TOP GROWTH AREAS", 9.0, true, MARGIN, composer.y(), AMBER);
    composer.advance(4.0);
    composer.line(
        MARGIN,
        composer.y(),
        MARGIN + 40.0,
        composer.y(),
        AMBER,
        0.5,
    );
    composer.advance(8.0);
    composer.text("Where to Focus First", 18.0, true, MARGIN, composer.y(), BLACK);
    composer.advance(6.0);

    let intro = "These are the capacities where you scored lowest and have the most room to grow. \
                 For each one, we've identified what you're already doing and what's missing — \
                 along with the lever that will make the biggest difference.";
    let lines = composer.wrapped_text(
        intro,
        9.5,
        false,
        MARGIN,
        composer.y(),
        CONTENT_WIDTH,
        4.5,
        GRAY,
    );
    composer.advance(lines as f32 * 4.5 + 8.0);

    for (index, scored) in input.outcome.weakest.iter().enumerate() {
        composer.ensure_space(60.0);
        let band = SeverityBand::for_rating(scored.rating);

        // Header card for the capacity.
        composer.rect(MARGIN, composer.y(), CONTENT_WIDTH, 14.0, band.background());
        composer.text(
            &format!("{}. {}", index + 1, scored.capacity.label()),
            13.0,
            true,
            MARGIN + 4.0,
            composer.y() + 6.0,
            BLACK,
        );
        composer.text(
            &format!("{}/10", scored.rating),
            16.0,
            true,
            PAGE_WIDTH - MARGIN - 14.0,
            composer.y() + 7.0,
            band.tone(),
        );
        composer.text(
            band.label(),
            8.0,
            false,
            PAGE_WIDTH - MARGIN - 14.0,
            composer.y() + 12.0,
            GRAY,
        );
        composer.advance(18.0);

        // Lever adoption bars; the missing lever is called out.
        let bar_x = MARGIN + 50.0;
        let track_width = CONTENT_WIDTH - 60.0;
        for score in &scored.levers {
            let missing = score.lever == scored.missing_lever;
            let label_tone = if missing { band.tone() } else { GRAY };
            composer.text(
                score.lever.label(),
                8.5,
                missing,
                MARGIN + 2.0,
                composer.y(),
                label_tone,
            );
            composer.text(
                &format!("{}/{}", score.implemented, score.total),
                8.5,
                missing,
                MARGIN + 38.0,
                composer.y(),
                label_tone,
            );
            let fill_tone = if missing { band.tone() } else { GREEN };
            composer.bar(
                bar_x,
                composer.y() - 2.5,
                track_width,
                3.0,
                score.percentage,
                fill_tone,
                Tone::new(240, 240, 240),
            );
            if missing {
                composer.text(
                    "← biggest opportunity",
                    7.0,
                    false,
                    bar_x + score.percentage * track_width + 3.0,
                    composer.y(),
                    AMBER,
                );
            }
            composer.advance(7.0);
        }

        // Unadopted interventions, lever by lever in priority order.
        let unadopted: Vec<(Lever, &str)> = Lever::ordered()
            .into_iter()
            .flat_map(|lever| {
                catalog
                    .interventions_for_lever(scored.capacity, lever)
                    .into_iter()
                    .filter(|template| !input.status.is_adopted(template.id))
                    .map(move |template| (lever, template.text))
            })
            .collect();

        if !unadopted.is_empty() {
            composer.advance(2.0);
            composer.text(
                "Not yet implemented:",
                8.0,
                true,
                MARGIN + 2.0,
                composer.y(),
                AMBER,
            );
            composer.advance(5.0);
            for (lever, text) in unadopted {
                composer.ensure_space(10.0);
                let framed = rephrase_for_audience(text, input.audience);
                let lines = composer.wrapped_text(
                    &format!("-  {framed}"),
                    7.5,
                    false,
                    MARGIN + 4.0,
                    composer.y(),
                    CONTENT_WIDTH - 30.0,
                    3.5,
                    BODY,
                );
                composer.text(
                    &format!("({})", lever.label()),
                    6.5,
                    false,
                    PAGE_WIDTH - MARGIN - 22.0,
                    composer.y(),
                    LIGHT,
                );
                composer.advance(lines as f32 * 3.5 + 1.5);
            }
        }
        composer.advance(8.0);
    }
}

pub(crate) fn action_plan(composer: &mut PageComposer, input: &ReportInput<'_>) {
    composer.text(
        "YOUR QUICK-WIN ACTION PLAN",
        9.0,
        true,
        MARGIN,
        composer.y(),
        GREEN,
    );
    composer.advance(4.0);
    composer.line(
        MARGIN,
        composer.y(),
        MARGIN + 45.0,
        composer.y(),
        GREEN,
        0.5,
    );
    composer.advance(8.0);
    composer.text(
        "Maximum Impact, Minimum Changes",
        18.0,
        true,
        MARGIN,
        composer.y(),
        BLACK,
    );
    composer.advance(6.0);

    let intro = "You don't need to change everything. These are the highest-leverage moves \
                 available to you right now — single habits that improve multiple capacities \
                 simultaneously.";
    let lines = composer.wrapped_text(
        intro,
        9.5,
        false,
        MARGIN,
        composer.y(),
        CONTENT_WIDTH,
        4.5,
        GRAY,
    );
    composer.advance(lines as f32 * 4.5 + 10.0);

    let quick_wins = &input.outcome.quick_wins;
    if quick_wins.is_empty() {
        composer.text(
            "You're already implementing many cross-cutting practices. Nice work.",
            10.0,
            false,
            MARGIN,
            composer.y(),
            GRAY,
        );
        composer.advance(10.0);
    } else {
        for (index, win) in quick_wins.iter().enumerate() {
            composer.ensure_space(30.0);
            composer.rect(MARGIN, composer.y() - 2.0, CONTENT_WIDTH, 1.5, GREEN_BG);
            composer.text(
                &format!("{}. {}", index + 1, win.title),
                11.0,
                true,
                MARGIN,
                composer.y() + 5.0,
                BLACK,
            );
            composer.advance(10.0);
            let lines = composer.wrapped_text(
                win.description,
                8.5,
                false,
                MARGIN + 2.0,
                composer.y(),
                CONTENT_WIDTH - 4.0,
                4.0,
                BODY,
            );
            composer.advance(lines as f32 * 4.0 + 4.0);
            let helped = win
                .helped
                .iter()
                .map(|capacity| capacity.label())
                .collect::<Vec<_>>()
                .join(", ");
            let lines = composer.wrapped_text(
                &format!("Predicted to improve: {helped}"),
                8.0,
                true,
                MARGIN + 2.0,
                composer.y(),
                CONTENT_WIDTH - 4.0,
                4.0,
                GREEN,
            );
            composer.advance((lines.saturating_sub(1)) as f32 * 4.0 + 12.0);
        }
    }

    composer.ensure_space(35.0);
    composer.advance(5.0);
    composer.framed_rect(MARGIN, composer.y(), CONTENT_WIDTH, 30.0, PAPER, RULE);
    composer.text(
        "The Bottom Line",
        10.0,
        true,
        MARGIN + 5.0,
        composer.y() + 8.0,
        BLACK,
    );
    let bottom_line = if quick_wins.is_empty() {
        "Your interventions are well-distributed. The next step is ensuring consistency and \
         adding accountability structures."
            .to_owned()
    } else {
        let habit_count = quick_wins.len().min(3);
        format!(
            "By adopting just {habit_count} new habit{}, you can meaningfully improve {} of your \
             weakest capacities. You don't need a complete overhaul — you need the right {}.",
            if quick_wins.len() > 1 { "s" } else { "" },
            input.outcome.weakest.len(),
            if quick_wins.len() > 1 { "few moves" } else { "move" },
        )
    };
    composer.wrapped_text(
        &bottom_line,
        9.0,
        false,
        MARGIN + 5.0,
        composer.y() + 15.0,
        CONTENT_WIDTH - 10.0,
        4.0,
        BODY,
    );
    composer.advance(35.0);
}

pub(crate) fn full_scores(
    composer: &mut PageComposer,
    catalog: &DiagnosticCatalog,
    input: &ReportInput<'_>,
) {
    composer.text("COMPLETE RESULTS", 9.0, true, MARGIN, composer.y(), BODY);
    composer.advance(4.0);
    composer.line(
        MARGIN,
        composer.y(),
        MARGIN + 30.0,
        composer.y(),
        RULE,
        0.3,
    );
    composer.advance(8.0);
    composer.text("All 11 Capacities", 18.0, true, MARGIN, composer.y(), BLACK);
    composer.advance(10.0);

    let bar_x = MARGIN + 55.0;
    let track_width = CONTENT_WIDTH - 80.0;
    for (index, (profile, rating)) in capacities_by_rating(catalog, input.ratings)
        .into_iter()
        .enumerate()
    {
        composer.ensure_space(12.0);
        let band = SeverityBand::for_rating(rating);
        if index % 2 == 1 {
            composer.rect(MARGIN, composer.y() - 4.0, CONTENT_WIDTH, 10.0, PAPER);
        }
        composer.text(profile.id.label(), 9.0, false, MARGIN + 2.0, composer.y(), BLACK);

        composer.rect(
            PAGE_WIDTH - MARGIN - 26.0,
            composer.y() - 3.5,
            24.0,
            7.0,
            band.background(),
        );
        composer.text(
            &format!("{rating}/10"),
            8.5,
            true,
            PAGE_WIDTH - MARGIN - 22.0,
            composer.y() + 1.0,
            band.tone(),
        );

        let fraction = f32::from(rating) / 10.0;
        composer.bar(
            bar_x,
            composer.y() - 2.0,
            track_width,
            3.5,
            fraction,
            band.tone(),
            Tone::new(235, 235, 235),
        );
        composer.text(
            band.label(),
            7.0,
            false,
            bar_x + fraction * track_width + 3.0,
            composer.y(),
            LIGHT,
        );
        composer.advance(10.0);
    }

    composer.advance(10.0);
    composer.ensure_space(55.0);

    composer.rect(MARGIN, composer.y(), CONTENT_WIDTH, 48.0, DARK);
    composer.text(
        "Our Recommendation",
        12.0,
        true,
        MARGIN + 6.0,
        composer.y() + 10.0,
        GOLD,
    );
    let blurb = match input.outcome.recommendation {
        Recommendation::FullSystem => {
            "Based on your profile, you have accountability gaps across multiple capacities. The \
             Full Execution System is designed for exactly this: weekly 1:1 coaching, a dedicated \
             EA for daily planning, and structured failure-mode diagnostics."
        }
        Recommendation::CoachOnly => {
            "Your profile suggests the Coached Execution tier, focused on the accountability \
             lever through weekly coaching."
        }
    };
    composer.wrapped_text(
        blurb,
        9.5,
        false,
        MARGIN + 6.0,
        composer.y() + 18.0,
        CONTENT_WIDTH - 12.0,
        4.5,
        Tone::new(210, 210, 210),
    );
    composer.text(
        "Book a free 30-min call: calendly.com/cole-whetstone",
        9.0,
        true,
        MARGIN + 6.0,
        composer.y() + 38.0,
        GOLD,
    );
    composer.advance(56.0);

    composer.ensure_space(30.0);
    composer.text("What Happens Next", 11.0, true, MARGIN, composer.y(), BLACK);
    composer.advance(8.0);
    let steps = [
        "Schedule a free 30-minute call — we'll walk through your profile together.",
        "We'll confirm your bottlenecks, identify the right tier, and assess fit.",
        "If it's a match, we onboard you within 48 hours.",
    ];
    for (index, step) in steps.iter().enumerate() {
        composer.text(
            &format!("{}.", index + 1),
            9.0,
            true,
            MARGIN,
            composer.y(),
            AMBER,
        );
        composer.text(step, 9.0, false, MARGIN + 6.0, composer.y(), BODY);
        composer.advance(7.0);
    }
}
