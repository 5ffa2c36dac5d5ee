use ef_diagnostic::diagnostic::domain::{
    CapacityId, Cluster, DiagnosticError, InterventionStatus, Lever, Ratings,
};
use ef_diagnostic::diagnostic::scoring::{recommend, Recommendation, ScoredCapacity};
use ef_diagnostic::diagnostic::{DiagnosticCatalog, DiagnosticEngine};

fn full_ratings(value: u8) -> Ratings {
    let mut ratings = Ratings::new();
    for capacity in CapacityId::ordered() {
        ratings.set(capacity, value).expect("rating in range");
    }
    ratings
}

fn scored_with_gap(capacity: CapacityId, missing_lever: Lever) -> ScoredCapacity {
    ScoredCapacity {
        capacity,
        rating: 3,
        levers: Vec::new(),
        missing_lever,
    }
}

#[test]
fn standard_catalog_tables_are_consistent() {
    let catalog = DiagnosticCatalog::standard();

    assert_eq!(catalog.capacities().len(), CapacityId::COUNT);
    for capacity in CapacityId::ordered() {
        let profile = catalog.profile(capacity).expect("capacity profiled");
        assert_eq!(profile.id, capacity);
        assert_eq!(catalog.interventions_for(capacity).len(), 6);
        for lever in Lever::ordered() {
            assert_eq!(catalog.interventions_for_lever(capacity, lever).len(), 2);
        }
    }

    // The four display clusters partition the catalog without gaps.
    let clustered: Vec<CapacityId> = Cluster::ordered()
        .into_iter()
        .flat_map(|cluster| {
            let members = catalog.capacities_in_cluster(cluster);
            assert!(!members.is_empty(), "cluster {:?} is empty", cluster);
            members.into_iter().map(|profile| profile.id)
        })
        .collect();
    assert_eq!(clustered, CapacityId::ordered());

    assert_eq!(catalog.themes().len(), 6);
    for theme in catalog.themes() {
        for (capacity, intervention_ids) in &theme.map {
            let known = catalog.interventions_for(*capacity);
            for id in intervention_ids {
                assert!(
                    known.iter().any(|template| template.id == *id),
                    "theme '{}' references unknown intervention '{}'",
                    theme.title,
                    id
                );
            }
        }
    }
}

#[test]
fn weakest_three_are_the_lowest_rated() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut ratings = full_ratings(5);
    ratings
        .set(CapacityId::SustainedAttention, 2)
        .expect("rating in range");
    ratings
        .set(CapacityId::WorkingMemory, 3)
        .expect("rating in range");
    ratings
        .set(CapacityId::Organization, 3)
        .expect("rating in range");

    let weakest: Vec<CapacityId> = engine
        .select_weakest(&ratings)
        .into_iter()
        .map(|profile| profile.id)
        .collect();

    // Organization precedes Working Memory in catalog order, so it wins
    // the 3/3 tie.
    assert_eq!(
        weakest,
        vec![
            CapacityId::SustainedAttention,
            CapacityId::Organization,
            CapacityId::WorkingMemory,
        ]
    );
}

#[test]
fn weakest_ties_resolve_in_catalog_order() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let weakest: Vec<CapacityId> = engine
        .select_weakest(&full_ratings(5))
        .into_iter()
        .map(|profile| profile.id)
        .collect();

    assert_eq!(
        weakest,
        vec![
            CapacityId::ResponseInhibition,
            CapacityId::EmotionalRegulation,
            CapacityId::SustainedAttention,
        ]
    );
}

#[test]
fn weakest_selection_is_best_effort_on_partial_input() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut ratings = Ratings::new();
    ratings.set(CapacityId::Planning, 4).expect("rating in range");
    ratings
        .set(CapacityId::Metacognition, 2)
        .expect("rating in range");

    let weakest: Vec<CapacityId> = engine
        .select_weakest(&ratings)
        .into_iter()
        .map(|profile| profile.id)
        .collect();

    assert_eq!(weakest, vec![CapacityId::Metacognition, CapacityId::Planning]);
}

#[test]
fn lever_percentages_snap_to_halves() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut status = InterventionStatus::new();
    status.adopt("sa_meditation");

    let scored = engine
        .score_capacity(CapacityId::SustainedAttention, 4, &status)
        .expect("capacity has interventions");

    let training = scored.lever(Lever::Training).expect("training scored");
    assert_eq!(training.implemented, 1);
    assert_eq!(training.total, 2);
    assert_eq!(training.percentage, 0.5);

    let environment = scored.lever(Lever::Environment).expect("environment scored");
    assert_eq!(environment.percentage, 0.0);
    let accountability = scored
        .lever(Lever::Accountability)
        .expect("accountability scored");
    assert_eq!(accountability.percentage, 0.0);

    for score in &scored.levers {
        assert!(
            [0.0, 0.5, 1.0].contains(&score.percentage),
            "{:?} percentage {} off the half-step grid",
            score.lever,
            score.percentage
        );
    }

    // Environment and accountability tie at zero; environment comes
    // first in priority order.
    assert_eq!(scored.missing_lever, Lever::Environment);
}

#[test]
fn missing_lever_tie_prefers_training() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let scored = engine
        .score_capacity(CapacityId::Planning, 3, &InterventionStatus::new())
        .expect("capacity has interventions");

    assert_eq!(scored.missing_lever, Lever::Training);
}

#[test]
fn recommendation_decision_table() {
    use CapacityId::{EmotionalRegulation, ResponseInhibition, SustainedAttention};

    let coach_profile = [
        scored_with_gap(ResponseInhibition, Lever::Environment),
        scored_with_gap(EmotionalRegulation, Lever::Environment),
        scored_with_gap(SustainedAttention, Lever::Training),
    ];
    assert_eq!(recommend(&coach_profile), Recommendation::CoachOnly);

    let mixed_profile = [
        scored_with_gap(ResponseInhibition, Lever::Accountability),
        scored_with_gap(EmotionalRegulation, Lever::Environment),
        scored_with_gap(SustainedAttention, Lever::Training),
    ];
    assert_eq!(recommend(&mixed_profile), Recommendation::FullSystem);

    let accountability_profile = [
        scored_with_gap(ResponseInhibition, Lever::Environment),
        scored_with_gap(EmotionalRegulation, Lever::Environment),
        scored_with_gap(SustainedAttention, Lever::Accountability),
    ];
    assert_eq!(recommend(&accountability_profile), Recommendation::FullSystem);
}

#[test]
fn compute_results_rejects_incomplete_ratings() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut ratings = Ratings::new();
    ratings
        .set(CapacityId::ResponseInhibition, 2)
        .expect("rating in range");
    ratings
        .set(CapacityId::EmotionalRegulation, 3)
        .expect("rating in range");
    ratings
        .set(CapacityId::TimeAwareness, 6)
        .expect("rating in range");

    let err = engine
        .compute_results(&ratings, &InterventionStatus::new())
        .expect_err("partial input rejected");

    match err {
        DiagnosticError::IncompleteRatings { rated, required } => {
            assert_eq!(rated, 3);
            assert_eq!(required, CapacityId::COUNT);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn ratings_reject_out_of_scale_values() {
    let mut ratings = Ratings::new();
    let err = ratings
        .set(CapacityId::Planning, 11)
        .expect_err("11 is off the scale");
    assert!(matches!(
        err,
        DiagnosticError::RatingOutOfRange {
            capacity: CapacityId::Planning,
            value: 11,
        }
    ));
    assert!(ratings.set(CapacityId::Planning, 0).is_err());
    assert!(ratings.set(CapacityId::Planning, 1).is_ok());
    assert!(ratings.set(CapacityId::Planning, 10).is_ok());
}

#[test]
fn missing_intervention_table_aborts_scoring() {
    use ef_diagnostic::diagnostic::CapacityProfile;

    let catalog = DiagnosticCatalog::new(
        vec![CapacityProfile {
            id: CapacityId::ResponseInhibition,
            cluster: Cluster::InhibitionAndRegulation,
            question: "When something tempting appears, how often do you pause before acting?",
            low_label: "I act before thinking",
            high_label: "I pause and choose",
        }],
        Vec::new(),
        Vec::new(),
    );
    let engine = DiagnosticEngine::new(&catalog);

    let err = engine
        .score_capacity(CapacityId::ResponseInhibition, 5, &InterventionStatus::new())
        .expect_err("empty intervention table is fatal");
    assert!(matches!(
        err,
        DiagnosticError::MissingInterventionCatalog(CapacityId::ResponseInhibition)
    ));
}

#[test]
fn results_are_deterministic() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut ratings = full_ratings(6);
    ratings
        .set(CapacityId::TaskInitiation, 2)
        .expect("rating in range");
    ratings
        .set(CapacityId::TimeAwareness, 3)
        .expect("rating in range");
    let mut status = InterventionStatus::new();
    status.adopt("ti_activation");
    status.adopt("ta_buffer");
    status.adopt("ta_deadline");

    let first = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");
    let second = engine
        .compute_results(&ratings, &status)
        .expect("complete input scores");

    let first_json = serde_json::to_string(&first).expect("outcome serializes");
    let second_json = serde_json::to_string(&second).expect("outcome serializes");
    assert_eq!(first_json, second_json);
}

#[test]
fn end_to_end_untreated_profile() {
    let catalog = DiagnosticCatalog::standard();
    let engine = DiagnosticEngine::new(&catalog);

    let mut ratings = Ratings::new();
    let scores = [
        (CapacityId::ResponseInhibition, 2),
        (CapacityId::EmotionalRegulation, 3),
        (CapacityId::SustainedAttention, 8),
        (CapacityId::TaskInitiation, 9),
        (CapacityId::GoalPersistence, 7),
        (CapacityId::Planning, 8),
        (CapacityId::Organization, 9),
        (CapacityId::TimeAwareness, 7),
        (CapacityId::WorkingMemory, 8),
        (CapacityId::CognitiveFlexibility, 9),
        (CapacityId::Metacognition, 7),
    ];
    for (capacity, value) in scores {
        ratings.set(capacity, value).expect("rating in range");
    }

    let outcome = engine
        .compute_results(&ratings, &InterventionStatus::new())
        .expect("complete input scores");

    // Goal-Directed Persistence wins the three-way 7/7/7 tie for third
    // place by catalog order.
    let weakest: Vec<CapacityId> = outcome.weakest.iter().map(|s| s.capacity).collect();
    assert_eq!(
        weakest,
        vec![
            CapacityId::ResponseInhibition,
            CapacityId::EmotionalRegulation,
            CapacityId::GoalPersistence,
        ]
    );

    for scored in &outcome.weakest {
        for score in &scored.levers {
            assert_eq!(score.implemented, 0);
            assert_eq!(score.percentage, 0.0);
        }
        assert_eq!(scored.missing_lever, Lever::Training);
    }

    // No environment gaps at all, so the lighter tier never triggers.
    assert_eq!(outcome.recommendation, Recommendation::FullSystem);

    let titles: Vec<&str> = outcome.quick_wins.iter().map(|win| win.title).collect();
    assert_eq!(
        titles,
        vec![
            "Consistent Sleep (7–9 Hours)",
            "Weekly Accountability Check-In",
            "Body-Doubling & Social Work",
            "Regular Exercise (3× per week)",
        ]
    );
}
