use super::domain::{CapacityId, Cluster, Lever};

/// Display profile for one capacity: the assessment question and the
/// anchor labels shown at either end of the 1-10 scale.
#[derive(Debug, Clone)]
pub struct CapacityProfile {
    pub id: CapacityId,
    pub cluster: Cluster,
    pub question: &'static str,
    pub low_label: &'static str,
    pub high_label: &'static str,
}

/// A single concrete action statement under one capacity and one lever.
#[derive(Debug, Clone)]
pub struct InterventionTemplate {
    pub id: &'static str,
    pub capacity: CapacityId,
    pub lever: Lever,
    pub text: &'static str,
}

/// A cross-cutting habit that satisfies interventions across several
/// capacities at once.
#[derive(Debug, Clone)]
pub struct QuickWinTheme {
    pub title: &'static str,
    pub description: &'static str,
    pub map: Vec<(CapacityId, Vec<&'static str>)>,
}

impl QuickWinTheme {
    pub fn interventions_for(&self, capacity: CapacityId) -> Option<&[&'static str]> {
        self.map
            .iter()
            .find(|(id, _)| *id == capacity)
            .map(|(_, ids)| ids.as_slice())
    }
}

/// Read-only configuration table for the diagnostic: 11 capacities, 66
/// interventions (2 per lever per capacity), 6 quick-win themes. Built
/// once and never mutated.
#[derive(Debug)]
pub struct DiagnosticCatalog {
    capacities: Vec<CapacityProfile>,
    interventions: Vec<InterventionTemplate>,
    themes: Vec<QuickWinTheme>,
}

impl DiagnosticCatalog {
    pub fn standard() -> Self {
        Self {
            capacities: standard_capacity_profiles(),
            interventions: standard_intervention_templates(),
            themes: standard_quick_win_themes(),
        }
    }

    /// Assemble a catalog from caller-supplied tables. The standard
    /// catalog covers production; custom tables exist so the engine can
    /// be driven against alternative configuration.
    pub fn new(
        capacities: Vec<CapacityProfile>,
        interventions: Vec<InterventionTemplate>,
        themes: Vec<QuickWinTheme>,
    ) -> Self {
        Self {
            capacities,
            interventions,
            themes,
        }
    }

    pub fn capacities(&self) -> &[CapacityProfile] {
        &self.capacities
    }

    pub fn profile(&self, id: CapacityId) -> Option<&CapacityProfile> {
        self.capacities.iter().find(|profile| profile.id == id)
    }

    pub fn capacities_in_cluster(&self, cluster: Cluster) -> Vec<&CapacityProfile> {
        self.capacities
            .iter()
            .filter(|profile| profile.cluster == cluster)
            .collect()
    }

    pub fn interventions_for(&self, capacity: CapacityId) -> Vec<&InterventionTemplate> {
        self.interventions
            .iter()
            .filter(|template| template.capacity == capacity)
            .collect()
    }

    pub fn interventions_for_lever(
        &self,
        capacity: CapacityId,
        lever: Lever,
    ) -> Vec<&InterventionTemplate> {
        self.interventions
            .iter()
            .filter(|template| template.capacity == capacity && template.lever == lever)
            .collect()
    }

    pub fn themes(&self) -> &[QuickWinTheme] {
        &self.themes
    }
}

fn standard_capacity_profiles() -> Vec<CapacityProfile> {
    vec![
        CapacityProfile {
            id: CapacityId::ResponseInhibition,
            cluster: Cluster::InhibitionAndRegulation,
            question: "I can stop myself from acting on impulse, even when I really want to do something.",
            low_label: "I act before thinking",
            high_label: "I pause and choose",
        },
        CapacityProfile {
            id: CapacityId::EmotionalRegulation,
            cluster: Cluster::InhibitionAndRegulation,
            question: "I can manage my emotions so they don't derail my work or decisions.",
            low_label: "Emotions overwhelm me",
            high_label: "I stay steady",
        },
        CapacityProfile {
            id: CapacityId::SustainedAttention,
            cluster: Cluster::InhibitionAndRegulation,
            question: "I can maintain focus on a task until it's done, without drifting to other things.",
            low_label: "I constantly drift",
            high_label: "I stay locked in",
        },
        CapacityProfile {
            id: CapacityId::TaskInitiation,
            cluster: Cluster::InitiationAndPersistence,
            question: "I can start tasks when I intend to, without needing external pressure or deadlines.",
            low_label: "I wait until last minute",
            high_label: "I start when planned",
        },
        CapacityProfile {
            id: CapacityId::GoalPersistence,
            cluster: Cluster::InitiationAndPersistence,
            question: "I follow through on long-term goals even when motivation fades or obstacles appear.",
            low_label: "I abandon goals",
            high_label: "I persist through difficulty",
        },
        CapacityProfile {
            id: CapacityId::Planning,
            cluster: Cluster::PlanningAndOrganization,
            question: "I can create realistic plans and identify what's most important to do first.",
            low_label: "I wing it",
            high_label: "I plan systematically",
        },
        CapacityProfile {
            id: CapacityId::Organization,
            cluster: Cluster::PlanningAndOrganization,
            question: "I keep my materials, information, and commitments organized and accessible.",
            low_label: "Everything is scattered",
            high_label: "I have reliable systems",
        },
        CapacityProfile {
            id: CapacityId::TimeAwareness,
            cluster: Cluster::PlanningAndOrganization,
            question: "I accurately estimate how long things take and manage my time accordingly.",
            low_label: "Time slips away",
            high_label: "I track time well",
        },
        CapacityProfile {
            id: CapacityId::WorkingMemory,
            cluster: Cluster::FlexibilityAndMetacognition,
            question: "I can hold multiple pieces of information in mind while working with them.",
            low_label: "I forget mid-task",
            high_label: "I hold it all",
        },
        CapacityProfile {
            id: CapacityId::CognitiveFlexibility,
            cluster: Cluster::FlexibilityAndMetacognition,
            question: "I can shift strategies when something isn't working and adapt to changes.",
            low_label: "I get stuck",
            high_label: "I adapt easily",
        },
        CapacityProfile {
            id: CapacityId::Metacognition,
            cluster: Cluster::FlexibilityAndMetacognition,
            question: "I can observe my own thinking patterns and adjust my approach accordingly.",
            low_label: "I don't notice patterns",
            high_label: "I self-correct",
        },
    ]
}

fn standard_intervention_templates() -> Vec<InterventionTemplate> {
    use CapacityId::*;
    use Lever::*;

    let entry = |id, capacity, lever, text| InterventionTemplate {
        id,
        capacity,
        lever,
        text,
    };

    vec![
        entry("ri_implementation", ResponseInhibition, Training, "I have a pre-decided plan for impulse moments — 'When I feel the urge to X, I will do Y instead'"),
        entry("ri_mindfulness", ResponseInhibition, Training, "I practice deliberate pausing — noticing an urge before acting on it"),
        entry("ri_sleep", ResponseInhibition, Environment, "I get consistent sleep (7–9 hours, same wake time daily)"),
        entry("ri_friction", ResponseInhibition, Environment, "I've made temptations harder to reach — apps deleted, phone in another room, distractions physically removed"),
        entry("ri_blocker", ResponseInhibition, Accountability, "Someone else manages my screen time limits or app restrictions"),
        entry("ri_body_double", ResponseInhibition, Accountability, "I work with other people in the room so I'm less likely to go off track"),
        entry("er_reappraisal", EmotionalRegulation, Training, "I reframe stressful situations before reacting — asking 'what else could this mean?' rather than going with my first emotional read"),
        entry("er_labeling", EmotionalRegulation, Training, "I name my emotions precisely — 'frustrated' or 'overwhelmed,' not just 'stressed'"),
        entry("er_sleep", EmotionalRegulation, Environment, "I get consistent sleep (7–9 hours, same wake time daily)"),
        entry("er_exercise", EmotionalRegulation, Environment, "I exercise at least 3 times per week"),
        entry("er_checkin", EmotionalRegulation, Accountability, "I have regular check-ins with someone I trust about how I'm doing emotionally"),
        entry("er_therapist", EmotionalRegulation, Accountability, "I work with a therapist or counselor"),
        entry("sa_meditation", SustainedAttention, Training, "I practice focused-attention meditation — even 10 minutes a day trains the ability to hold focus"),
        entry("sa_pomodoro", SustainedAttention, Training, "I work in timed blocks with scheduled breaks (e.g., 25 or 50 minutes on, then rest)"),
        entry("sa_one_tab", SustainedAttention, Environment, "During focused work, I limit myself to one tab, one app, one task at a time"),
        entry("sa_nature", SustainedAttention, Environment, "I take 20-minute breaks outdoors or in green space — nature restores the ability to concentrate"),
        entry("sa_body_double", SustainedAttention, Accountability, "I work alongside other people (library, study partner, co-working) to stay on task"),
        entry("sa_timer", SustainedAttention, Accountability, "I use a visible timer and tell someone how many focused blocks I completed"),
        entry("ti_implementation", TaskInitiation, Training, "I pre-commit to exactly when and where I'll start — 'At 9am at my desk, I will open the document'"),
        entry("ti_temptation_bundle", TaskInitiation, Training, "I pair dreaded tasks with something I enjoy — a favorite playlist, a good drink, a comfortable spot"),
        entry("ti_activation", TaskInitiation, Environment, "I make starting as easy as possible — materials already out, browser tab already open, zero setup needed"),
        entry("ti_trigger", TaskInitiation, Environment, "I have a consistent start ritual — same place, same time, same first action"),
        entry("ti_start_time", TaskInitiation, Accountability, "I tell someone else exactly when I'm going to start, and they expect to hear from me"),
        entry("ti_daily_call", TaskInitiation, Accountability, "I have a daily planning call or check-in that creates a real start time"),
        entry("gp_woop", GoalPersistence, Training, "I picture the outcome I want, then immediately picture what's most likely to get in the way — this combination works better than positive thinking alone"),
        entry("gp_process", GoalPersistence, Training, "I set goals around actions I control ('write for 30 minutes') rather than outcomes I can't ('get an A')"),
        entry("gp_visible", GoalPersistence, Environment, "I track progress somewhere visible — a streak chart, a whiteboard, a checklist I can see daily"),
        entry("gp_milestones", GoalPersistence, Environment, "I've broken big goals into smaller milestones with their own deadlines"),
        entry("gp_commitment", GoalPersistence, Accountability, "I've made a commitment with real stakes — someone who follows up, a public promise, something I'd lose"),
        entry("gp_coach", GoalPersistence, Accountability, "I check in regularly with someone who asks what I committed to and whether I did it"),
        entry("pl_premortem", Planning, Training, "Before starting a plan, I ask: 'Imagine this has already failed — what went wrong?' This catches blind spots normal planning misses"),
        entry("pl_multiplier", Planning, Training, "I multiply my first time estimate by 1.5–2x — people almost always underestimate how long things take"),
        entry("pl_calendar", Planning, Environment, "I use a calendar with time-blocks, not just a to-do list — tasks get a specific slot or they don't happen"),
        entry("pl_daily", Planning, Environment, "I spend 5–10 minutes each morning reviewing what's ahead and deciding what matters most today"),
        entry("pl_review", Planning, Accountability, "Someone reviews my plans with me — not just what I intend to do, but whether the time math works"),
        entry("pl_weekly", Planning, Accountability, "I do a weekly review with another person: what got done, what didn't, what to adjust"),
        entry("or_reset", Organization, Training, "I do an end-of-day reset: clear the desk, process the inbox, close open loops"),
        entry("or_one_touch", Organization, Training, "I handle things once — decide on the spot rather than moving them to a different pile"),
        entry("or_single_inbox", Organization, Environment, "I have one single place where all new tasks, ideas, and info get captured"),
        entry("or_taxonomy", Organization, Environment, "I have a filing system I actually use — consistent folders, consistent names"),
        entry("or_audit", Organization, Accountability, "Someone periodically looks at my systems with me and helps me clean them up"),
        entry("or_checkin", Organization, Accountability, "I report on whether my systems are actually being maintained, not just whether they exist"),
        entry("ta_estimate", TimeAwareness, Training, "Before starting a task, I guess how long it will take — then I time it and compare. This calibrates my internal clock"),
        entry("ta_track", TimeAwareness, Training, "I track where my time actually goes each day, even roughly — most people are shocked by the gap between perception and reality"),
        entry("ta_visible_time", TimeAwareness, Environment, "I keep visible clocks and timers in my workspace so time doesn't become invisible"),
        entry("ta_buffer", TimeAwareness, Environment, "I schedule buffer time between commitments rather than stacking everything back-to-back"),
        entry("ta_shared_cal", TimeAwareness, Accountability, "I share my calendar with someone who can see how packed it actually is"),
        entry("ta_deadline", TimeAwareness, Accountability, "I tell someone else my deadlines and time estimates so I can't quietly ignore them"),
        entry("wm_external", WorkingMemory, Training, "I write things down immediately — if it's in my head, it's at risk. If it's on paper, it's safe"),
        entry("wm_chunking", WorkingMemory, Training, "I group related information into clusters rather than trying to remember individual pieces"),
        entry("wm_singletask", WorkingMemory, Environment, "I keep only one task visible at a time — one app, one document, one thing"),
        entry("wm_whiteboard", WorkingMemory, Environment, "I use a whiteboard or visible dashboard so active priorities aren't buried in my head"),
        entry("wm_retrieval", WorkingMemory, Accountability, "I test myself on what I'm supposed to remember rather than just re-reading it — recall beats review"),
        entry("wm_checkin", WorkingMemory, Accountability, "I regularly talk through what's on my plate with someone, so nothing slips through the cracks"),
        entry("cf_interleave", CognitiveFlexibility, Training, "I mix up types of practice rather than grinding one thing — alternating between different problems builds adaptability"),
        entry("cf_opposite", CognitiveFlexibility, Training, "I argue the opposite side of my own position before committing to it"),
        entry("cf_rotate", CognitiveFlexibility, Environment, "I change my setting or approach periodically — same routine too long creates rigidity"),
        entry("cf_novelty", CognitiveFlexibility, Environment, "I deliberately seek out unfamiliar perspectives — new people, different fields, methods I haven't tried"),
        entry("cf_cross", CognitiveFlexibility, Accountability, "I get feedback from people outside my usual world"),
        entry("cf_challenge", CognitiveFlexibility, Accountability, "I have someone who will push back on my thinking, not just agree with me"),
        entry("mc_calibration", Metacognition, Training, "Before a task, I predict how I'll do — then I compare the prediction to what actually happened. This builds self-awareness fast"),
        entry("mc_reflection", Metacognition, Training, "I do a brief daily review: what worked, what didn't, what I'd do differently"),
        entry("mc_journal", Metacognition, Environment, "I use a structured template for reflection — not freeform journaling, but specific prompts that force honest answers"),
        entry("mc_data", Metacognition, Environment, "I keep a simple log of what I committed to vs. what I completed — the pattern tells me more than any single day"),
        entry("mc_debrief", Metacognition, Accountability, "I debrief regularly with someone who asks hard questions about my process, not just my results"),
        entry("mc_feedback", Metacognition, Accountability, "I ask people who will be honest to tell me what I'm not seeing about myself"),
    ]
}

fn standard_quick_win_themes() -> Vec<QuickWinTheme> {
    use CapacityId::*;

    vec![
        QuickWinTheme {
            title: "Weekly Accountability Check-In",
            description: "A weekly meeting with a coach, partner, or VA to review wins, losses, learnings, and commitments. The single most powerful habit for preventing long-term collapse.",
            map: vec![
                (GoalPersistence, vec!["gp_coach", "gp_commitment"]),
                (Planning, vec!["pl_review", "pl_weekly"]),
                (Organization, vec!["or_audit", "or_checkin"]),
                (Metacognition, vec!["mc_debrief", "mc_feedback"]),
                (TimeAwareness, vec!["ta_deadline", "ta_shared_cal"]),
            ],
        },
        QuickWinTheme {
            title: "Daily Planning with a Partner",
            description: "A 10-minute daily session where every task gets a calendar slot. Dramatically more effective with another person present — even a brief call.",
            map: vec![
                (TaskInitiation, vec!["ti_daily_call", "ti_start_time"]),
                (Planning, vec!["pl_calendar", "pl_daily"]),
                (TimeAwareness, vec!["ta_estimate", "ta_track"]),
            ],
        },
        QuickWinTheme {
            title: "Consistent Sleep (7–9 Hours)",
            description: "Fixed wake time, morning light, cool dark room. The highest-leverage biological intervention for executive function across the board.",
            map: vec![
                (ResponseInhibition, vec!["ri_sleep"]),
                (EmotionalRegulation, vec!["er_sleep"]),
            ],
        },
        QuickWinTheme {
            title: "Body-Doubling & Social Work",
            description: "Working alongside other people — library, co-working, study partner. Social presence creates implicit accountability without effort.",
            map: vec![
                (ResponseInhibition, vec!["ri_body_double"]),
                (SustainedAttention, vec!["sa_body_double"]),
            ],
        },
        QuickWinTheme {
            title: "Structured Daily Reflection",
            description: "3–10 minutes of written review: what worked, what didn't, what to change. Builds self-awareness and prevents shame from accumulating.",
            map: vec![(
                Metacognition,
                vec!["mc_reflection", "mc_journal", "mc_calibration", "mc_data"],
            )],
        },
        QuickWinTheme {
            title: "Regular Exercise (3× per week)",
            description: "One of the most robust cognitive enhancers in the literature. Improves working memory, attention, emotional regulation, and mood.",
            map: vec![
                (EmotionalRegulation, vec!["er_exercise"]),
                (SustainedAttention, vec!["sa_nature"]),
            ],
        },
    ]
}
