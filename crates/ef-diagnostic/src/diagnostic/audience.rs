use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Who the diagnostic is being filled out for. Parent proxies see
/// first-person copy rewritten to third person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    #[default]
    Student,
    Parent,
}

/// Rewrites the leading first-person opener of catalog copy for the
/// parent-proxy framing. Longest pattern first, so "I've" never
/// degrades into "My child've".
pub fn rephrase_for_audience(text: &str, audience: Audience) -> Cow<'_, str> {
    if audience == Audience::Student {
        return Cow::Borrowed(text);
    }

    if let Some(rest) = text.strip_prefix("I've ") {
        Cow::Owned(format!("My child has {rest}"))
    } else if let Some(rest) = text.strip_prefix("I'") {
        Cow::Owned(format!("My child'{rest}"))
    } else if let Some(rest) = text.strip_prefix("I ") {
        Cow::Owned(format!("My child {rest}"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_copy_passes_through_unchanged() {
        let text = "I can stop myself from acting on impulse.";
        assert_eq!(rephrase_for_audience(text, Audience::Student), text);
    }

    #[test]
    fn parent_framing_rewrites_plain_opener() {
        // Literal substitution only; no verb conjugation.
        assert_eq!(
            rephrase_for_audience("I work with a therapist or counselor", Audience::Parent),
            "My child work with a therapist or counselor"
        );
    }

    #[test]
    fn parent_framing_rewrites_contraction_opener() {
        assert_eq!(
            rephrase_for_audience("I'll start at 9am", Audience::Parent),
            "My child'll start at 9am"
        );
    }

    #[test]
    fn parent_framing_rewrites_perfect_tense_opener() {
        assert_eq!(
            rephrase_for_audience(
                "I've broken big goals into smaller milestones",
                Audience::Parent
            ),
            "My child has broken big goals into smaller milestones"
        );
    }

    #[test]
    fn mid_sentence_first_person_is_left_alone() {
        assert_eq!(
            rephrase_for_audience("Someone else manages my screen time", Audience::Parent),
            "Someone else manages my screen time"
        );
    }
}
