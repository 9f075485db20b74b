//! Coherence verdict parsing.
//!
//! The judge model is instructed to answer in an exact three-line format:
//!
//! ```text
//! RELATED: yes|no
//! TOPIC: <topic or "None">
//! P/S: <product/service or "None">
//! ```
//!
//! [`CoherenceVerdict::parse`] extracts a structured verdict from that
//! free-form response. It is total: truncated responses, missing colons,
//! extra lines, and empty input all degrade toward [`NotCoherent`] or the
//! `"None"` sentinel instead of failing the turn.
//!
//! [`NotCoherent`]: CoherenceVerdict::NotCoherent

use serde::Serialize;

/// Sentinel value the judge uses for "no topic" / "no suggestion".
pub const NONE_SENTINEL: &str = "None";

/// Result of judging a snapshot of recent conversation.
///
/// Ephemeral: produced and consumed within a single trigger evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CoherenceVerdict {
    /// The recent exchanges share one topic.
    Coherent {
        /// Free-text topic label, or the `"None"` sentinel.
        topic: String,
        /// Product/service concept to search for, or the `"None"` sentinel.
        suggestion: String,
    },
    /// The recent exchanges are unrelated, or the response was unusable.
    NotCoherent,
}

impl CoherenceVerdict {
    /// Parse a raw judge response.
    ///
    /// Line 0 decides coherence: coherent iff it ends with `yes`,
    /// case-insensitively (the prompt primes the model with `RELATED:`,
    /// so the first line may be just ` yes`). Lines 1 and 2 carry the
    /// topic and suggestion after their first colon; absent or empty
    /// fields default to the sentinel.
    pub fn parse(raw: &str) -> Self {
        let mut lines = raw.lines();

        let related = lines
            .next()
            .map(|l| l.trim().to_lowercase().ends_with("yes"))
            .unwrap_or(false);
        if !related {
            return CoherenceVerdict::NotCoherent;
        }

        CoherenceVerdict::Coherent {
            topic: field_after_colon(lines.next()),
            suggestion: field_after_colon(lines.next()),
        }
    }

    /// True iff the verdict is coherent and carries a usable suggestion.
    pub fn has_suggestion(&self) -> bool {
        match self {
            CoherenceVerdict::Coherent { suggestion, .. } => {
                !suggestion.is_empty() && !suggestion.eq_ignore_ascii_case(NONE_SENTINEL)
            }
            CoherenceVerdict::NotCoherent => false,
        }
    }
}

/// Content after the first `:` of a line, trimmed; sentinel when the line
/// is absent, has no colon, or is empty after the colon.
fn field_after_colon(line: Option<&str>) -> String {
    line.and_then(|l| l.split_once(':'))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| NONE_SENTINEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_yes() {
        let verdict = CoherenceVerdict::parse(
            "RELATED: yes\nTOPIC: running shoes\nP/S: trail running shoes",
        );
        assert_eq!(
            verdict,
            CoherenceVerdict::Coherent {
                topic: "running shoes".to_string(),
                suggestion: "trail running shoes".to_string(),
            }
        );
        assert!(verdict.has_suggestion());
    }

    #[test]
    fn well_formed_no() {
        let verdict = CoherenceVerdict::parse("RELATED: no\nTOPIC: None\nP/S: None");
        assert_eq!(verdict, CoherenceVerdict::NotCoherent);
        assert!(!verdict.has_suggestion());
    }

    #[test]
    fn primed_response_without_field_name() {
        // The prompt ends with "RELATED:", so the model may answer " yes"
        let verdict = CoherenceVerdict::parse(" yes\nTOPIC: cooking\nP/S: cast iron skillet");
        assert!(verdict.has_suggestion());
    }

    #[test]
    fn case_insensitive_yes() {
        let verdict = CoherenceVerdict::parse("RELATED: YES\nTOPIC: hiking\nP/S: boots");
        assert!(matches!(verdict, CoherenceVerdict::Coherent { .. }));
    }

    #[test]
    fn empty_input_is_not_coherent() {
        assert_eq!(CoherenceVerdict::parse(""), CoherenceVerdict::NotCoherent);
    }

    #[test]
    fn truncated_response_defaults_missing_fields() {
        let verdict = CoherenceVerdict::parse("RELATED: yes");
        assert_eq!(
            verdict,
            CoherenceVerdict::Coherent {
                topic: NONE_SENTINEL.to_string(),
                suggestion: NONE_SENTINEL.to_string(),
            }
        );
        assert!(!verdict.has_suggestion());
    }

    #[test]
    fn missing_colon_defaults_to_sentinel() {
        let verdict = CoherenceVerdict::parse("RELATED: yes\njust some text\nP/S: gadget");
        assert_eq!(
            verdict,
            CoherenceVerdict::Coherent {
                topic: NONE_SENTINEL.to_string(),
                suggestion: "gadget".to_string(),
            }
        );
    }

    #[test]
    fn extra_lines_are_ignored() {
        let verdict = CoherenceVerdict::parse(
            "RELATED: yes\nTOPIC: coffee\nP/S: burr grinder\nNOTE: extra\nmore noise",
        );
        assert_eq!(
            verdict,
            CoherenceVerdict::Coherent {
                topic: "coffee".to_string(),
                suggestion: "burr grinder".to_string(),
            }
        );
    }

    #[test]
    fn sentinel_suggestion_is_not_usable() {
        let verdict = CoherenceVerdict::parse("RELATED: yes\nTOPIC: physics\nP/S: None");
        assert!(matches!(verdict, CoherenceVerdict::Coherent { .. }));
        assert!(!verdict.has_suggestion());
    }

    #[test]
    fn sentinel_suggestion_case_insensitive() {
        let verdict = CoherenceVerdict::parse("RELATED: yes\nTOPIC: physics\nP/S: none");
        assert!(!verdict.has_suggestion());
    }

    #[test]
    fn arbitrary_garbage_never_panics() {
        for raw in ["::::", "\n\n\n", "yes", "RELATED", "RELATED:\nTOPIC:\nP/S:"] {
            let _ = CoherenceVerdict::parse(raw);
        }
    }

    #[test]
    fn bare_yes_line_counts_as_coherent() {
        // "yes" with no field name still ends with yes
        let verdict = CoherenceVerdict::parse("yes\nTOPIC: tea\nP/S: kettle");
        assert!(verdict.has_suggestion());
    }
}
