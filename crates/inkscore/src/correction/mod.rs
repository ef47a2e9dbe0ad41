//! Deterministic correction pipeline for raw recognizer output.
//!
//! An ordered sequence of pure rewrite rules targeting systematic
//! character-confusion and spacing artifacts of handwriting recognition.
//! Every rule runs unconditionally in sequence (no short-circuiting); each
//! stage that changes the text contributes one entry to the audit trail
//! returned to the caller. The pipeline is stateless and reentrant, and it
//! never consults the cache.

pub mod rules;

pub use rules::{Rule, rules};

/// Outcome of running the correction pipeline over one candidate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The input text, untouched.
    pub original: String,
    /// The text after all rules have run.
    pub corrected: String,
    /// Whether the corrected text differs from the original.
    pub changed: bool,
    /// One description per rule stage that fired, in execution order.
    pub applied: Vec<String>,
}

/// Apply the full rule set to `text`, left to right, each rule's output
/// feeding the next.
pub fn correct(text: &str) -> Correction {
    let mut current = text.to_string();
    let mut applied = Vec::new();

    for rule in rules() {
        let next = rule.apply(&current).into_owned();
        if next != current {
            tracing::trace!(rule = rule.description(), "correction rule fired");
            applied.push(rule.description().to_string());
            current = next;
        }
    }

    let changed = current != text;
    if changed {
        tracing::debug!(stages = applied.len(), "correction pipeline changed text");
    }

    Correction {
        original: text.to_string(),
        corrected: current,
        changed,
        applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_clean_text_unchanged() {
        let outcome = correct("perfectly ordinary writing");
        assert!(!outcome.changed);
        assert_eq!(outcome.corrected, outcome.original);
        assert!(outcome.applied.is_empty());
    }

    #[test]
    fn test_correct_empty_text() {
        let outcome = correct("");
        assert!(!outcome.changed);
        assert_eq!(outcome.corrected, "");
        assert!(outcome.applied.is_empty());
    }

    #[test]
    fn test_correct_capital_rm_word() {
        let outcome = correct("Trmap");
        assert!(outcome.changed);
        assert_eq!(outcome.corrected, "TMAP");
        assert_eq!(outcome.original, "Trmap");
        assert_eq!(
            outcome.applied,
            vec!["collapsed 'rm' after a leading capital and upper-cased the rest of the word".to_string()]
        );
    }

    #[test]
    fn test_correct_one_entry_per_fired_stage() {
        // "0K 1T" fires two distinct digit-confusion stages once each,
        // regardless of how many matches either pattern has.
        let outcome = correct("0K 1T 0N");
        assert!(outcome.changed);
        assert_eq!(outcome.corrected, "OK IT ON");
        assert_eq!(
            outcome.applied,
            vec![
                "replaced '0' with 'O' at a word start before a capital letter".to_string(),
                "replaced '1' with 'I' at a word start before a capital letter".to_string(),
            ]
        );
    }

    #[test]
    fn test_correct_standalone_collapses() {
        let outcome = correct("rm Rn nn");
        assert_eq!(outcome.corrected, "M M m");
        assert_eq!(outcome.applied.len(), 3);
    }

    #[test]
    fn test_correct_is_deterministic() {
        let a = correct("Trmap vvith C0DE and MAv");
        let b = correct("Trmap vvith C0DE and MAv");
        assert_eq!(a, b);
    }

    #[test]
    fn test_correct_earlier_stage_feeds_later_stage() {
        // The rm collapse turns "Arm0B" into "AM0B"; only then does the '0'
        // sit between two capitals and get fixed to 'O'.
        let outcome = correct("Arm0B");
        assert_eq!(outcome.corrected, "AMOB");
        assert_eq!(
            outcome.applied,
            vec![
                "replaced 'rm' after a capital letter with 'M'".to_string(),
                "replaced '0' with 'O' between capital letters".to_string(),
            ]
        );
    }
}
