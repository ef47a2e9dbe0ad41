//! The ordered correction rule set.
//!
//! Each rule is a pure pattern-based rewrite targeting one systematic
//! recognizer confusion seen in cursive handwriting: `rm`/`rn`/`nn` glyph
//! runs that actually render as `M` or `m`, inconsistent capitalization in
//! short tokens, and digit/letter lookalikes (`0`/`O`, `1`/`I`, `5`/`S`,
//! `8`/`B`, `l`/`I`, `vv`/`W`, `v`/`Y`). Rule order matters: the word-level
//! `rm` repair must run before the narrower collapses, and the casing fixes
//! must run before the digit substitutions so their capital-letter contexts
//! exist.
//!
//! The `regex` crate has no lookaround, so context characters are matched as
//! capture groups and re-inserted in the replacement. Patterns with context
//! on both sides are re-applied until stable: a single left-to-right pass
//! consumes the trailing context character that would otherwise anchor the
//! next match.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static CAPITAL_RM_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z])rm([a-zA-Z]+)\b").expect("Capital-rm word regex pattern is valid and should compile")
});
static RM_BEFORE_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rm([A-Z])").expect("rm-before-capital regex pattern is valid and should compile"));
static RM_AFTER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])rm").expect("rm-after-capital regex pattern is valid and should compile"));
static RM_STANDALONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\brm\b").expect("Standalone rm regex pattern is valid and should compile"));
static RN_STANDALONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bRn\b").expect("Standalone Rn regex pattern is valid and should compile"));
static RN_BETWEEN_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])rn([A-Z])").expect("rn-between-capitals regex pattern is valid and should compile"));
static RN_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])rn\b").expect("rn-at-word-end regex pattern is valid and should compile"));
static NN_BETWEEN_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])nn([A-Z])").expect("nn-between-capitals regex pattern is valid and should compile"));
static NN_STANDALONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnn\b").expect("Standalone nn regex pattern is valid and should compile"));
static SHORT_MIXED_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z]{1,3})([a-z]{1,3})\b").expect("Short mixed-case word regex pattern is valid and should compile")
});
static ZERO_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b0([A-Z])").expect("Zero-at-word-start regex pattern is valid and should compile"));
static ZERO_BETWEEN_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z])0([A-Z])").expect("Zero-between-capitals regex pattern is valid and should compile")
});
static ZERO_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])0\b").expect("Zero-at-word-end regex pattern is valid and should compile"));
static ONE_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b1([A-Z])").expect("One-at-word-start regex pattern is valid and should compile"));
static ONE_BETWEEN_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z])1([A-Z])").expect("One-between-capitals regex pattern is valid and should compile")
});
static FIVE_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b5([A-Z])").expect("Five-at-word-start regex pattern is valid and should compile"));
static FIVE_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])5\b").expect("Five-at-word-end regex pattern is valid and should compile"));
static EIGHT_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b8([A-Z])").expect("Eight-at-word-start regex pattern is valid and should compile"));
static EIGHT_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])8\b").expect("Eight-at-word-end regex pattern is valid and should compile"));
static ELL_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bl([A-Z])").expect("l-at-word-start regex pattern is valid and should compile"));
static ELL_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])l\b").expect("l-at-word-end regex pattern is valid and should compile"));
static VV_WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bvv").expect("vv-at-word-start regex pattern is valid and should compile"));
static VV_AFTER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])vv").expect("vv-after-capital regex pattern is valid and should compile"));
static V_WORD_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z])v\b").expect("v-at-word-end regex pattern is valid and should compile"));

enum RuleKind {
    /// `replace_all` in a single left-to-right pass.
    Replace {
        pattern: &'static Lazy<Regex>,
        replacement: &'static str,
    },
    /// Re-apply `replace_all` until the text stops changing. Needed for
    /// patterns whose trailing context character can anchor the next match.
    ReplaceStable {
        pattern: &'static Lazy<Regex>,
        replacement: &'static str,
    },
    /// `Xrm<rest>` word repair: keep the leading capital, collapse `rm` to
    /// `M`, upper-case the remainder of the word.
    CapitalRmWord,
    /// Fully upper-case 1-3 capitals + 1-3 lowercase words of 2-5 characters.
    UppercaseShortWords,
}

/// One stage of the correction pipeline: a pure `text -> text` rewrite with a
/// human-readable description for the audit trail.
pub struct Rule {
    description: &'static str,
    kind: RuleKind,
}

impl Rule {
    /// Human-readable description used in the audit trail when this rule
    /// changes the text.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Apply the rewrite. Borrows the input unchanged when nothing matches.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.kind {
            RuleKind::Replace { pattern, replacement } => pattern.replace_all(text, *replacement),
            RuleKind::ReplaceStable { pattern, replacement } => replace_until_stable(pattern, text, replacement),
            RuleKind::CapitalRmWord => CAPITAL_RM_WORD.replace_all(text, |caps: &regex::Captures| {
                format!("{}M{}", &caps[1], caps[2].to_uppercase())
            }),
            RuleKind::UppercaseShortWords => SHORT_MIXED_WORD.replace_all(text, |caps: &regex::Captures| {
                let word = &caps[0];
                if (2..=5).contains(&word.len()) {
                    word.to_uppercase()
                } else {
                    word.to_string()
                }
            }),
        }
    }
}

fn replace_until_stable<'a>(pattern: &Regex, text: &'a str, replacement: &str) -> Cow<'a, str> {
    let mut current = pattern.replace_all(text, replacement);
    loop {
        let next = pattern.replace_all(&current, replacement).into_owned();
        if next == *current {
            return current;
        }
        current = Cow::Owned(next);
    }
}

/// The full rule set in required execution order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

static RULES: [Rule; 24] = [
    Rule {
        description: "collapsed 'rm' after a leading capital and upper-cased the rest of the word",
        kind: RuleKind::CapitalRmWord,
    },
    Rule {
        description: "replaced 'rm' before a capital letter with 'M'",
        kind: RuleKind::Replace {
            pattern: &RM_BEFORE_UPPER,
            replacement: "M$1",
        },
    },
    Rule {
        description: "replaced 'rm' after a capital letter with 'M'",
        kind: RuleKind::Replace {
            pattern: &RM_AFTER_UPPER,
            replacement: "${1}M",
        },
    },
    Rule {
        description: "replaced standalone 'rm' with 'M'",
        kind: RuleKind::Replace {
            pattern: &RM_STANDALONE,
            replacement: "M",
        },
    },
    Rule {
        description: "replaced standalone 'Rn' with 'M'",
        kind: RuleKind::Replace {
            pattern: &RN_STANDALONE,
            replacement: "M",
        },
    },
    Rule {
        description: "replaced 'rn' between capital letters with 'M'",
        kind: RuleKind::ReplaceStable {
            pattern: &RN_BETWEEN_UPPER,
            replacement: "${1}M${2}",
        },
    },
    Rule {
        description: "replaced 'rn' at a word end after a capital letter with 'M'",
        kind: RuleKind::Replace {
            pattern: &RN_WORD_END,
            replacement: "${1}M",
        },
    },
    Rule {
        description: "replaced 'nn' between capital letters with 'M'",
        kind: RuleKind::ReplaceStable {
            pattern: &NN_BETWEEN_UPPER,
            replacement: "${1}M${2}",
        },
    },
    Rule {
        description: "replaced standalone 'nn' with 'm'",
        kind: RuleKind::Replace {
            pattern: &NN_STANDALONE,
            replacement: "m",
        },
    },
    Rule {
        description: "upper-cased short words with mixed capitalization",
        kind: RuleKind::UppercaseShortWords,
    },
    Rule {
        description: "replaced '0' with 'O' at a word start before a capital letter",
        kind: RuleKind::Replace {
            pattern: &ZERO_WORD_START,
            replacement: "O$1",
        },
    },
    Rule {
        description: "replaced '0' with 'O' between capital letters",
        kind: RuleKind::ReplaceStable {
            pattern: &ZERO_BETWEEN_UPPER,
            replacement: "${1}O${2}",
        },
    },
    Rule {
        description: "replaced '0' with 'O' at a word end after a capital letter",
        kind: RuleKind::Replace {
            pattern: &ZERO_WORD_END,
            replacement: "${1}O",
        },
    },
    Rule {
        description: "replaced '1' with 'I' at a word start before a capital letter",
        kind: RuleKind::Replace {
            pattern: &ONE_WORD_START,
            replacement: "I$1",
        },
    },
    Rule {
        description: "replaced '1' with 'I' between capital letters",
        kind: RuleKind::ReplaceStable {
            pattern: &ONE_BETWEEN_UPPER,
            replacement: "${1}I${2}",
        },
    },
    Rule {
        description: "replaced '5' with 'S' at a word start before a capital letter",
        kind: RuleKind::Replace {
            pattern: &FIVE_WORD_START,
            replacement: "S$1",
        },
    },
    Rule {
        description: "replaced '5' with 'S' at a word end after a capital letter",
        kind: RuleKind::Replace {
            pattern: &FIVE_WORD_END,
            replacement: "${1}S",
        },
    },
    Rule {
        description: "replaced '8' with 'B' at a word start before a capital letter",
        kind: RuleKind::Replace {
            pattern: &EIGHT_WORD_START,
            replacement: "B$1",
        },
    },
    Rule {
        description: "replaced '8' with 'B' at a word end after a capital letter",
        kind: RuleKind::Replace {
            pattern: &EIGHT_WORD_END,
            replacement: "${1}B",
        },
    },
    Rule {
        description: "replaced 'l' with 'I' at a word start before a capital letter",
        kind: RuleKind::Replace {
            pattern: &ELL_WORD_START,
            replacement: "I$1",
        },
    },
    Rule {
        description: "replaced 'l' with 'I' at a word end after a capital letter",
        kind: RuleKind::Replace {
            pattern: &ELL_WORD_END,
            replacement: "${1}I",
        },
    },
    Rule {
        description: "replaced 'vv' with 'W' at a word start",
        kind: RuleKind::Replace {
            pattern: &VV_WORD_START,
            replacement: "W",
        },
    },
    Rule {
        description: "replaced 'vv' with 'W' after a capital letter",
        kind: RuleKind::Replace {
            pattern: &VV_AFTER_UPPER,
            replacement: "${1}W",
        },
    },
    Rule {
        description: "replaced trailing 'v' with 'Y' after a capital letter",
        kind: RuleKind::Replace {
            pattern: &V_WORD_END,
            replacement: "${1}Y",
        },
    },
];
