//! Rule-based integer classification.
//!
//! A [`Classifier`] holds an ordered list of [`SequenceRule`]s and returns
//! the label of the first rule whose sequence contains the input. Values
//! that appear in several sequences (0 and 1 in particular) therefore
//! always resolve to the earliest rule.
//!
//! # Example
//!
//! ```rust
//! use ftn_classify::classifier::{classify, Label};
//!
//! assert_eq!(classify(21), Label::Fibonacci);
//! assert_eq!(classify(10), Label::Triangular);
//! assert_eq!(classify(100), Label::Power);
//! assert_eq!(classify(1_000_000), Label::None);
//! ```

pub mod rules;
pub mod sequences;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use crate::config::BoundsConfig;

pub use rules::{default_rules, Generator, SequenceRule, POWER_BASE};

/// Outcome of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Fibonacci,
    Triangular,
    Power,
    None,
}

impl Label {
    /// Single-character form printed by the command line tool.
    pub fn as_char(self) -> char {
        match self {
            Label::Fibonacci => 'F',
            Label::Triangular => 'T',
            Label::Power => 'P',
            Label::None => 'N',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A classified value together with the rule that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub value: i64,
    pub label: Label,
    pub code: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<SequenceRule>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<SequenceRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&BoundsConfig::default())
    }
}

impl Classifier {
    /// Classifier with the standard rules and the given bounds.
    pub fn new(bounds: &BoundsConfig) -> Self {
        Self::with_rules(default_rules(bounds))
    }

    /// Classifier over a custom rule list, evaluated in the given order.
    pub fn with_rules(rules: Vec<SequenceRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SequenceRule] {
        &self.rules
    }

    /// First rule containing `n`, if any. Later rules are never evaluated.
    pub fn matching_rule(&self, n: i64) -> Option<&SequenceRule> {
        self.rules.iter().find(|rule| {
            let matched = rule.matches(n);
            tracing::trace!(value = n, rule = %rule.generator(), matched, "evaluated rule");
            matched
        })
    }

    pub fn classify(&self, n: i64) -> Label {
        self.matching_rule(n)
            .map_or(Label::None, SequenceRule::label)
    }

    pub fn classify_detailed(&self, n: i64) -> Classification {
        let rule = self.matching_rule(n).copied();
        let label = rule.map_or(Label::None, |rule| rule.label());
        tracing::debug!(value = n, label = %label, "classified");
        Classification {
            value: n,
            label,
            code: label.as_char(),
            rule,
        }
    }
}

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

/// Classify `n` with the standard rules and bounds.
pub fn classify(n: i64) -> Label {
    DEFAULT_CLASSIFIER.classify(n)
}
