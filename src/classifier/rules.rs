use serde::Serialize;
use std::fmt;

use super::sequences;
use super::Label;
use crate::config::BoundsConfig;

/// Base of the power rule.
pub const POWER_BASE: i64 = 10;

/// Sequence a rule searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    FibonacciLike,
    Triangular,
    PowerOf(i64),
}

impl Generator {
    /// Membership test for `n`, searching no further than `bound` allows.
    pub fn contains(self, n: i64, bound: i64) -> bool {
        match self {
            Generator::FibonacciLike => sequences::is_fibonacci_like(n, bound),
            Generator::Triangular => sequences::is_triangular(n, bound),
            Generator::PowerOf(base) => sequences::is_power_of(base, n, bound),
        }
    }

    /// Terms in generation order, ending before `i64` overflow.
    pub fn terms(self) -> Box<dyn Iterator<Item = i64>> {
        match self {
            Generator::FibonacciLike => Box::new(sequences::fibonacci_like()),
            Generator::Triangular => Box::new(sequences::triangular()),
            Generator::PowerOf(base) => Box::new(sequences::powers_of(base)),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::FibonacciLike => write!(f, "fibonacci-like (0, 1, 2, 3, 5, ...)"),
            Generator::Triangular => write!(f, "triangular (0, 1, 3, 6, 10, ...)"),
            Generator::PowerOf(base) => write!(f, "powers of {}", base),
        }
    }
}

/// A labelled sequence predicate with its search ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SequenceRule {
    label: Label,
    bound: i64,
    generator: Generator,
}

impl SequenceRule {
    pub fn new(label: Label, bound: i64, generator: Generator) -> Self {
        Self {
            label,
            bound,
            generator,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn generator(&self) -> Generator {
        self.generator
    }

    pub fn matches(&self, n: i64) -> bool {
        self.generator.contains(n, self.bound)
    }
}

/// Rules in dispatch order: Fibonacci-like, triangular, power of ten.
pub fn default_rules(bounds: &BoundsConfig) -> Vec<SequenceRule> {
    vec![
        SequenceRule::new(Label::Fibonacci, bounds.fibonacci, Generator::FibonacciLike),
        SequenceRule::new(Label::Triangular, bounds.triangular, Generator::Triangular),
        SequenceRule::new(Label::Power, bounds.power, Generator::PowerOf(POWER_BASE)),
    ]
}
