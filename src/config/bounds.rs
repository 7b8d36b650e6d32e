use serde::Deserialize;

use crate::errors::ConfigError;

/// Search ceiling of the Fibonacci-like rule.
pub const FIBONACCI_BOUND: i64 = 55;
/// Search ceiling of the triangular rule.
pub const TRIANGULAR_BOUND: i64 = 45;
/// Search ceiling of the power-of-ten rule.
pub const POWER_BOUND: i64 = 100_000;

/// Per-rule search bounds.
///
/// A bound only limits how far a sequence is generated; it is not a
/// filter on the input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsConfig {
    #[serde(default = "default_fibonacci_bound")]
    pub fibonacci: i64,

    #[serde(default = "default_triangular_bound")]
    pub triangular: i64,

    #[serde(default = "default_power_bound")]
    pub power: i64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            fibonacci: default_fibonacci_bound(),
            triangular: default_triangular_bound(),
            power: default_power_bound(),
        }
    }
}

impl BoundsConfig {
    /// Replace any bound that has an override.
    pub fn with_overrides(self, overrides: &BoundOverrides) -> Self {
        Self {
            fibonacci: overrides.fibonacci.unwrap_or(self.fibonacci),
            triangular: overrides.triangular.unwrap_or(self.triangular),
            power: overrides.power.unwrap_or(self.power),
        }
    }

    /// Every bound must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        [
            ("fibonacci", self.fibonacci),
            ("triangular", self.triangular),
            ("power", self.power),
        ]
        .into_iter()
        .find(|&(_, value)| value <= 0)
        .map_or(Ok(()), |(rule, value)| {
            Err(ConfigError::InvalidBound { rule, value })
        })
    }
}

/// Optional bound values from flags or the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundOverrides {
    pub fibonacci: Option<i64>,
    pub triangular: Option<i64>,
    pub power: Option<i64>,
}

fn default_fibonacci_bound() -> i64 {
    FIBONACCI_BOUND
}
fn default_triangular_bound() -> i64 {
    TRIANGULAR_BOUND
}
fn default_power_bound() -> i64 {
    POWER_BOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_named_constants() {
        let bounds = BoundsConfig::default();
        assert_eq!(bounds.fibonacci, 55);
        assert_eq!(bounds.triangular, 45);
        assert_eq!(bounds.power, 100_000);
        assert!(bounds.validate().is_ok());
    }

    #[test]
    fn overrides_replace_only_given_bounds() {
        let overrides = BoundOverrides {
            triangular: Some(100),
            ..Default::default()
        };
        let bounds = BoundsConfig::default().with_overrides(&overrides);
        assert_eq!(bounds.triangular, 100);
        assert_eq!(bounds.fibonacci, FIBONACCI_BOUND);
        assert_eq!(bounds.power, POWER_BOUND);
    }

    #[test]
    fn non_positive_bound_is_rejected() {
        let bounds = BoundsConfig {
            power: 0,
            ..Default::default()
        };
        match bounds.validate() {
            Err(ConfigError::InvalidBound { rule, value }) => {
                assert_eq!(rule, "power");
                assert_eq!(value, 0);
            }
            other => panic!("expected invalid bound, got {:?}", other),
        }
    }
}
