//! Turn parsed arguments into classifier configuration.

use super::Cli;
use crate::config::{resolve_bounds, BoundOverrides, BoundsConfig};
use crate::errors::ConfigError;

pub fn bound_overrides(cli: &Cli) -> BoundOverrides {
    BoundOverrides {
        fibonacci: cli.fibonacci_bound,
        triangular: cli.triangular_bound,
        power: cli.power_bound,
    }
}

pub fn build_bounds(cli: &Cli) -> Result<BoundsConfig, ConfigError> {
    resolve_bounds(cli.config.as_deref(), &bound_overrides(cli))
}
