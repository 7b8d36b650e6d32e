use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::bounds::{BoundOverrides, BoundsConfig};
use crate::errors::ConfigError;

/// Root of an `ftn` TOML file.
///
/// ```toml
/// [bounds]
/// fibonacci = 55
/// triangular = 45
/// power = 100000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FtnConfig {
    #[serde(default)]
    pub bounds: BoundsConfig,
}

/// Parse config from a TOML string. Bounds are validated by [`resolve_bounds`].
pub fn parse_config(contents: &str) -> Result<FtnConfig, toml::de::Error> {
    toml::from_str::<FtnConfig>(contents)
}

pub fn load_config(path: &Path) -> Result<FtnConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Built-in constants, then the optional file, then overrides.
pub fn resolve_bounds(
    config_path: Option<&Path>,
    overrides: &BoundOverrides,
) -> Result<BoundsConfig, ConfigError> {
    let base = match config_path {
        Some(path) => load_config(path)?.bounds,
        None => BoundsConfig::default(),
    };
    let bounds = base.with_overrides(overrides);
    bounds.validate()?;
    tracing::debug!(
        fibonacci = bounds.fibonacci,
        triangular = bounds.triangular,
        power = bounds.power,
        "resolved bounds"
    );
    Ok(bounds)
}
