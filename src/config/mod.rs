// Sub-modules
mod bounds;
mod loader;

pub use bounds::{BoundOverrides, BoundsConfig, FIBONACCI_BOUND, POWER_BOUND, TRIANGULAR_BOUND};
pub use loader::{load_config, parse_config, resolve_bounds, FtnConfig};
