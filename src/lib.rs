// Export modules for library usage
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;

// Re-export commonly used types
pub use crate::classifier::{
    classify, Classification, Classifier, Generator, Label, SequenceRule,
};
pub use crate::config::{BoundsConfig, FIBONACCI_BOUND, POWER_BOUND, TRIANGULAR_BOUND};
pub use crate::errors::{ConfigError, InputError};
