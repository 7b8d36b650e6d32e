//! CLI command implementations for ftn.
//!
//! - **classify**: label one value or a batch of values
//! - **rules**: show the rule table with resolved bounds

pub mod classify;
pub mod rules;

pub use classify::{handle_classify, run_classify, ClassifyConfig, InputSource};
pub use rules::list_rules;
