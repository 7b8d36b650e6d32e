use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::classifier::Classifier;
use crate::config::BoundsConfig;
use crate::io::{self, create_writer, OutputFormat};

/// Where the values to classify come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A value given on the command line
    Argument(String),
    /// First line of stdin
    SingleLine,
    /// Every non-empty line of stdin
    Batch,
}

#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub source: InputSource,
    pub format: OutputFormat,
    pub bounds: BoundsConfig,
}

/// Classify the configured input, writing one result per value.
///
/// In batch mode the first malformed line aborts the run; results for
/// earlier lines have already been written.
pub fn run_classify<R: BufRead, W: Write>(
    config: &ClassifyConfig,
    reader: R,
    writer: W,
) -> Result<()> {
    let classifier = Classifier::new(&config.bounds);
    let mut output = create_writer(config.format, writer);

    match &config.source {
        InputSource::Argument(text) => {
            let value = io::parse_value(text, 1).context("Failed to parse VALUE argument")?;
            output.write_classification(&classifier.classify_detailed(value))?;
        }
        InputSource::SingleLine => {
            let value = io::read_single(reader).context("Failed to read value from stdin")?;
            output.write_classification(&classifier.classify_detailed(value))?;
        }
        InputSource::Batch => {
            let mut count = 0usize;
            for value in io::read_batch(reader) {
                let value = value.context("Failed to read batch input")?;
                output.write_classification(&classifier.classify_detailed(value))?;
                count += 1;
            }
            tracing::info!(count, "classified batch");
        }
    }
    Ok(())
}

/// Run against the process's stdin and stdout.
pub fn handle_classify(config: &ClassifyConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_classify(config, stdin.lock(), stdout.lock())
}
