use anyhow::Result;
use std::io::Write;

use crate::classifier::Classifier;
use crate::config::BoundsConfig;
use crate::io::rules_table;

/// Print the rules the classifier would apply, in dispatch order.
pub fn list_rules<W: Write>(bounds: &BoundsConfig, mut writer: W) -> Result<()> {
    let classifier = Classifier::new(bounds);
    writeln!(writer, "{}", rules_table(classifier.rules()))?;
    Ok(())
}
