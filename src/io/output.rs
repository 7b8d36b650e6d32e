use crate::classifier::{Classification, SequenceRule};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One label character per line
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

pub trait OutputWriter {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()>;
}

pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", result.code)?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_classification(&mut self, result: &Classification) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, result)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Plain => Box::new(PlainWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// Rule table in dispatch order.
pub fn rules_table(rules: &[SequenceRule]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Priority", "Label", "Sequence", "Bound"]);
    for (index, rule) in rules.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            rule.label().to_string(),
            rule.generator().to_string(),
            rule.bound().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use pretty_assertions::assert_eq;

    fn render(format: OutputFormat, values: &[i64]) -> String {
        let classifier = Classifier::default();
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, &mut buffer);
            for &value in values {
                writer
                    .write_classification(&classifier.classify_detailed(value))
                    .unwrap();
            }
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_writes_one_code_per_line() {
        assert_eq!(render(OutputFormat::Plain, &[0, 6, 100, 4]), "F\nT\nP\nN\n");
    }

    #[test]
    fn json_includes_rule_for_matches() {
        let output = render(OutputFormat::Json, &[10]);
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["value"], 10);
        assert_eq!(parsed["label"], "triangular");
        assert_eq!(parsed["code"], "T");
        assert_eq!(parsed["rule"]["bound"], 45);
        assert_eq!(parsed["rule"]["generator"], "triangular");
    }

    #[test]
    fn json_omits_rule_when_nothing_matches() {
        let output = render(OutputFormat::Json, &[7]);
        let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
        assert_eq!(parsed["code"], "N");
        assert!(parsed.get("rule").is_none());
    }

    #[test]
    fn rules_table_lists_every_rule() {
        let rendered = rules_table(Classifier::default().rules()).to_string();
        assert!(rendered.contains("powers of 10"));
        assert!(rendered.contains("100000"));
        assert!(rendered.contains("Priority"));
    }
}
