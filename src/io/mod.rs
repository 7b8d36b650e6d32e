pub mod input;
pub mod output;

pub use input::{parse_value, read_batch, read_single};
pub use output::{create_writer, rules_table, JsonWriter, OutputFormat, OutputWriter, PlainWriter};
