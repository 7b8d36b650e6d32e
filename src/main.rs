use anyhow::{Context, Result};
use clap::Parser;
use ftn_classify::cli::{config_builder, setup, Cli};
use ftn_classify::commands::{self, ClassifyConfig, InputSource};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity);

    let bounds = config_builder::build_bounds(&cli).context("Invalid search bounds")?;

    if cli.list_rules {
        return commands::list_rules(&bounds, std::io::stdout().lock());
    }

    let config = ClassifyConfig {
        source: input_source(cli.value, cli.batch),
        format: cli.format,
        bounds,
    };
    commands::handle_classify(&config)
}

// Pure mapping from arguments to where values are read
fn input_source(value: Option<String>, batch: bool) -> InputSource {
    match (value, batch) {
        (Some(text), _) => InputSource::Argument(text),
        (None, true) => InputSource::Batch,
        (None, false) => InputSource::SingleLine,
    }
}
