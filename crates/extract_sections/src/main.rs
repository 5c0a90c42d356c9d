// crates/extract_sections/src/main.rs

use std::env;

use anyhow::Result;

use extract_sections::config::{AppConfig, OutputMode};
use extract_sections::logging::init_logging;
use extract_sections::{build_command, read_input, run};

fn main() -> Result<()> {
    let matches = build_command().get_matches();
    let config = AppConfig::from_matches(&matches, |key| env::var(key).ok())?;

    init_logging(config.verbose);
    log::debug!("[VERBOSE] Configuration: {:?}", config);

    let text = read_input(&config.input)?;
    let output = run(&config, &text)?;

    match config.mode {
        // Filtered output is the document itself; print it as-is.
        OutputMode::Filter { .. } => print!("{}", output),
        _ if output.is_empty() => {}
        _ => println!("{}", output),
    }
    Ok(())
}
