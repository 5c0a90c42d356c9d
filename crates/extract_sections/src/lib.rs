// crates/extract_sections/src/lib.rs

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Arg, Command};

use editable_sections::processor::{filter_to_sections, DefaultSectionProcessor, SectionProcessor};
use post_processing::{drop_blank_sections, render_sections, trim_sections};

pub mod config;
pub mod logging;

use config::{AppConfig, InputSource, OutputMode};

/// Describes the command line accepted by the `extract_sections` binary.
pub fn build_command() -> Command {
    Command::new("extract_sections")
        .version("0.1.0")
        .about("Validates and extracts marker-delimited editable sections from text")
        .arg(
            Arg::new("file")
                .help("File to read; reads stdin when omitted or '-'")
                .index(1),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .num_args(1)
                .help("Literal start marker (overrides EDIT_START_MARKER)"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .help("Literal end marker (overrides EDIT_END_MARKER)"),
        )
        .arg(
            Arg::new("trim")
                .long("trim")
                .help("Trim surrounding whitespace from each section")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("skip_blank")
                .long("skip-blank")
                .help("Omit sections that contain only whitespace")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only validate the markers")
                .action(clap::ArgAction::SetTrue)
                .default_value("false")
                .conflicts_with("filter"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .num_args(1)
                .value_name("PLACEHOLDER")
                .help("Print the text keeping only sections, replacing the rest with PLACEHOLDER"),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .num_args(1)
                .help("Line printed between sections"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
}

/// Reads the whole input named by the configuration.
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Error reading standard input")?;
            Ok(text)
        }
        InputSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display())),
    }
}

/// Produces the text to print for `text` under `config`.
pub fn run(config: &AppConfig, text: &str) -> Result<String> {
    let markers = &config.markers;
    log::debug!(
        "Scanning {} byte(s) with markers {:?} / {:?}",
        text.len(),
        markers.start(),
        markers.end()
    );

    match &config.mode {
        OutputMode::Check => {
            markers.validate(text).context("Marker validation failed")?;
            Ok("OK".to_string())
        }
        OutputMode::Filter { placeholder } => {
            filter_to_sections(text, markers, placeholder).context("Marker validation failed")
        }
        OutputMode::Sections => {
            let processor = DefaultSectionProcessor::new(markers.clone());
            let mut sections = processor
                .process_text(text)
                .context("Marker validation failed")?;
            if config.trim {
                sections = trim_sections(&sections);
            }
            if config.skip_blank {
                sections = drop_blank_sections(&sections);
            }
            log::info!("Extracted {} section(s)", sections.len());
            Ok(render_sections(&sections, &config.separator))
        }
    }
}
