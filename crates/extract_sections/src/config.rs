// crates/extract_sections/src/config.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ArgMatches;

use edit_marker::{DEFAULT_END_MARKER, DEFAULT_START_MARKER, END_MARKER_ENV, START_MARKER_ENV};
use editable_sections::MarkerPair;
use unescape_markers::unescape_marker;

pub const DEFAULT_SEPARATOR: &str = "--------------------------------------------------";

/// Where the text to scan comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// What the tool prints once the text is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Print every section, separated by the separator line.
    Sections,
    /// Only validate; print `OK` on success.
    Check,
    /// Print the text reduced to its sections, omitted parts replaced by a placeholder.
    Filter { placeholder: String },
}

/// Centralized runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub input: InputSource,
    pub markers: MarkerPair,
    pub mode: OutputMode,
    pub trim: bool,
    pub skip_blank: bool,
    pub separator: String,
    pub verbose: bool,
}

impl AppConfig {
    /// Builds the configuration from parsed arguments.
    ///
    /// Markers come from the command line first, then from the environment
    /// (looked up through `env`), then from the defaults.
    pub fn from_matches<F>(matches: &ArgMatches, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = match matches.get_one::<String>("file").map(String::as_str) {
            None | Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        };

        let start = resolve_marker(matches, "start", &env, START_MARKER_ENV, DEFAULT_START_MARKER);
        let end = resolve_marker(matches, "end", &env, END_MARKER_ENV, DEFAULT_END_MARKER);
        let markers = MarkerPair::new(start, end).context("Invalid marker configuration")?;

        let mode = if *matches.get_one::<bool>("check").unwrap_or(&false) {
            OutputMode::Check
        } else if let Some(placeholder) = matches.get_one::<String>("filter") {
            OutputMode::Filter {
                placeholder: unescape_marker(placeholder),
            }
        } else {
            OutputMode::Sections
        };

        let separator = matches
            .get_one::<String>("separator")
            .map(|s| unescape_marker(s))
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());

        Ok(Self {
            input,
            markers,
            mode,
            trim: *matches.get_one::<bool>("trim").unwrap_or(&false),
            skip_blank: *matches.get_one::<bool>("skip_blank").unwrap_or(&false),
            separator,
            verbose: *matches.get_one::<bool>("verbose").unwrap_or(&false),
        })
    }
}

fn resolve_marker<F>(matches: &ArgMatches, arg: &str, env: &F, env_key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let raw = matches
        .get_one::<String>(arg)
        .cloned()
        .or_else(|| env(env_key))
        .unwrap_or_else(|| default.to_string());
    unescape_marker(&raw)
}
