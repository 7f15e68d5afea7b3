use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Render a template from a template root to stdout.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Template root, prepended verbatim to the template name.
    #[arg(value_name = "BASE_PATH")]
    pub base_path: String,

    /// Template name relative to the template root, without extension.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Template variables as a JSON object, or `-` to read from stdin.
    #[arg(long)]
    pub vars: Option<String>,

    /// File containing template variables as a JSON object.
    #[arg(long = "vars-file", conflicts_with = "vars")]
    pub vars_file: Option<PathBuf>,

    /// Default variables as `key=value` (repeatable). Values are parsed as JSON when possible.
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// View configuration file (.json, .yaml or .yml) with engine options.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template file extension, overriding the configured one.
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
