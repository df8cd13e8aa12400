//! ssop-footprint: KiCad footprints for dual-row SMD packages
//!
//! Reads an optional parameter file, builds the footprint and writes it to
//! stdout or a file. Diagnostics go to stderr.

use std::io::{IsTerminal as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use ssop_footprint::error::OutputError;
use ssop_footprint::footprint::{dual_row, Footprint};
use ssop_footprint::kicad;
use ssop_footprint::params::{self, FootprintParameters};

/// Generate a KiCad footprint for a dual-row SMD package.
///
/// Parameters default to an SSOP14. A parameter file overrides any of
/// NAME, SPACING, PAD_WIDTH, PAD_HEIGHT, TOTAL_LENGTH, SPACE_BETWEEN_PADS
/// and NUM_PINS, one `KEY VALUE` pair per line.
#[derive(Parser, Debug)]
#[command(name = "ssop-footprint")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to parameter file
    #[arg(value_name = "PARAM_FILE")]
    params: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Kicad)]
    format: Format,

    /// Print the default parameters as a parameter file and exit
    #[arg(long)]
    print_defaults: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// KiCad `(module ...)` footprint
    Kicad,
    /// Computed footprint geometry as JSON
    Json,
}

/// Determines the log level from CLI arguments.
const fn get_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the footprint in the requested format.
fn render(format: Format, footprint: &Footprint) -> Result<String, OutputError> {
    match format {
        Format::Kicad => Ok(kicad::render(footprint)),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(footprint)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes the finished document in one go.
fn write_output(path: Option<&Path>, document: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => std::fs::write(path, document).map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| OutputError::Write {
                    path: PathBuf::from("-"),
                    source: e,
                })
        }
    }
}

/// Prints an error and its source chain to stderr.
fn report(error: &dyn std::error::Error) {
    eprintln!("error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

/// Entry point for ssop-footprint.
fn main() -> ExitCode {
    let args = Args::parse();

    init_tracing(get_log_level(args.verbose, args.quiet));

    let document = if args.print_defaults {
        FootprintParameters::default().to_parameter_file()
    } else {
        let loaded = match params::load_parameters(args.params.as_deref()) {
            Ok(loaded) => loaded,
            Err(e) => {
                report(&e);
                return ExitCode::FAILURE;
            }
        };

        let footprint = dual_row::build(&loaded.parameters);
        match render(args.format, &footprint) {
            Ok(document) => document,
            Err(e) => {
                report(&e);
                return ExitCode::FAILURE;
            }
        }
    };

    if let Err(e) = write_output(args.output.as_deref(), &document) {
        report(&e);
        return ExitCode::FAILURE;
    }

    info!(
        destination = %args.output.as_deref().map_or_else(|| "stdout".into(), Path::to_string_lossy),
        bytes = document.len(),
        "Footprint written"
    );
    ExitCode::SUCCESS
}
