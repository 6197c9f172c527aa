//! waymark: arrange unordered route segments from the command line.
//!
//! Reads raw segment pairs from a JSON file (or a built-in sample),
//! arranges them into one continuous route and prints it as a numbered
//! listing, a trail of points, or a JSON document.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin waymark -- [OPTIONS] [INPUT]
//! cargo run --bin waymark -- --sample tokyo --reverse
//! ```
//!
//! Input files hold an array of entries. With `--decoder text` each entry
//! is an array of two strings; with `--decoder utf8-bytes` each entry is an
//! array of two byte arrays.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::Level;
use waymark_route::{DecoderKind, RawInput, Route, RouteConfig, RouteError, Sample};

/// Arrange unordered route segments into one continuous route.
#[derive(Parser)]
#[command(name = "waymark", version)]
struct Cli {
    /// Path to a JSON file with the raw segment pairs.
    #[arg(required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Use a built-in data set instead of an input file.
    #[arg(long, value_enum, conflicts_with = "input")]
    sample: Option<SampleArg>,

    /// How to decode the entries of the input file.
    ///
    /// Built-in samples pick their own decoder.
    #[arg(long, value_enum, default_value_t = Decoder::Text, conflicts_with = "sample")]
    decoder: Decoder,

    /// Display name of the route.
    #[arg(long)]
    name: Option<String>,

    /// Reverse the route after arranging it.
    #[arg(long)]
    reverse: bool,

    /// Print the route as a trail of points.
    #[arg(long)]
    points: bool,

    /// Output the route as JSON instead of a text listing.
    #[arg(long)]
    json: bool,

    /// Full route config as a JSON string.
    ///
    /// When provided, `--name`, `--decoder`, `--reverse` and `--points`
    /// are ignored. The JSON must be a valid `RouteConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Log debug details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

/// Built-in data set selection.
#[derive(Clone, Copy, ValueEnum)]
enum SampleArg {
    /// Ten London areas, decoded as text.
    London,
    /// Ten Tokyo wards, decoded from UTF-8 bytes.
    Tokyo,
}

impl From<SampleArg> for Sample {
    fn from(sample: SampleArg) -> Self {
        match sample {
            SampleArg::London => Self::London,
            SampleArg::Tokyo => Self::Tokyo,
        }
    }
}

/// Input decoder selection.
#[derive(Clone, Copy, ValueEnum)]
enum Decoder {
    /// Each entry is a pair of strings.
    Text,
    /// Each entry is a pair of UTF-8 byte arrays.
    Utf8Bytes,
}

/// Errors surfaced to the user before exiting with a failure code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error parsing --config-json: {0}")]
    Config(#[source] serde_json::Error),

    #[error("error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("error serializing route: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Build a [`RouteConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual flags are ignored. Otherwise, a config is assembled from the
/// individual flags.
fn config_from_cli(cli: &Cli) -> Result<RouteConfig, CliError> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(CliError::Config);
    }

    Ok(RouteConfig {
        name: cli.name.clone(),
        decoder: match cli.decoder {
            Decoder::Text => DecoderKind::Text,
            Decoder::Utf8Bytes => DecoderKind::Utf8Bytes,
        },
        reverse: cli.reverse,
        points: cli.points,
    })
}

/// Parse the contents of an input file according to `kind`.
fn parse_raw(contents: &str, kind: DecoderKind) -> Result<RawInput, serde_json::Error> {
    Ok(match kind {
        DecoderKind::Text => RawInput::Text(serde_json::from_str(contents)?),
        DecoderKind::Utf8Bytes => RawInput::Utf8Bytes(serde_json::from_str(contents)?),
    })
}

fn read_raw(path: &Path, kind: DecoderKind) -> Result<RawInput, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_raw(&contents, kind).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, arrange and (optionally) reverse a route as configured.
fn build_route(cli: &Cli, config: &RouteConfig) -> Result<Route, CliError> {
    let mut route = if let Some(sample) = cli.sample {
        let sample = Sample::from(sample);
        let mut route = Route::default();
        sample.load(&mut route)?;
        if let Some(ref name) = config.name {
            route.set_name(name);
        }
        tracing::info!(sample = sample.name(), "sample data accepted");
        route.arrange()?;
        route
    } else if let Some(ref path) = cli.input {
        let raw = read_raw(path, config.decoder)?;
        tracing::debug!(entries = raw.len(), decoder = ?raw.kind(), "input parsed");
        waymark_route::arrange(config.name_or_default(), &raw)?
    } else {
        return Err(RouteError::EmptyInput.into());
    };
    tracing::info!(route = route.name(), segments = route.len(), "segments arranged");

    if config.reverse {
        route.reverse();
        tracing::debug!(route = route.name(), "route reversed");
    }

    Ok(route)
}

fn render(route: &Route, config: &RouteConfig, json: bool) -> Result<String, CliError> {
    if json {
        return waymark_export::to_json(route).map_err(CliError::Serialize);
    }
    if config.points {
        return Ok(waymark_export::to_point_trail(route.points()));
    }
    Ok(waymark_export::to_listing(route.name(), route.segments()))
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = config_from_cli(cli)?;
    tracing::debug!(?config, "configuration");

    let route = build_route(cli, &config)?;
    let output = render(&route, &config, cli.json)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
