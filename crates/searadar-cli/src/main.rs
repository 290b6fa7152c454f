use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use glob::glob;
use log::debug;
use serde::Serialize;

use searadar_core::{
    LineReaderSource, SentenceConverter, SentenceSource, StationMessage, StationType, StreamError,
    StreamMode, StreamReport, SystemClock, convert_source,
};

#[derive(Parser, Debug)]
#[command(name = "searadar")]
#[command(version)]
#[command(
    about = "Converts MR-231 family radar station sentences into JSON messages.",
    long_about = None,
    after_help = "Examples:\n  searadar convert radar.log --station mr231 -o messages.jsonl\n  cat radar.log | searadar convert --station mr231_3\n  searadar sample --pretty"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a sentence log line by line (one JSON message per line).
    Convert {
        /// Path to a sentence log; omit or use '-' to read stdin
        input: Option<PathBuf>,

        /// Station type: mr231 or mr231_3
        #[arg(short, long, default_value = "mr231")]
        station: StationType,

        /// Output path (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Write a single pretty-printed JSON array instead of JSON lines
        #[arg(long)]
        pretty: bool,

        /// Exit with a non-zero code at the first line that cannot be parsed
        #[arg(long)]
        strict: bool,
    },
    /// Convert and print the protocol control examples.
    Sample {
        /// Restrict to one station type (default: all)
        #[arg(short, long)]
        station: Option<StationType>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    let chatty = cli.verbose.log_level_filter() >= log::LevelFilter::Warn;

    let result = match cli.command {
        Commands::Convert {
            input,
            station,
            output,
            pretty,
            strict,
        } => cmd_convert(input, station, output, pretty, strict, chatty),
        Commands::Sample { station, pretty } => cmd_sample(station, pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<StreamError> for CliError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Sentence { .. } => CliError::new(
                err.to_string(),
                Some("drop --strict to skip lines that cannot be parsed".to_string()),
            ),
            StreamError::Source(_) => CliError::new(err.to_string(), None),
        }
    }
}

fn cmd_convert(
    input: Option<PathBuf>,
    station: StationType,
    output: Option<PathBuf>,
    pretty: bool,
    strict: bool,
    chatty: bool,
) -> Result<(), CliError> {
    let converter = station.create_converter();
    let mode = if strict {
        StreamMode::Strict
    } else {
        StreamMode::Lenient
    };

    let input = input.filter(|path| path.as_os_str() != "-");
    let report = match input {
        Some(input) => {
            let resolved_input = resolve_input_path(&input)?;
            validate_input_file(&resolved_input)?;
            if let Some(output) = output.as_ref() {
                ensure_distinct_paths(&resolved_input, output)?;
            }
            debug!("reading {} as {}", resolved_input.display(), station);
            let source = LineReaderSource::open(&resolved_input).with_context(|| {
                format!("Failed to open input file: {}", resolved_input.display())
            })?;
            run_conversion(&converter, source, mode)?
        }
        None => {
            debug!("reading stdin as {}", station);
            run_conversion(&converter, LineReaderSource::new(io::stdin().lock()), mode)?
        }
    };

    let rendered = render_messages(&report.messages, pretty)?;
    match output.as_ref() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            if chatty {
                eprintln!("OK: {} -> {}", summarize(&report), path.display());
            }
        }
        None => {
            write_stdout(&rendered)?;
            if chatty {
                eprintln!("OK: {}", summarize(&report));
            }
        }
    }
    Ok(())
}

fn run_conversion<S: SentenceSource>(
    converter: &SentenceConverter<SystemClock>,
    source: S,
    mode: StreamMode,
) -> Result<StreamReport, CliError> {
    convert_source(converter, source, mode).map_err(Into::into)
}

#[derive(Serialize)]
struct SampleOutput<'a> {
    station: StationType,
    sentence: &'a str,
    messages: Vec<StationMessage>,
}

fn cmd_sample(station: Option<StationType>, pretty: bool) -> Result<(), CliError> {
    let stations = match station {
        Some(station) => vec![station],
        None => StationType::ALL.to_vec(),
    };

    let mut rendered = String::new();
    for station in stations {
        let converter = station.create_converter();
        for &sentence in station.control_examples() {
            let messages = converter
                .convert(sentence)
                .with_context(|| format!("control example failed for {station}: {sentence}"))?;
            let sample = SampleOutput {
                station,
                sentence,
                messages,
            };
            let json = if pretty {
                serde_json::to_string_pretty(&sample)
            } else {
                serde_json::to_string(&sample)
            }
            .context("JSON serialization failed")?;
            rendered.push_str(&json);
            rendered.push('\n');
        }
    }
    write_stdout(&rendered)
}

fn render_messages(messages: &[StationMessage], pretty: bool) -> Result<String, CliError> {
    if pretty {
        let mut json = serde_json::to_string_pretty(messages).context("JSON serialization failed")?;
        json.push('\n');
        return Ok(json);
    }
    let mut out = String::new();
    for message in messages {
        out.push_str(&serde_json::to_string(message).context("JSON serialization failed")?);
        out.push('\n');
    }
    Ok(out)
}

fn summarize(report: &StreamReport) -> String {
    format!(
        "{} line(s), {} message(s), {} invalid, {} rejected",
        report.lines_total,
        report.messages.len(),
        report.invalid_count(),
        report.rejected.len()
    )
}

fn write_stdout(rendered: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let Ok(output_abs) = fs::canonicalize(output) else {
        return Ok(());
    };
    if output_abs == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a sentence log file, or '-' to read stdin".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a sentence log file, or '-' to read stdin".to_string()),
        ));
    }
    Ok(())
}

/// Expand a glob pattern that must match exactly one log file.
fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let pattern_error = |detail: String| {
        CliError::new(
            format!("invalid input pattern '{pattern}'"),
            Some(format!("pattern error: {detail}")),
        )
    };
    let candidates = glob(&pattern)
        .map_err(|err| pattern_error(err.msg.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| pattern_error(err.to_string()))?;
    let mut files: Vec<PathBuf> = candidates.into_iter().filter(|p| p.is_file()).collect();

    match files.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{pattern}'"),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(files.remove(0)),
        count => {
            let mut listed: Vec<String> =
                files.iter().take(3).map(|p| p.display().to_string()).collect();
            if count > listed.len() {
                listed.push("...".to_string());
            }
            Err(CliError::new(
                format!(
                    "pattern '{pattern}' matches {count} files: {}",
                    listed.join(", ")
                ),
                Some("pass a single log file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
