mod report;
mod settings;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use articulation_core::pipeline::assessment_logger::{
    AssessmentLogger, NullAssessmentLogger, StdoutAssessmentLogger,
};
use articulation_core::text::domain::transcript::TranscriptWord;
use articulation_core::{AssessArticulationUseCase, AssessmentConfig, AssessmentResult};

/// Grades how accurately a spoken transcript reproduces a reference script.
#[derive(Parser)]
#[command(name = "articulate")]
struct Cli {
    /// Reference script file.
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Reference script given inline.
    #[arg(long)]
    reference_text: Option<String>,

    /// Plain-text transcript file.
    #[arg(long)]
    transcript: Option<PathBuf>,

    /// Transcript given inline.
    #[arg(long)]
    transcript_text: Option<String>,

    /// JSON array of timed words: {"word", "start_time", "end_time", "confidence"}.
    #[arg(long)]
    transcript_json: Option<PathBuf>,

    /// Minimum word similarity for a match (0.0-1.0).
    #[arg(long)]
    threshold: Option<f64>,

    /// Maximum words accepted on either side.
    #[arg(long)]
    max_words: Option<usize>,

    /// Settings file (defaults to the user config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log a per-stage timing summary.
    #[arg(long)]
    timings: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Detailed human-readable report.
    Text,
    /// Full result as JSON.
    Json,
    /// Compact summary as JSON.
    Simple,
}

enum TranscriptInput {
    Plain(String),
    Timed(Vec<TranscriptWord>),
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let config = resolve_config(&cli)?;
    config.validate()?;

    let reference = read_reference(&cli)?;
    let transcript = read_transcript(&cli)?;

    let logger: Box<dyn AssessmentLogger> = if cli.timings {
        Box::new(StdoutAssessmentLogger::new())
    } else {
        Box::new(NullAssessmentLogger)
    };
    let mut use_case = AssessArticulationUseCase::new(config).with_logger(logger);

    let result = match &transcript {
        TranscriptInput::Plain(text) => use_case.execute(text, &reference)?,
        TranscriptInput::Timed(words) => use_case.execute_timed(words, &reference)?,
    };
    use_case.logger().summary();

    println!("{}", render(&result, cli.format)?);
    Ok(())
}

fn render(
    result: &AssessmentResult,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Text => report::render_text(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Simple => serde_json::to_string_pretty(&result.simple())?,
    })
}

/// Settings file first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<AssessmentConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => settings::load_from(path)?,
        None => settings::load(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_match_threshold(threshold);
    }
    if let Some(max_words) = cli.max_words {
        config = config.with_max_words(max_words);
    }
    log::debug!("Using {config:?}");
    Ok(config)
}

fn read_reference(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    match (&cli.reference, &cli.reference_text) {
        (Some(path), None) => Ok(fs::read_to_string(path)
            .map_err(|e| format!("Cannot read reference {}: {e}", path.display()))?),
        (None, Some(text)) => Ok(text.clone()),
        _ => Err("Exactly one of --reference or --reference-text is required".into()),
    }
}

fn read_transcript(cli: &Cli) -> Result<TranscriptInput, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.transcript {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read transcript {}: {e}", path.display()))?;
        return Ok(TranscriptInput::Plain(text));
    }
    if let Some(text) = &cli.transcript_text {
        return Ok(TranscriptInput::Plain(text.clone()));
    }
    if let Some(path) = &cli.transcript_json {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read transcript {}: {e}", path.display()))?;
        let words: Vec<TranscriptWord> = serde_json::from_str(&json)
            .map_err(|e| format!("Invalid timed transcript {}: {e}", path.display()))?;
        return Ok(TranscriptInput::Timed(words));
    }
    Err("One of --transcript, --transcript-text or --transcript-json is required".into())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.reference.is_some() == cli.reference_text.is_some() {
        return Err("Exactly one of --reference or --reference-text is required".into());
    }
    let transcript_sources = [
        cli.transcript.is_some(),
        cli.transcript_text.is_some(),
        cli.transcript_json.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count();
    if transcript_sources != 1 {
        return Err(
            "Exactly one of --transcript, --transcript-text or --transcript-json is required"
                .into(),
        );
    }
    for path in [&cli.reference, &cli.transcript, &cli.transcript_json]
        .into_iter()
        .flatten()
    {
        if !path.exists() {
            return Err(format!("Input file not found: {}", path.display()).into());
        }
    }
    if let Some(threshold) = cli.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(
                format!("Threshold must be between 0.0 and 1.0, got {threshold}").into(),
            );
        }
    }
    if cli.max_words == Some(0) {
        return Err("Max words must be at least 1".into());
    }
    Ok(())
}
