//! tracewise-bench: CLI tool for scoring experiments and diagnostics.
//!
//! Scores recorded drawings against catalog or custom guides, replays
//! recorded dot-tap logs, and lists the built-in exercises. Useful for:
//!
//! - Seeing why a drawing earned its score (proximity, coverage, stray, gates)
//! - Tuning thresholds against a corpus of real attempts
//! - Rendering an attempt over its guide for review
//!
//! # Input formats
//!
//! - Drawing: JSON array of strokes, each an array of `{"x": .., "y": ..}`.
//! - Guide: JSON array of `{"x": .., "y": ..}` waypoints.
//! - Tap log: JSON array of `{"x": .., "y": .., "at_ms": ..}`, with
//!   `at_ms` measured from the start of the attempt.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin tracewise-bench -- score drawing.json --exercise letter:A
//! cargo run --bin tracewise-bench -- dots taps.json --pattern dots:fish
//! cargo run --bin tracewise-bench -- list
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracewise_scoring::{
    Dimensions, DotRules, DotSequence, ExerciseId, FeedbackTier, Guide, ManualClock, Point,
    ScoreBreakdown, ScoreResult, ScoringConfig, Stroke, TapOutcome, analyze, expand_guide,
};
use tracing_subscriber::EnvFilter;

/// Scoring experiments and diagnostics for tracewise.
#[derive(Parser)]
#[command(name = "tracewise-bench", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a recorded drawing against a guide.
    Score(ScoreArgs),
    /// Replay a recorded tap log against a dot pattern.
    Dots(DotsArgs),
    /// List every built-in exercise id.
    List,
}

#[derive(Args)]
struct ScoreArgs {
    /// Path to the drawing JSON.
    drawing: PathBuf,

    /// Built-in exercise to score against (e.g. `letter:A`, `shape:star`).
    #[arg(long, conflicts_with = "guide", required_unless_present = "guide")]
    exercise: Option<ExerciseId>,

    /// Path to a custom guide JSON.
    #[arg(long)]
    guide: Option<PathBuf>,

    /// Spacing between dense guide samples.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_GUIDE_STEP)]
    guide_step: f64,

    /// Keep every n-th drawn point.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_STROKE_DECIMATION)]
    stroke_decimation: usize,

    /// Check every n-th dense guide point for coverage.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_GUIDE_DECIMATION)]
    guide_decimation: usize,

    /// Full-credit distance from the guide.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_ON_TRACK_RADIUS)]
    on_track_radius: f64,

    /// Zero-credit distance from the guide.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_FAR_AWAY_RADIUS)]
    far_away_radius: f64,

    /// Extra reach for coverage beyond the on-track radius.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_COVERAGE_MARGIN)]
    coverage_margin: f64,

    /// Padding around the guide bounds before a point is stray.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_BBOX_PADDING)]
    bbox_padding: f64,

    /// Proximity gate (0-100).
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_MIN_PROXIMITY)]
    min_proximity: f64,

    /// Coverage gate (0-1).
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_MIN_COVERAGE)]
    min_coverage: f64,

    /// Stray gate (0-1).
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_MAX_STRAY_RATIO)]
    max_stray_ratio: f64,

    /// Score ceiling when a gate fails.
    #[arg(long, default_value_t = ScoringConfig::DEFAULT_GATE_CAP)]
    gate_cap: f64,

    /// Multiply every distance threshold, for canvases other than 420x330.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Full scoring config as a JSON string.
    ///
    /// When provided, all other threshold flags (including `--scale`)
    /// are ignored. Missing fields take their defaults.
    #[arg(long)]
    config_json: Option<String>,

    /// Output the breakdown as JSON instead of a human-readable report.
    #[arg(long)]
    json: bool,

    /// Write the drawing over its guide to an SVG file.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Args)]
struct DotsArgs {
    /// Path to the tap log JSON.
    taps: PathBuf,

    /// Dot pattern to replay against (e.g. `dots:fish`).
    #[arg(long)]
    pattern: ExerciseId,

    /// A tap must land strictly closer than this to a dot.
    #[arg(long, default_value_t = DotRules::DEFAULT_MAX_TAP_DISTANCE)]
    max_tap_distance: f64,

    /// Debounce window for repeat taps on the same dot, in seconds.
    #[arg(long, default_value_t = DotRules::DEFAULT_DEBOUNCE.as_secs_f64())]
    debounce_secs: f64,

    /// Output the replay as JSON.
    #[arg(long)]
    json: bool,
}

/// One recorded tap.
#[derive(Debug, Clone, Copy, Deserialize)]
struct TapRecord {
    x: f64,
    y: f64,
    at_ms: u64,
}

/// Result of scoring one drawing, as printed with `--json`.
#[derive(Serialize)]
struct ScoreReport<'a> {
    exercise: Option<String>,
    tier: FeedbackTier,
    label: &'static str,
    message: &'static str,
    breakdown: &'a ScoreBreakdown,
}

/// One replayed tap and what it did.
#[derive(Debug, Serialize)]
struct TapReplay {
    x: f64,
    y: f64,
    at_ms: u64,
    outcome: TapOutcome,
}

/// Result of replaying a tap log, as printed with `--json`.
#[derive(Serialize)]
struct DotsReport {
    pattern: String,
    taps: Vec<TapReplay>,
    wrong_taps: u32,
    result: Option<ScoreResult>,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Error parsing {}: {e}", path.display()))
}

/// Build a [`ScoringConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and all
/// individual threshold flags are ignored. Either way the result is
/// validated.
fn config_from_args(args: &ScoreArgs) -> Result<ScoringConfig, String> {
    let config = if let Some(ref json) = args.config_json {
        serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"))?
    } else {
        ScoringConfig {
            guide_step: args.guide_step,
            stroke_decimation: args.stroke_decimation,
            guide_decimation: args.guide_decimation,
            on_track_radius: args.on_track_radius,
            far_away_radius: args.far_away_radius,
            coverage_margin: args.coverage_margin,
            bbox_padding: args.bbox_padding,
            min_proximity: args.min_proximity,
            min_coverage: args.min_coverage,
            max_stray_ratio: args.max_stray_ratio,
            gate_cap: args.gate_cap,
            ..ScoringConfig::default()
        }
        .scaled(args.scale)
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Score recorded strokes exactly as given, taps included.
fn score_recording(strokes: &[Stroke], guide: &Guide, config: &ScoringConfig) -> ScoreBreakdown {
    analyze(strokes, &expand_guide(guide, config.guide_step), config)
}

fn run_score(args: &ScoreArgs) -> Result<(), String> {
    let config = config_from_args(args)?;
    let guide: Guide = match (args.exercise, &args.guide) {
        (Some(id), _) => id.guide().map_err(|e| e.to_string())?,
        (None, Some(path)) => read_json(path)?,
        (None, None) => return Err("Either --exercise or --guide is required".to_string()),
    };
    let strokes: Vec<Stroke> = read_json(&args.drawing)?;

    tracing::info!(
        drawing = %args.drawing.display(),
        strokes = strokes.len(),
        waypoints = guide.len(),
        "scoring drawing"
    );
    tracing::debug!(?config, "scoring config");

    if strokes.iter().all(Stroke::is_empty) {
        tracing::warn!("drawing has no points");
    }

    let breakdown = score_recording(&strokes, &guide, &config);
    let tier = FeedbackTier::for_score(breakdown.score);

    if args.json {
        let report = ScoreReport {
            exercise: args.exercise.map(|id| id.to_string()),
            tier,
            label: tier.label(),
            message: tier.message(),
            breakdown: &breakdown,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Error serializing report: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", breakdown.report());
        println!();
        println!("{} {}", tier.label(), tier.message());
    }

    if let Some(ref svg_path) = args.svg {
        let title = args
            .exercise
            .map_or_else(|| "custom guide".to_string(), |id| format!("Tracing {}", id.name()));
        let desc = format!("score {} ({tier})", breakdown.score);
        let config_json = serde_json::to_string(&config)
            .map_err(|e| format!("Error serializing config: {e}"))?;
        let metadata = tracewise_export::SvgMetadata {
            title: Some(&title),
            description: Some(&desc),
            config_json: Some(&config_json),
        };
        let svg = tracewise_export::to_svg(
            &guide,
            &strokes,
            Dimensions::CANVAS,
            &metadata,
        );
        std::fs::write(svg_path, &svg)
            .map_err(|e| format!("Error writing SVG to {}: {e}", svg_path.display()))?;
        eprintln!("SVG written to {} ({} bytes)", svg_path.display(), svg.len());
    }

    Ok(())
}

/// Replay `taps` against `dots`, advancing a manual clock to each tap's
/// timestamp.
fn replay_taps(
    dots: Vec<Point>,
    rules: DotRules,
    taps: &[TapRecord],
) -> Result<(Vec<TapReplay>, u32, Option<ScoreResult>), String> {
    let clock = ManualClock::default();
    let mut sequence = DotSequence::with_rules(dots, rules, &clock).map_err(|e| e.to_string())?;

    let replays = taps
        .iter()
        .map(|tap| {
            clock.set(Duration::from_millis(tap.at_ms));
            let outcome = sequence.tap(Point::new(tap.x, tap.y));
            tracing::debug!(x = tap.x, y = tap.y, at_ms = tap.at_ms, ?outcome, "tap");
            TapReplay {
                x: tap.x,
                y: tap.y,
                at_ms: tap.at_ms,
                outcome,
            }
        })
        .collect();

    Ok((replays, sequence.wrong_taps(), sequence.result()))
}

fn run_dots(args: &DotsArgs) -> Result<(), String> {
    let dots = args.pattern.dots().map_err(|e| e.to_string())?;
    let debounce = Duration::try_from_secs_f64(args.debounce_secs)
        .map_err(|e| format!("Invalid --debounce-secs: {e}"))?;
    let rules = DotRules {
        max_tap_distance: args.max_tap_distance,
        debounce,
    };
    let taps: Vec<TapRecord> = read_json(&args.taps)?;

    tracing::info!(
        pattern = %args.pattern,
        dots = dots.len(),
        taps = taps.len(),
        "replaying tap log"
    );

    let (replays, wrong_taps, result) = replay_taps(dots, rules, &taps)?;

    if args.json {
        let report = DotsReport {
            pattern: args.pattern.to_string(),
            taps: replays,
            wrong_taps,
            result,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Error serializing report: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("Dot Replay: {}\n{}", args.pattern.name(), "=".repeat(40));
    for (i, replay) in replays.iter().enumerate() {
        println!(
            "{:>3}  ({:>6.1}, {:>6.1}) @ {:>6}ms  {:?}",
            i + 1,
            replay.x,
            replay.y,
            replay.at_ms,
            replay.outcome,
        );
    }
    println!();
    println!("Wrong taps: {wrong_taps}");
    match result {
        Some(result) => {
            let tier = FeedbackTier::for_score(result.score);
            println!("Score:      {} ({tier})", result.score);
            println!("Duration:   {}s", result.duration_secs);
        }
        None => println!("Pattern not completed"),
    }
    Ok(())
}

fn run_list() {
    for id in ExerciseId::all() {
        println!("{:<16} {}", id.to_string(), id.name());
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracewise_bench=info,tracewise_scoring=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match &cli.command {
        Command::Score(args) => run_score(args),
        Command::Dots(args) => run_dots(args),
        Command::List => {
            run_list();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
