//! Colored console output for search events.
//!
//! Provides a custom `tracing` layer that formats QueenClimb search events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (reset, run end)
//! - **WARN**: Step limit reached
//! - **DEBUG**: Individual steps and rejected steps
//! - **TRACE**: Heuristic table evaluations

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of every event this layer renders.
const TARGET_PREFIX: &str = "queenclimb";

/// Initializes console output at `info` level with the banner.
pub fn init() {
    init_with("info", true);
}

/// Initializes console output.
///
/// `level` is the filter for QueenClimb targets when `RUST_LOG` is unset;
/// an unparsable level falls back to `info`. A set `RUST_LOG` replaces it.
/// Safe to call multiple times - only the first call has effect.
pub fn init_with(level: &str, banner: bool) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        if banner {
            print_banner();
        }

        let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy("")
                .add_directive(default_directive(level))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

// Covers every `queenclimb*` target; other crates stay at `warn`.
fn default_directive(level: &str) -> Directive {
    format!("{}={}", TARGET_PREFIX, level)
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map(|e| e.elapsed().as_secs_f64()).unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
  ___                        ____ _ _           _
 / _ \ _   _  ___  ___ _ __ / ___| (_)_ __ ___ | |__
| | | | | | |/ _ \/ _ \ '_ \ |   | | | '_ ` _ \| '_ \
| |_| | |_| |  __/  __/ | | | |___| | | | | | | | |_) |
 \__\_\\__,_|\___|\___|_| |_|\____|_|_|_| |_| |_|_.__/
"#;

    let version_line = format!("              v{} - Greedy N-Queens Hill Climbing\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(TARGET_PREFIX) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    status: Option<String>,
    reason: Option<String>,
    step: Option<u64>,
    steps: Option<u64>,
    moves: Option<u64>,
    file: Option<u64>,
    to_row: Option<u64>,
    attacks: Option<u64>,
    candidates: Option<u64>,
    baseline: Option<u64>,
    best: Option<u64>,
    limit: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "status" => self.status = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "moves" => self.moves = Some(value),
            "file" => self.file = Some(value),
            "to_row" => self.to_row = Some(value),
            "attacks" => self.attacks = Some(value),
            "candidates" => self.candidates = Some(value),
            "baseline" => self.baseline = Some(value),
            "best" => self.best = Some(value),
            "limit" => self.limit = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        // Counts are never negative; drop anything that is.
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "reset" => format_reset(v),
        "step" => format_step(v),
        "step_rejected" => format_step_rejected(v),
        "evaluate" => format_evaluate(v),
        "step_limit" => format_step_limit(v),
        "run_end" => format_run_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_reset(v: &EventVisitor) -> String {
    format!(
        "{} {} Reset │ {} │ {} candidates │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_attacks(v.attacks),
        v.candidates.unwrap_or(0).bright_yellow(),
        v.status.as_deref().unwrap_or("idle").white().bold()
    )
}

fn format_step(v: &EventVisitor) -> String {
    format!(
        "{} {} Step {:>8} │ file {} → row {} │ {} │ {} candidates",
        format_elapsed(),
        "✓".bright_green(),
        v.step.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.file.unwrap_or(0).bright_yellow(),
        v.to_row.unwrap_or(0).bright_yellow(),
        format_attacks(v.attacks),
        v.candidates.unwrap_or(0)
    )
}

fn format_step_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Step rejected │ {}",
        format_elapsed(),
        "✗".bright_red(),
        v.reason.as_deref().unwrap_or("unknown").bright_black()
    )
}

fn format_evaluate(v: &EventVisitor) -> String {
    format!(
        "{} {} H={} │ best {} │ {} candidates",
        format_elapsed(),
        "·".bright_black(),
        v.baseline.unwrap_or(0),
        v.best.unwrap_or(0),
        v.candidates.unwrap_or(0)
    )
    .bright_black()
    .to_string()
}

fn format_step_limit(v: &EventVisitor) -> String {
    format!(
        "{} {} Step limit of {} reached │ {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        v.limit
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        format_attacks(v.attacks)
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let reason = v.reason.as_deref().unwrap_or("unknown");
    let reason_colored = match reason {
        "solved" => "SOLVED".bright_green().bold().to_string(),
        "stalled" => "STALLED".bright_red().bold().to_string(),
        _ => "STEP LIMIT".bright_yellow().bold().to_string(),
    };

    format!(
        "{} {} Run complete │ {} steps │ {} moves total │ {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.moves.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_attacks(v.attacks),
        reason_colored
    )
}

fn format_attacks(attacks: Option<u64>) -> String {
    match attacks {
        Some(0) => "0 attacks".bright_green().to_string(),
        Some(n) => format!("{} attacks", n).bright_red().to_string(),
        None => "N/A".white().to_string(),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
