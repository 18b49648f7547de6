//! QueenClimb command-line host.
//!
//! Usage:
//!   # Run a random board to completion
//!   queenclimb run --seed 42
//!
//!   # Start from a fixed board and print every step
//!   queenclimb step --rows 0,0,0,0,0,0 --count 5
//!
//!   # Drive the search by hand: step, run, reset, limit, show, quit
//!   queenclimb interactive
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use queenclimb::{
    attacking_pairs, console, BoardState, QueenMove, RunOutcome, SearchConfig, SearchController, SearchSnapshot,
    CLI_DEFAULT_STEP_LIMIT, DEFAULT_CONFIG_FILE, DEFAULT_SIZE,
};

type Controller = SearchController<DEFAULT_SIZE>;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "queenclimb", version, about = "Greedy hill climbing for the 6-queens puzzle")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the search until solved, stalled or the step limit
    Run {
        #[command(flatten)]
        search: SearchArgs,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply single steps, printing the state after each
    Step {
        #[command(flatten)]
        search: SearchArgs,

        /// Number of steps to apply
        #[arg(long, default_value_t = 1)]
        count: u64,
    },
    /// Read step/run/reset/limit/show/quit commands from stdin
    Interactive {
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Configuration file (TOML, or YAML by extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Starting board as comma separated rows, e.g. 0,0,0,0,0,0
    #[arg(long)]
    rows: Option<BoardState>,

    /// Maximum steps per run
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log level for search events
    #[arg(long)]
    log_level: Option<String>,

    /// Skip the banner
    #[arg(long)]
    quiet: bool,
}

impl SearchArgs {
    fn load_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => SearchConfig::load(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("failed to load {}", DEFAULT_CONFIG_FILE))?,
            None => SearchConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.random_seed = Some(seed);
        }
        if let Some(rows) = &self.rows {
            config.initial_rows = Some(rows.rows().to_vec());
        }
        if let Some(limit) = self.max_steps {
            config.step_limit = Some(limit);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.quiet {
            config.logging.banner = false;
        }
        if config.step_limit.is_none() {
            config.step_limit = Some(CLI_DEFAULT_STEP_LIMIT);
        }
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct RunReport<'a> {
    #[serde(flatten)]
    outcome: &'a RunOutcome<DEFAULT_SIZE>,
    candidates: &'a [QueenMove],
    chosen_move: Option<QueenMove>,
    attacking_pairs: Vec<(usize, usize)>,
    improving_steps: u64,
    plateau_steps: u64,
    plateau_rate: f64,
}

const COMMANDS: &str = "step, run, reset, limit <n|none>, show, quit";

fn join_or_none(items: Vec<String>) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(" ")
    }
}

fn print_state(controller: &Controller) {
    print_snapshot(&controller.snapshot());
    let pairs = attacking_pairs(controller.working())
        .into_iter()
        .map(|(a, b)| format!("({}, {})", a, b))
        .collect();
    println!("Attacking pairs: {}", join_or_none(pairs));
    let candidates = controller
        .current_candidates()
        .iter()
        .map(QueenMove::to_string)
        .collect();
    println!(
        "Possible moves (H={}): {}",
        controller.table_baseline(),
        join_or_none(candidates)
    );
    match controller.current_chosen_move() {
        Some(chosen) => println!("Chosen move: {}", chosen),
        None => println!("Chosen move: none"),
    }
}

fn print_snapshot(snapshot: &SearchSnapshot<DEFAULT_SIZE>) {
    let width = DEFAULT_SIZE * 2 + 6;
    println!(
        "{:<width$}{}",
        format!("Start ({} attacks)", snapshot.attacks_reference),
        format!("Current ({} attacks)", snapshot.attacks_working),
        width = width
    );
    let reference = snapshot.reference.to_string();
    let working = snapshot.working.to_string();
    for (left, right) in reference.lines().zip(working.lines()) {
        println!("{:<width$}{}", left, right, width = width);
    }
    println!("Moves: {}  Status: {}", snapshot.move_count, snapshot.status);
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run(config: &SearchConfig, json: bool) -> Result<()> {
    let mut controller = Controller::from_config(config)?;
    let outcome = controller.run_to_completion();

    if json {
        let stats = controller.statistics();
        let report = RunReport {
            outcome: &outcome,
            candidates: controller.current_candidates(),
            chosen_move: controller.current_chosen_move(),
            attacking_pairs: attacking_pairs(controller.working()),
            improving_steps: stats.improving_steps,
            plateau_steps: stats.plateau_steps,
            plateau_rate: stats.plateau_rate(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_state(&controller);
        println!(
            "Stopped: {} after {} steps",
            outcome.stop_reason, outcome.steps_taken
        );
    }
    Ok(())
}

fn step(config: &SearchConfig, count: u64) -> Result<()> {
    let mut controller = Controller::from_config(config)?;
    print_state(&controller);

    for _ in 0..count {
        if controller.status().is_terminal() {
            break;
        }
        controller.step();
        println!();
        print_state(&controller);
    }
    Ok(())
}

fn interactive(config: &SearchConfig) -> Result<()> {
    let mut controller = Controller::from_config(config)?;
    print_state(&controller);
    println!("Commands: {}", COMMANDS);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read command")?;

        let mut words = line.split_whitespace();
        match words.next().unwrap_or("") {
            "" => continue,
            "step" | "s" => {
                controller.step();
                print_state(&controller);
            }
            "run" | "r" => {
                let outcome = controller.run_to_completion();
                print_state(&controller);
                println!(
                    "Stopped: {} after {} steps",
                    outcome.stop_reason, outcome.steps_taken
                );
            }
            "reset" | "n" => {
                controller.reset();
                print_state(&controller);
            }
            "limit" => {
                if let Some(word) = words.next() {
                    match parse_limit(word) {
                        Ok(limit) => controller.set_step_limit(limit),
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    }
                }
                match controller.step_limit() {
                    Some(n) => println!("Step limit: {}", n),
                    None => println!("Step limit: none"),
                }
            }
            "show" => print_state(&controller),
            "quit" | "q" | "exit" => break,
            other => println!("Unknown command '{}'. Commands: {}", other, COMMANDS),
        }
    }
    Ok(())
}

fn parse_limit(word: &str) -> Result<Option<u64>> {
    if word == "none" {
        return Ok(None);
    }
    match word.parse::<u64>() {
        Ok(0) | Err(_) => anyhow::bail!("step limit must be a positive number or 'none'"),
        Ok(n) => Ok(Some(n)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run { search, json } => {
            let config = search.load_config()?;
            // Logs share stdout, so JSON output runs without them.
            if !json {
                console::init_with(&config.logging.level, config.logging.banner);
            }
            run(&config, json)
        }
        Command::Step { search, count } => {
            let config = search.load_config()?;
            console::init_with(&config.logging.level, config.logging.banner);
            step(&config, count)
        }
        Command::Interactive { search } => {
            let config = search.load_config()?;
            console::init_with(&config.logging.level, config.logging.banner);
            interactive(&config)
        }
    }
}
