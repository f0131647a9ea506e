//! Boggle Solver CLI
//!
//! Builds a board, finds every dictionary word on it and prints the results.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use boggle_solver::{
    load_dictionary, unique_words, BoardSolver, Dictionary, Grid, Neighborhood, SearchConfig,
};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stderr = io::stderr();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Grid dimensions written as `4x4`, `10x10x3`, ...
#[derive(Debug, Clone)]
struct Shape(Vec<usize>);

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dims = s
            .split(['x', 'X'])
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_| format!("invalid dimension '{part}' in shape '{s}'"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if dims.iter().any(|&d| d == 0) {
            return Err(format!("shape '{s}' has a zero dimension"));
        }
        Ok(Self(dims))
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NeighborhoodArg {
    /// Orthogonal and diagonal neighbours
    Moore,
    /// Orthogonal neighbours only
    VonNeumann,
}

impl From<NeighborhoodArg> for Neighborhood {
    fn from(arg: NeighborhoodArg) -> Self {
        match arg {
            NeighborhoodArg::Moore => Neighborhood::Moore,
            NeighborhoodArg::VonNeumann => Neighborhood::VonNeumann,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "boggle-solver", version, about = "Find every word on a letter grid")]
struct Cli {
    /// Grid dimensions, e.g. 4x4 or 5x5x2
    #[arg(long, default_value = "4x4")]
    shape: Shape,

    /// Board letters in row-major order (whitespace ignored); random if omitted
    #[arg(long)]
    letters: Option<String>,

    /// Seed for the random board
    #[arg(long, conflicts_with = "letters")]
    seed: Option<u64>,

    /// Word list, one word per line; the built-in list if omitted
    #[arg(long, env = "BOGGLE_WORDS")]
    words: Option<PathBuf>,

    /// Which cells count as adjacent
    #[arg(long, value_enum, default_value_t = NeighborhoodArg::Moore)]
    neighborhood: NeighborhoodArg,

    /// Include the zero offset in the move set (never produces a move)
    #[arg(long)]
    allow_self_move: bool,

    /// Report each word once, at its first occurrence
    #[arg(long)]
    unique: bool,

    /// Search start cells one at a time on the main thread
    #[arg(long)]
    sequential: bool,

    /// Stop starting new cells after this many milliseconds (implies --sequential)
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Print only the words, without paths
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn build_dictionary(cli: &Cli) -> anyhow::Result<Dictionary> {
    let dictionary = match &cli.words {
        Some(path) => Dictionary::from_file(path)
            .with_context(|| format!("loading word list {}", path.display()))?,
        None => load_dictionary().context("loading built-in word list")?,
    };
    info!(words = dictionary.len(), "dictionary ready");
    Ok(dictionary)
}

fn build_grid(cli: &Cli) -> anyhow::Result<Grid> {
    let shape = cli.shape.0.clone();
    let grid = match (&cli.letters, cli.seed) {
        (Some(letters), _) => {
            let letters: Vec<char> = letters.chars().filter(|c| !c.is_whitespace()).collect();
            Grid::new(shape, letters).context("building board from --letters")?
        }
        (None, Some(seed)) => Grid::seeded(shape, seed).context("building seeded board")?,
        (None, None) => {
            Grid::random(shape, &mut rand::thread_rng()).context("building random board")?
        }
    };
    Ok(grid)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = build_dictionary(&cli)?;
    let grid = build_grid(&cli)?;

    let config = SearchConfig::new()
        .with_neighborhood(cli.neighborhood.into())
        .with_zero_offset(cli.allow_self_move);
    let solver = BoardSolver::new(&grid, &dictionary, config).context("building solver")?;

    println!("Board:");
    print!("{grid}");
    println!();

    let start = Instant::now();
    let matches = if cli.sequential || cli.time_limit_ms.is_some() {
        let deadline = cli
            .time_limit_ms
            .map(|ms| start + Duration::from_millis(ms));
        let row = grid.shape()[0].max(1);
        let mut stderr = io::stderr();
        let outcome = solver.solve_sequential(deadline, |done, total| {
            if done % row == 0 || done == total {
                let _ = write!(stderr, ".");
                let _ = stderr.flush();
            }
        });
        let _ = writeln!(stderr);
        if !outcome.complete {
            warn!(
                searched = outcome.cells_searched,
                total = grid.len(),
                "time limit reached before every cell was searched"
            );
        }
        outcome.matches
    } else {
        let spinner = Spinner::new("Searching...");
        let matches = solver.solve();
        spinner.stop();
        matches
    };
    info!(elapsed = ?start.elapsed(), matches = matches.len(), "search finished");

    let matches = if cli.unique {
        unique_words(matches)
    } else {
        matches
    };

    println!("Found {} words", matches.len());
    let mut stdout = io::stdout().lock();
    for found in &matches {
        if cli.quiet {
            writeln!(stdout, "{}", found.word)?;
        } else {
            writeln!(stdout, "{found}")?;
        }
    }
    Ok(())
}
