use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
#[macro_use]
extern crate text_io;

use boggle_climb::boggle::adjacency::AdjacencyCache;
use boggle_climb::boggle::board::Grid;
use boggle_climb::boggle::dictionary::Dictionary;
use boggle_climb::boggle::finder::{BoggleFinder, FoundWords};
use boggle_climb::climb::{climb_restarts, ClimbReport, HillClimber};
use boggle_climb::config::{parse_var, Config};
use boggle_climb::utils::serialization;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Solve(String),
    Climb {
        board: Option<String>,
        report: Option<PathBuf>,
    },
    Play,
}

/// Reads the subcommand and applies any flags on top of `config`
fn parse_args<I>(args: I, config: &mut Config) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let command = match args.peek().map(|s| s.as_str()) {
        Some("solve") | Some("climb") | Some("play") => args.next(),
        _ => None,
    };

    let mut positional = Vec::new();
    let mut board = None;
    let mut report = None;
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{} expects a value", flag))
        };
        match arg.as_str() {
            "--iterations" => config.iterations = parse_var("--iterations", &value(&arg)?)?,
            "--restarts" => config.restarts = parse_var("--restarts", &value(&arg)?)?,
            "--seed" => config.seed = Some(parse_var("--seed", &value(&arg)?)?),
            "--size" => config.size = parse_var("--size", &value(&arg)?)?,
            "--min-length" => config.min_length = parse_var("--min-length", &value(&arg)?)?,
            "--objective" => config.objective = parse_var("--objective", &value(&arg)?)?,
            "--wordlist" => config.wordlist = PathBuf::from(value(&arg)?),
            "--board" => board = Some(value(&arg)?),
            "--report" => report = Some(PathBuf::from(value(&arg)?)),
            "--quiet" => config.verbose = false,
            flag if flag.starts_with("--") => bail!("Unknown flag {}", flag),
            _ => positional.push(arg.clone()),
        }
    }

    match command.as_deref() {
        Some("solve") => {
            if positional.is_empty() {
                bail!("solve expects the board letters");
            }
            Ok(Command::Solve(positional.concat()))
        }
        Some("play") => Ok(Command::Play),
        _ => {
            if let Some(extra) = positional.first() {
                bail!("Unexpected argument {}", extra);
            }
            Ok(Command::Climb { board, report })
        }
    }
}

fn load_dictionary(config: &Config) -> Result<Dictionary> {
    let file = File::open(&config.wordlist)
        .with_context(|| format!("Failed to open word list {}", config.wordlist.display()))?;
    let dict = Dictionary::from_reader(BufReader::new(file), config.min_length)?;
    Ok(dict)
}

fn print_words(grid: &Grid, found: &FoundWords) {
    print!("{}", grid);
    println!("{}", found.sorted().join(" "));
    println!("Words: {}\tScore: {}", found.len(), found.score());
}

fn solve_board(letters: &str, dict: &Dictionary) -> Result<()> {
    let grid: Grid = letters.parse().context("Invalid board")?;
    let mut cache = AdjacencyCache::new();
    let adjacency = cache.neighbors_of(grid.len())?;
    let found = BoggleFinder::new(dict, &adjacency).find_words(&grid)?;
    print_words(&grid, &found);
    Ok(())
}

fn play_boggle(dict: &Dictionary) -> Result<()> {
    let mut cache = AdjacencyCache::new();
    loop {
        println!("Enter Board (empty line to quit):");
        let line: String = match try_read!("{}\n") {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            break;
        }
        let grid: Grid = match line.parse() {
            Ok(grid) => grid,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        let adjacency = cache.neighbors_of(grid.len())?;
        let found = BoggleFinder::new(dict, &adjacency).find_words(&grid)?;
        print_words(&grid, &found);
    }
    Ok(())
}

fn climb_boards(
    config: &Config,
    dict: &Dictionary,
    board: Option<&str>,
    report: Option<&PathBuf>,
) -> Result<()> {
    let board = match board {
        Some("reference") => Some(Grid::reference_5x5()),
        Some(letters) => Some(letters.parse::<Grid>().context("Invalid board")?),
        None => None,
    };
    let n2 = match &board {
        Some(grid) => grid.len(),
        None => config.cells()?,
    };

    let mut cache = AdjacencyCache::new();
    let adjacency = cache.neighbors_of(n2)?;
    let finder = BoggleFinder::new(dict, &adjacency);
    let climber = HillClimber::new(finder, config.climb_settings());
    let seed = config.seed.unwrap_or_else(rand::random);

    info!(
        "Climbing {} iterations x {} restarts (seed {})",
        config.iterations, config.restarts, seed
    );
    let outcome = climb_restarts(&climber, board.as_ref(), config.restarts, seed)?;
    let found = finder.find_words(&outcome.best.grid)?;
    print_words(&outcome.best.grid, &found);

    if let Some(path) = report {
        let settings = climber.settings();
        let report = ClimbReport::new(&outcome, &found, settings.objective, settings.iterations, seed);
        serialization::save_json(&report, path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!("Wrote report to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;
    let command = parse_args(std::env::args().skip(1), &mut config)?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME").replace('-', "_")))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dict = load_dictionary(&config)?;

    match command {
        Command::Solve(letters) => solve_board(&letters, &dict),
        Command::Play => play_boggle(&dict),
        Command::Climb { board, report } => {
            climb_boards(&config, &dict, board.as_deref(), report.as_ref())
        }
    }
}
