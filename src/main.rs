//! Word-guessing heuristics - CLI
//!
//! Simulates the letter-frequency strategies against the daily solution list,
//! traces single games and suggests next guesses for a day in progress.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use wordle_heuristics::{
    commands::{SimulateConfig, run_simulation, solve_word, suggest_guesses},
    config::{DEFAULT_MAX_STEPS, DEFAULT_WORD_LENGTH, EngineConfig},
    core::{Alphabet, AlphabetKind, Word},
    error::EngineError,
    logging::{default_filter, init_tracing},
    output::{print_day, print_simulation_results, print_solve_result, print_suggestions},
    solver::{Engine, StrategyType, day::day_offset_at},
    wordlists::{
        ALLOWED, ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_heuristics",
    about = "Compare letter-frequency guessing strategies on a word-guessing puzzle",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: distinct, positional, occurrences (default: all of them)
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Wordlist: 'all' (default), 'answers' (solutions only), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Solution list file (default: embedded answers, or the -w file)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Alphabet used to split file words into letters: english, hungarian
    #[arg(long, global = true, default_value = "english")]
    alphabet: String,

    /// Letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Guesses allowed before a game counts as lost
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Log more (-v info, -vv debug, -vvv trace); WORDLE_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate games over consecutive days and compare strategies (default)
    Simulate {
        /// Number of days to simulate
        #[arg(short = 'n', long, default_value = "100")]
        samples: usize,

        /// Run samples on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Trace one game against a given solution
    Solve {
        /// The solution word
        word: String,
    },

    /// Suggest the next guess for a day in progress
    Suggest {
        /// Day offset from the epoch
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        day: i64,

        /// Guesses made so far
        guesses: Vec<String>,
    },

    /// Show the solution for a day
    Day {
        /// Day offset from the epoch
        #[arg(allow_negative_numbers = true, conflicts_with = "today")]
        offset: Option<i64>,

        /// Use the current date
        #[arg(long)]
        today: bool,
    },
}

/// Load (`word_list`, `solutions`) based on the -w and --solutions flags
///
/// - "all": every allowed word for guessing, the embedded answers as solutions
/// - "answers": the embedded answers for both
/// - "<path>": the file for both, unless --solutions names another file
fn load_wordlists(
    wordlist_mode: &str,
    solutions: Option<&PathBuf>,
    alphabet: &Alphabet,
) -> Result<(Vec<Word>, Vec<Word>)> {
    let (word_list, default_solutions) = match wordlist_mode {
        "all" => (words_from_slice(ALLOWED)?, words_from_slice(ANSWERS)?),
        "answers" => {
            let answers = words_from_slice(ANSWERS)?;
            (answers.clone(), answers)
        }
        path => {
            let words = load_from_file(path, alphabet)
                .with_context(|| format!("Failed to load word list {path}"))?;
            (words.clone(), words)
        }
    };

    let solutions = match solutions {
        Some(path) => load_from_file(path, alphabet)
            .with_context(|| format!("Failed to load solution list {}", path.display()))?,
        None => default_solutions,
    };

    Ok((word_list, solutions))
}

/// Strategies named by -s, or all of them
fn select_strategies(name: Option<&str>) -> Result<Vec<StrategyType>, EngineError> {
    match name {
        None => Ok(StrategyType::all().to_vec()),
        Some(name) => StrategyType::from_name(name)
            .map(|s| vec![s])
            .ok_or_else(|| EngineError::UnknownStrategy(name.to_string())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(default_filter(cli.verbose));

    let kind = AlphabetKind::from_name(&cli.alphabet)
        .with_context(|| format!("Unknown alphabet '{}'", cli.alphabet))?;
    let alphabet = Alphabet::new(kind);
    let strategies = select_strategies(cli.strategy.as_deref())?;

    let (word_list, solutions) =
        load_wordlists(&cli.wordlist, cli.solutions.as_ref(), &alphabet)?;
    let config = EngineConfig::new(cli.word_length, cli.max_steps);
    let engine = Engine::new(&word_list, &solutions, config)?;

    let command = cli.command.unwrap_or(Commands::Simulate {
        samples: 100,
        parallel: false,
    });

    match command {
        Commands::Simulate { samples, parallel } => {
            let config = SimulateConfig::new(samples)
                .parallel(parallel)
                .with_progress(true);
            let results = run_simulation(&engine, &strategies, config);
            print_simulation_results(&results, engine.config().max_steps);
        }
        Commands::Solve { word } => {
            let target = Word::parse(&word, &alphabet)?;
            for strategy in &strategies {
                let result = solve_word(&engine, strategy, &target)?;
                print_solve_result(&result, cli.verbose > 0);
            }
        }
        Commands::Suggest { day, guesses } => {
            let guesses = guesses
                .iter()
                .map(|g| Word::parse(g, &alphabet))
                .collect::<Result<Vec<_>, _>>()?;
            let suggestions = suggest_guesses(&engine, &strategies, day, &guesses)?;
            print_suggestions(&suggestions);
        }
        Commands::Day { offset, today } => {
            let offset = if today { today_offset()? } else { offset.unwrap_or(0) };
            if let Some(day) = engine.solution_for_day(offset) {
                print_day(offset, &day);
            }
        }
    }

    Ok(())
}

/// Day offset of the current wall-clock time
fn today_offset() -> Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before 1970")?;
    let ms = i64::try_from(now.as_millis()).context("System clock out of range")?;
    Ok(day_offset_at(ms))
}
