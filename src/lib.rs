//! Word-guessing heuristics
//!
//! A word-guessing puzzle engine that filters a word list against the feedback
//! of earlier guesses, scores the remaining candidates with letter-frequency
//! heuristics and simulates whole games to compare those heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_heuristics::config::EngineConfig;
//! use wordle_heuristics::core::{LetterStatus, Word, guess_statuses};
//! use wordle_heuristics::solver::{Engine, StrategyType, simulate};
//! use wordle_heuristics::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};
//!
//! let guess = Word::new("crane").unwrap();
//! let solution = Word::new("cigar").unwrap();
//! assert_eq!(guess_statuses(&guess, &solution)[0], LetterStatus::Correct);
//!
//! let allowed = words_from_slice(ALLOWED).unwrap();
//! let answers = words_from_slice(ANSWERS).unwrap();
//! let engine = Engine::new(&allowed, &answers, EngineConfig::default()).unwrap();
//!
//! for strategy in StrategyType::all() {
//!     let result = simulate(&engine, &strategy, 5);
//!     assert_eq!(result.completed, 5);
//! }
//! ```

// Letters, words and feedback
pub mod core;

// Filtering, scoring and simulation
pub mod solver;

// Word lists
pub mod wordlists;

// Engine settings
pub mod config;

// Error types
pub mod error;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
