//! Terminal output formatting
//!
//! Display utilities for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_day, print_simulation_results, print_solve_result, print_suggestions};
