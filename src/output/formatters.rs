//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::solver::StrategyType;
use indicatif::{ProgressBar, ProgressStyle};

/// Format statuses as emoji tiles
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses
        .iter()
        .map(|status| match status {
            LetterStatus::Absent => '⬜',
            LetterStatus::Present => '🟨',
            LetterStatus::Correct => '🟩',
        })
        .collect()
}

/// Format statuses as `G`/`Y`/`-` codes
#[must_use]
pub fn statuses_to_symbols(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|s| s.symbol()).collect()
}

/// Strategy name followed by its description, or the bare name if unknown
#[must_use]
pub fn strategy_label(name: &str) -> String {
    match StrategyType::from_name(name) {
        Some(strategy) => format!("{name}: {}", strategy.description()),
        None => name.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for one strategy's simulation batch
///
/// Hidden when `visible` is false so library callers and tests stay quiet.
#[must_use]
pub fn simulation_progress(samples: usize, strategy: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {msg:>12} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░"));

    let pb = ProgressBar::new(samples as u64);
    pb.set_style(style);
    pb.set_message(strategy.to_string());
    pb
}
