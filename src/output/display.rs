//! Display functions for command results

use super::formatters::{
    create_progress_bar, statuses_to_emoji, statuses_to_symbols, strategy_label,
};
use crate::commands::{SolveResult, Suggestions};
use crate::solver::SimulationResult;
use crate::solver::day::DaySolution;
use colored::Colorize;

/// Print a comparison table of simulation results
pub fn print_simulation_results(results: &[SimulationResult], max_steps: usize) {
    println!("\n{}", "═".repeat(72).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(72).cyan());

    if let Some(first) = results.first() {
        println!(
            "\n{} samples per strategy, step cap {max_steps}",
            first.samples
        );
    }
    for result in results {
        println!("   {}", strategy_label(result.strategy).bright_black());
    }

    println!(
        "\n {:<12} {:>8} {:>10} {:>5} {:>5} {:>7} {:>8}",
        "strategy", "mean", "time", "min", "max", "losses", "aborted"
    );
    println!(" {}", "─".repeat(62).bright_black());

    let best = results
        .iter()
        .filter(|r| r.completed > 0)
        .map(|r| r.mean_steps)
        .fold(f64::INFINITY, f64::min);

    for result in results {
        let mean = format!("{:.3}", result.mean_steps);
        let mean = if result.completed > 0 && (result.mean_steps - best).abs() < f64::EPSILON {
            mean.green().bold()
        } else {
            mean.bright_yellow()
        };
        let losses = if result.losses > 0 {
            result.losses.to_string().red()
        } else {
            result.losses.to_string().normal()
        };

        println!(
            " {:<12} {:>8} {:>9.2}s {:>5} {:>5} {:>7} {:>8}",
            result.strategy,
            mean,
            result.elapsed.as_secs_f64(),
            result.min_steps,
            result.max_steps,
            losses,
            result.aborted
        );
    }

    for result in results {
        print_distribution(result);
    }
}

fn print_distribution(result: &SimulationResult) {
    if result.completed == 0 {
        return;
    }

    println!("\n📈 {}", result.strategy.bright_cyan().bold());
    for (&steps, &count) in &result.distribution {
        let pct = count as f64 / result.completed as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {steps:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print one traced game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let outcome = &result.outcome;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        outcome.solution.text().to_uppercase().bright_yellow().bold(),
        result.strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in outcome.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.text().to_uppercase(),
            statuses_to_emoji(&step.statuses)
        );
        if verbose {
            println!("  Feedback:    {}", statuses_to_symbols(&step.statuses));
            println!("  Chosen from: {} candidates", step.candidates);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.steps())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved within {} guesses ({} played)",
                result.max_steps,
                outcome.steps()
            )
            .red()
            .bold()
        );
    }
}

/// Print the history of a day and each strategy's next guess
pub fn print_suggestions(suggestions: &Suggestions) {
    println!("\n{} {}", "Day".bright_cyan().bold(), suggestions.offset);

    for (guess, statuses) in &suggestions.history {
        println!(
            "   {} {}",
            guess.text().to_uppercase(),
            statuses_to_emoji(statuses)
        );
    }

    if suggestions.solved() {
        println!("\n{}", "✅ Already solved".green().bold());
        return;
    }

    println!("\n{} candidates remain", suggestions.candidates);
    for pick in &suggestions.picks {
        println!(
            "   {:<12} {}",
            pick.strategy,
            pick.guess.text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the solution of a day
pub fn print_day(offset: i64, day: &DaySolution<'_>) {
    println!(
        "Day {offset}: {} (#{} in the solution list)",
        day.word.text().to_uppercase().bright_yellow().bold(),
        day.index
    );
    println!("Next day starts at {} ms", day.next_day_ms);
}
