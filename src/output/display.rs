//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, percent};
use crate::commands::{ColorResult, SimulationResult, TreeSummary};
use crate::game::{GameOutcome, GameRecord, MAX_TURNS, Stats};
use colored::Colorize;

const BAR_WIDTH: usize = 40;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n⏱  {}", "Run:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.3?}", result.duration);
    println!("   Games/second:     {:.1}", result.games_per_second);

    print_stats(&result.stats, "This run");

    if let Some(tree) = &result.tree {
        println!(
            "\n🌳 Recorded {} guess nodes (depth {})",
            tree.node_count(),
            tree.depth()
        );
    }
}

/// Print statistics as a two-panel text chart
///
/// The first panel compares losses with wins, the second shows wins by turn.
pub fn print_stats(stats: &Stats, title: &str) {
    let total = stats.total_games();
    let wins = stats.total_wins();
    let losses = stats.losses();

    println!(
        "\n📊 {} {}",
        title.bright_cyan().bold(),
        format!("(distribution of {total} games)").bright_black()
    );

    let outcome_max = wins.max(losses) as f64;
    println!(
        "   lost: {} {losses:6} ({:5.1}%)",
        create_progress_bar(losses as f64, outcome_max, BAR_WIDTH).red(),
        percent(losses, total)
    );
    println!(
        "   win:  {} {wins:6} ({:5.1}%)",
        create_progress_bar(wins as f64, outcome_max, BAR_WIDTH).green(),
        percent(wins, total)
    );

    println!("\n📈 {}", "Win distribution".bright_cyan().bold());
    let turn_max = stats.wins().iter().copied().max().unwrap_or(0) as f64;
    for turn in 1..=MAX_TURNS {
        let count = stats.wins_at(turn);
        println!(
            "   {turn}:    {} {count:6} ({:5.1}%)",
            create_progress_bar(count as f64, turn_max, BAR_WIDTH).green(),
            percent(count, wins)
        );
    }

    if let Some(average) = stats.average_winning_turn() {
        println!(
            "\n   Average winning turn: {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
}

/// Print every turn of a single game
pub fn print_play_result(record: &GameRecord, seed: u64) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Hidden word: {}   {}",
        record.hidden.text().to_uppercase().bright_yellow().bold(),
        format!("(seed {seed})").bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in record.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}",
            i + 1,
            colored_guess(&turn.guess, turn.coloring),
            format!("picked from {} candidates", turn.candidates).bright_black()
        );
    }

    println!();
    match record.outcome {
        GameOutcome::Won { turn } => println!(
            "{}",
            format!(
                "✅ Won in {turn} {}!",
                if turn == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        GameOutcome::Lost => println!(
            "{}",
            format!("❌ Lost after {MAX_TURNS} guesses").red().bold()
        ),
    }
}

/// Print the coloring of one guess
pub fn print_color_result(result: &ColorResult) {
    println!(
        "{}  {}  {}",
        colored_guess(&result.guess, result.coloring),
        result.coloring.to_emoji(),
        result.coloring
    );
}

/// Print a game tree summary
pub fn print_tree_summary(summary: &TreeSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME TREE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Guess nodes:      {}", summary.node_count);
    println!("   Distinct paths:   {}", summary.path_count);
    println!("   Deepest path:     {}", summary.depth);

    if !summary.openings.is_empty() {
        println!("\n🎯 {}", "Most common openings".bright_cyan().bold());
        for (guess, count) in &summary.openings {
            println!("   {:<6} {count} paths", guess.to_uppercase());
        }
    }

    if !summary.sample_paths.is_empty() {
        println!("\n🌳 {}", "Paths".bright_cyan().bold());
        for path in &summary.sample_paths {
            println!("   {}", path.join(" → ").to_uppercase());
        }
    }
}
