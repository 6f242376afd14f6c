//! Wordle Simulator - CLI
//!
//! Simulates Wordle games with random candidate elimination, keeps running
//! statistics and a merged guess tree on disk, and charts the results.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{LevelFilter, info};
use rand::Rng;
use std::path::{Path, PathBuf};
use wordle_sim::{
    commands::{
        PlayConfig, SimulationConfig, color_guess, play_one, run_simulation, save_run,
        summarize_tree,
    },
    game::{GameTree, Stats},
    interactive::{ChartApp, run_chart},
    output::{
        print_color_result, print_play_result, print_simulation_result, print_stats,
        print_tree_summary,
    },
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle simulator using random candidate elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one 5-letter word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "WORDLE_SIM_WORDS")]
    words: Option<PathBuf>,

    /// Statistics file
    #[arg(long, global = true, env = "WORDLE_SIM_STATS", default_value = "stats.json")]
    stats: PathBuf,

    /// Game tree file
    #[arg(long, global = true, env = "WORDLE_SIM_TREE", default_value = "tree.json")]
    tree_file: PathBuf,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate many games and add them to the saved statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also merge the guess sequences into the game tree
        #[arg(short, long)]
        tree: bool,

        /// Open the chart when done
        #[arg(short, long)]
        chart: bool,

        /// Do not read or update the saved files
        #[arg(long)]
        no_save: bool,
    },

    /// Play one game and show every guess
    Play {
        /// Hidden word (default: random word from the list)
        #[arg(long)]
        hidden: Option<String>,

        /// Seed for reproducible games (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the coloring of a guess against a hidden word
    Color {
        /// The hidden word
        hidden: String,

        /// The guessed word
        guess: String,
    },

    /// Print the saved statistics
    Stats,

    /// Chart the saved statistics in the terminal
    Chart,

    /// Summarize the saved game tree
    Tree {
        /// Number of openings and paths to list
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Create empty statistics and game tree files
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load the word list from `--words`, or fall back to the built-in list
fn load_words(path: Option<&Path>) -> Result<WordList> {
    let words = match path {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => WordList::embedded(),
    };
    info!("loaded {} words", words.len());
    Ok(words)
}

fn load_stats(path: &Path) -> Result<Stats> {
    Stats::load(path).with_context(|| {
        format!(
            "failed to load statistics from {} (run `wordle_sim init` to create it)",
            path.display()
        )
    })
}

fn load_tree(path: &Path) -> Result<GameTree> {
    GameTree::load(path).with_context(|| {
        format!(
            "failed to load game tree from {} (run `wordle_sim init` to create it)",
            path.display()
        )
    })
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::rng().random();
        println!("Using random seed {seed}");
        seed
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Simulate {
            count,
            seed,
            tree,
            chart,
            no_save,
        } => {
            let options = SimulateOptions {
                count,
                seed,
                tree,
                chart,
                no_save,
            };
            run_simulate_command(&cli.stats, &cli.tree_file, cli.words.as_deref(), &options)
        }
        Commands::Play { hidden, seed } => {
            run_play_command(cli.words.as_deref(), hidden, seed)
        }
        Commands::Color { hidden, guess } => {
            let result = color_guess(&hidden, &guess)?;
            print_color_result(&result);
            Ok(())
        }
        Commands::Stats => {
            let stats = load_stats(&cli.stats)?;
            print_stats(&stats, "All games");
            Ok(())
        }
        Commands::Chart => {
            let stats = load_stats(&cli.stats)?;
            run_chart(ChartApp::new(stats, "All games"))
        }
        Commands::Tree { limit } => {
            let tree = load_tree(&cli.tree_file)?;
            print_tree_summary(&summarize_tree(&tree, limit));
            Ok(())
        }
        Commands::Init { force } => run_init_command(&cli.stats, &cli.tree_file, force),
    }
}

struct SimulateOptions {
    count: usize,
    seed: Option<u64>,
    tree: bool,
    chart: bool,
    no_save: bool,
}

fn run_simulate_command(
    stats_path: &Path,
    tree_path: &Path,
    words_path: Option<&Path>,
    options: &SimulateOptions,
) -> Result<()> {
    let words = load_words(words_path)?;

    // Saved files are read up front so a bad file fails before the run
    let saved = if options.no_save {
        None
    } else {
        let stats = load_stats(stats_path)?;
        let tree = if options.tree {
            Some(load_tree(tree_path)?)
        } else {
            None
        };
        Some((stats, tree))
    };

    let seed = resolve_seed(options.seed);
    let config = SimulationConfig {
        record_tree: options.tree,
        show_progress: true,
        ..SimulationConfig::new(options.count, seed)
    };

    println!("Simulating {} games...", options.count);
    let result = run_simulation(&words, &config).context("simulation aborted")?;
    print_simulation_result(&result);

    let chart_stats = match saved {
        Some((stats, saved_tree)) => {
            let stats = save_run(result, stats, saved_tree, stats_path, tree_path)
                .context("failed to save simulation results")?;
            print_stats(&stats, "All games");
            stats
        }
        None => result.stats,
    };

    if options.chart {
        run_chart(ChartApp::new(chart_stats, format!("seed {seed}")))?;
    }

    Ok(())
}

fn run_play_command(
    words_path: Option<&Path>,
    hidden: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let words = load_words(words_path)?;
    let seed = resolve_seed(seed);
    let config = PlayConfig {
        hidden,
        ..PlayConfig::new(seed)
    };

    let record = play_one(&words, &config)?;
    print_play_result(&record, seed);
    Ok(())
}

fn run_init_command(stats_path: &Path, tree_path: &Path, force: bool) -> Result<()> {
    if stats_path.exists() && !force {
        println!(
            "{} already exists, leaving it alone (use --force to reset)",
            stats_path.display()
        );
    } else {
        Stats::new()
            .save(stats_path)
            .with_context(|| format!("failed to write {}", stats_path.display()))?;
        println!("Created {}", stats_path.display());
    }

    if tree_path.exists() && !force {
        println!(
            "{} already exists, leaving it alone (use --force to reset)",
            tree_path.display()
        );
    } else {
        GameTree::new()
            .save(tree_path)
            .with_context(|| format!("failed to write {}", tree_path.display()))?;
        println!("Created {}", tree_path.display());
    }

    Ok(())
}
