//! End-to-end tests through the public API

use tempfile::{NamedTempFile, tempdir};
use wordle_sim::commands::{SimulationConfig, run_simulation};
use wordle_sim::core::{Coloring, Constraints, Word};
use wordle_sim::game::{GameTree, MAX_TURNS, Stats};
use wordle_sim::wordlists::WordList;

fn tree_config(games: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        record_tree: true,
        ..SimulationConfig::new(games, seed)
    }
}

#[test]
fn wins_and_losses_add_up_to_games_played() {
    let words = WordList::embedded();
    let result = run_simulation(&words, &SimulationConfig::new(500, 2024)).unwrap();

    let stats = &result.stats;
    let per_turn: u64 = (1..=MAX_TURNS).map(|turn| stats.wins_at(turn)).sum();
    assert_eq!(per_turn + stats.losses(), 500);
    assert_eq!(stats.total_games(), 500);
}

#[test]
fn runs_are_reproducible_from_the_seed() {
    let words = WordList::embedded();
    let a = run_simulation(&words, &tree_config(250, 42)).unwrap();
    let b = run_simulation(&words, &tree_config(250, 42)).unwrap();

    assert_eq!(a.stats, b.stats);
    assert_eq!(a.tree, b.tree);
}

#[test]
fn split_runs_merge_like_one_run() {
    let words = WordList::embedded();
    let whole = run_simulation(&words, &tree_config(200, 10)).unwrap();
    let first = run_simulation(&words, &tree_config(100, 10)).unwrap();
    let second = run_simulation(&words, &tree_config(100, 110)).unwrap();

    let mut stats = first.stats.clone();
    stats.merge(&second.stats);
    assert_eq!(stats, whole.stats);

    let tree = first.tree.unwrap().merged(&second.tree.unwrap());
    assert_eq!(Some(tree), whole.tree);
}

#[test]
fn stats_survive_save_and_load() {
    let file = NamedTempFile::new().unwrap();
    let words = WordList::embedded();
    let result = run_simulation(&words, &SimulationConfig::new(150, 3)).unwrap();

    Stats::new().save(file.path()).unwrap();
    let mut saved = Stats::load(file.path()).unwrap();
    saved.merge(&result.stats);
    saved.save(file.path()).unwrap();

    let loaded = Stats::load(file.path()).unwrap();
    assert_eq!(loaded, result.stats);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
    assert!(raw["win"]["1"].is_u64());
    assert!(raw["win"]["6"].is_u64());
    assert!(raw["loss"].is_u64());
}

#[test]
fn tree_survives_save_and_load_and_remerge() {
    let file = NamedTempFile::new().unwrap();
    let words = WordList::embedded();
    let tree = run_simulation(&words, &tree_config(120, 8))
        .unwrap()
        .tree
        .unwrap();

    tree.save(file.path()).unwrap();
    let mut loaded = GameTree::load(file.path()).unwrap();
    assert_eq!(loaded, tree);

    // Absorbing the same games again leaves the file contents unchanged
    loaded.absorb(tree.clone());
    assert_eq!(loaded, tree);
}

#[test]
fn missing_files_are_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(Stats::load(&missing).is_err());
    assert!(GameTree::load(&missing).is_err());
}

#[test]
fn malformed_stats_are_errors() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), r#"{"win": {"7": 1}, "loss": 0}"#).unwrap();
    assert!(Stats::load(file.path()).is_err());

    std::fs::write(file.path(), "not json").unwrap();
    assert!(Stats::load(file.path()).is_err());
}

#[test]
fn word_list_file_loads_and_plays() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "crane\nSLATE\n\n  speed\nerase\n").unwrap();

    let words = WordList::from_file(file.path()).unwrap();
    assert_eq!(words.len(), 4);

    let result = run_simulation(&words, &SimulationConfig::new(50, 1)).unwrap();
    assert_eq!(result.stats.total_games(), 50);
    assert_eq!(result.stats.losses(), 0);
}

#[test]
fn hidden_word_survives_every_filter() {
    let words = WordList::embedded();
    let candidates: Vec<&Word> = words.words().iter().collect();

    for hidden in words.words().iter().step_by(37) {
        for guess in words.words().iter().step_by(53) {
            let mut constraints = Constraints::new();
            constraints.apply(guess, Coloring::calculate(hidden, guess));
            let left = constraints.filter(&candidates);
            assert!(
                left.contains(&hidden),
                "{hidden} filtered out after guessing {guess}"
            );
        }
    }
}
