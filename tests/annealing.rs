//! End-to-end annealing runs from fixed seeds.
//!
//! These are statistical regression checks: each scenario runs 100 seeded
//! trials and asserts a solve rate with a comfortable margin below the rate
//! the scenario normally reaches.

use queens_anneal::anneal::{Acceptance, AnnealConfig, Annealer};
use queens_anneal::board::{BoardState, N};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRIALS: usize = 100;

fn solved_runs(config: &AnnealConfig, seed: u64) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..TRIALS)
        .filter(|_| {
            let start = BoardState::generate_random(&mut rng);
            let end = Annealer::run(start, config, &mut rng).unwrap();
            end.is_solution()
        })
        .count()
}

fn no_attacks(board: &BoardState) -> bool {
    let queens = board.queens();
    (0..N).all(|i| {
        (i + 1..N).all(|j| {
            let (a, b) = (queens[i], queens[j]);
            a.row != b.row
                && a.col != b.col
                && a.row + b.col != b.row + a.col
                && a.row + a.col != b.row + b.col
        })
    })
}

#[test]
fn metropolis_cooled_below_one_solves_most_runs() {
    let config = AnnealConfig::new(10.0, 0.9998).with_floor_temperature(0.01);
    let solved = solved_runs(&config, 2024);
    assert!(solved >= 90, "expected >= 90/{TRIALS} solved, got {solved}");
}

#[test]
fn non_worsening_solves_most_runs_at_reference_schedule() {
    let config = AnnealConfig::new(10_000.0, 0.999)
        .with_floor_temperature(2.0)
        .with_acceptance(Acceptance::NonWorsening);
    let solved = solved_runs(&config, 2024);
    assert!(solved >= 70, "expected >= 70/{TRIALS} solved, got {solved}");
}

#[test]
fn metropolis_stays_too_hot_at_reference_schedule() {
    // Above T = 2 a cost increase of 2 is still accepted over a third of
    // the time, so the walk never settles.
    let config = AnnealConfig::new(10_000.0, 0.999).with_floor_temperature(2.0);
    let solved = solved_runs(&config, 2024);
    assert!(solved <= 10, "expected few solutions, got {solved}/{TRIALS}");
}

#[test]
fn solved_boards_have_no_attacking_pairs() {
    let config = AnnealConfig::new(10.0, 0.9998).with_floor_temperature(0.01);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let result = Annealer::solve(&config, &mut rng).unwrap();
        assert_eq!(result.cost, result.state.cost());
        assert_eq!(result.solved(), no_attacks(&result.state));
    }
}

#[test]
fn same_seed_same_result() {
    let config = AnnealConfig::default();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = BoardState::generate_random(&mut rng);
        Annealer::run(start, &config, &mut rng).unwrap()
    };
    assert_eq!(run(5), run(5));
}

#[test]
fn unsolved_run_uses_whole_step_budget() {
    let config = AnnealConfig::new(100.0, 0.9);
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let result = Annealer::solve(&config, &mut rng).unwrap();
        if !result.solved() {
            assert_eq!(result.steps, config.step_budget());
        } else {
            assert!(result.steps <= config.step_budget());
        }
    }
}
