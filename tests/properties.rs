use halo_life::{run, stencil, CellState, Evolution, Grid, Initializer, Strategy};
use rand::{Rng, SeedableRng};
use std::num::NonZeroUsize;

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn randomly_filled(rows: usize, cols: usize, seed: u64) -> Grid {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
    let mut grid = Grid::new(rows, cols).unwrap();
    for i in 1..=rows {
        for j in 1..=cols {
            grid.set(i, j, CellState::from(rng.gen_bool(FILL_RATE)))
                .unwrap();
        }
    }
    grid
}

fn assert_halo_dead(grid: &Grid) {
    let (rows, cols) = grid.shape();
    for i in 0..rows + 2 {
        for j in 0..cols + 2 {
            if grid.is_halo(i, j) {
                assert_eq!(grid.get(i, j).unwrap(), CellState::Dead, "i={} j={}", i, j);
            }
        }
    }
}

#[test]
fn test_halo_stays_dead() {
    let strategies = [
        Strategy::Sequential,
        Strategy::Scoped {
            threads: NonZeroUsize::new(3).unwrap(),
        },
        Strategy::Rayon,
    ];
    for strategy in strategies {
        let mut evolution = Evolution::new(randomly_filled(40, 25, SEED), strategy);
        for _ in 0..30 {
            evolution.step().unwrap();
            assert_halo_dead(evolution.current());
        }
    }
}

#[test]
fn test_halo_seeded_on_start() {
    let mut grid = randomly_filled(10, 10, SEED);
    grid.set(0, 5, CellState::Alive).unwrap();
    grid.set(11, 11, CellState::Alive).unwrap();
    let result = run(grid, 3, Strategy::Sequential).unwrap();
    assert_halo_dead(&result);
}

#[test]
fn test_consistency() {
    for (rows, cols) in [(128, 128), (97, 61), (1, 200), (200, 1)] {
        let initial = randomly_filled(rows, cols, SEED);
        let expected = run(initial.clone(), 64, Strategy::Sequential).unwrap();
        for strategy in [Strategy::scoped(), Strategy::Rayon] {
            let result = run(initial.clone(), 64, strategy).unwrap();
            assert_eq!(
                result.first_mismatch(&expected).unwrap(),
                None,
                "strategy={} shape={:?}",
                strategy,
                (rows, cols)
            );
        }
    }
}

#[test]
fn test_steps_compose() {
    let initial = randomly_filled(50, 70, SEED);
    let whole = run(initial.clone(), 30, Strategy::Rayon).unwrap();

    let mut grid = initial.clone();
    for _ in 0..30 {
        grid = run(grid, 1, Strategy::Rayon).unwrap();
    }
    assert_eq!(grid, whole);

    let mut grid = initial;
    for chunk in [7, 0, 11, 12] {
        grid = run(grid, chunk, Strategy::Sequential).unwrap();
    }
    assert_eq!(grid, whole);
}

#[test]
fn test_manual_double_buffering() {
    let initial = randomly_filled(33, 33, SEED);
    let mut a = initial.clone();
    let mut b = Grid::square(33).unwrap();
    for k in 0..10 {
        if k % 2 == 0 {
            stencil::step(&a, &mut b).unwrap();
        } else {
            stencil::step(&b, &mut a).unwrap();
        }
    }
    assert_eq!(a, run(initial, 10, Strategy::Rayon).unwrap());
}

#[test]
fn test_dedicated_pool_matches_global() {
    let initial = Initializer::new(SEED, 0.5).random_grid(64, 64).unwrap();
    let mut evolution = Evolution::new(initial.clone(), Strategy::Rayon)
        .with_thread_pool(3)
        .unwrap();
    evolution.advance(25).unwrap();
    assert_eq!(evolution.generation(), 25);
    assert_eq!(
        evolution.into_current(),
        run(initial, 25, Strategy::Sequential).unwrap()
    );
}
