use std::{num::NonZeroUsize, time::Instant};

use halo_life::{run, Initializer, NiceInt, Strategy};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let side = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(2048);
    let iterations = 64;

    let timer = Instant::now();
    let initial = Initializer::default().random_grid(side, side)?;
    println!("Time on building field: {:?}", timer.elapsed());

    let threads = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let mut results = Vec::new();
    for strategy in [
        Strategy::Sequential,
        Strategy::Scoped { threads },
        Strategy::Rayon,
    ] {
        let timer = Instant::now();
        let result = run(initial.clone(), iterations, strategy)?;
        let elapsed = timer.elapsed();
        let updates = (side * side) as f64 * iterations as f64 / elapsed.as_secs_f64();
        println!(
            "Time on {} iterations with {}: {:?} ({} cells/s)",
            iterations,
            strategy,
            elapsed,
            NiceInt::from_f64(updates)
        );
        results.push(result);
    }
    anyhow::ensure!(
        results.windows(2).all(|w| w[0] == w[1]),
        "strategies disagree"
    );
    println!("Population: {}", NiceInt::from_usize(results[0].population()));
    Ok(())
}
