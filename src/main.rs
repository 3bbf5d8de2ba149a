#![warn(clippy::all)]

use std::time::Instant;

use anyhow::{Context, Result};
use halo_life::{render_snapshot, save_to_dir, Config, Evolution, Initializer, NiceInt, Strategy};

fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, Config::USAGE);
            std::process::exit(2);
        }
    };
    log::debug!("{:?}", config);
    println!(
        "Problem Size N={} in number of Iterations={}",
        NiceInt::from_usize(config.size),
        NiceInt::from_u64(config.iterations)
    );

    let initial = Initializer::new(config.seed, config.fill_rate)
        .random_grid(config.size, config.size)
        .context("failed to build the initial grid")?;
    if config.print {
        print!("{}", render_snapshot(&initial, 0));
    }
    let reference = config.verify.then(|| initial.clone());

    let mut evolution = Evolution::new(initial, config.strategy);
    if let (Strategy::Rayon, Some(threads)) = (config.strategy, config.threads) {
        evolution = evolution.with_thread_pool(threads.get())?;
    }
    let timer = Instant::now();
    evolution.advance(config.iterations)?;
    println!(
        "{} time taken {:?} for {} iterations",
        config.strategy,
        timer.elapsed(),
        NiceInt::from_u64(config.iterations)
    );
    let result = evolution.into_current();
    if config.print {
        print!("{}", render_snapshot(&result, config.iterations));
    }

    if let Some(reference) = reference {
        let timer = Instant::now();
        let expected = halo_life::run(reference, config.iterations, Strategy::Sequential)?;
        println!("sequential time taken {:?}", timer.elapsed());
        match result.first_mismatch(&expected)? {
            None => println!("Results match the sequential reference"),
            Some((i, j)) => {
                anyhow::bail!("Mismatched with the sequential reference at [{}][{}]", i, j)
            }
        }
    }

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;
    let path = save_to_dir(&result, &config.output_dir, config.iterations)
        .with_context(|| format!("failed to write output into {}", config.output_dir.display()))?;
    println!("Writing output to file: {}", path.display());
    Ok(())
}
