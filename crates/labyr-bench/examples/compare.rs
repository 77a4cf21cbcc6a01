//! Stack comparison harness.
//!
//! Generates a seeded maze with random dimensions (1 to 100 per side),
//! then runs both policies over every stack backing and prints each
//! verdict with its solve time.
//!
//! ```text
//! cargo run -p labyr-bench --example compare -- [seed]
//! LABYR_LOG=labyr_search=trace cargo run -p labyr-bench --example compare
//! ```

use labyr_bench::{compare, disagreements, init_tracing, random_generator, render};
use labyr_gen::GenError;
use tracing::{info, warn};

fn main() -> Result<(), GenError> {
    init_tracing();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    println!("=== labyr stack comparison (seed {seed}) ===\n");

    let generator = random_generator(seed, 100)?;
    info!(
        seed = generator.seed(),
        rows = generator.rows(),
        cols = generator.cols(),
        "generating maze"
    );
    let grid = generator.generate()?;

    // Small mazes are worth looking at.
    if grid.cell_count() <= 30 * 30 {
        println!("{grid}\n");
    }

    let results = compare(&grid);
    print!("{}", render(&grid, &results));

    for policy in disagreements(&results) {
        warn!(%policy, "stack backings returned different verdicts");
    }
    Ok(())
}
