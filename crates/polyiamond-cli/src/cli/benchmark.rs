//! Benchmark command implementation.

use anyhow::{bail, Result};

use super::common::{enumerate, leaf_policy};
use super::config::Config;
use super::BenchmarkArgs;

/// Execute the benchmark command.
pub fn run(config: &Config, args: BenchmarkArgs) -> Result<()> {
    if args.max == 0 || args.max > config.max_triangles {
        bail!(
            "--max must be between 1 and {}, got {}",
            config.max_triangles,
            args.max
        );
    }

    let policy = leaf_policy(args.exhaustive);

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  POLYIAMOND BENCHMARK ({} search)", policy);
    println!("═══════════════════════════════════════════════════════════════");
    println!(
        "  {:>3}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}",
        "n", "shapes", "sketches", "compared", "rejected", "time (ms)"
    );

    let mut total_ms = 0.0;
    for count in 1..=args.max {
        let (generation, elapsed_ms) = enumerate(count, policy)?;
        total_ms += elapsed_ms;
        let stats = generation.stats;
        println!(
            "  {:>3}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10.2}",
            count,
            generation.patterns.len(),
            stats.sketches_expanded,
            stats.candidates_compared,
            stats.duplicates_rejected,
            elapsed_ms
        );
    }

    println!("───────────────────────────────────────────────────────────────");
    println!("  Total: {:.2}ms", total_ms);
    println!("═══════════════════════════════════════════════════════════════");
    Ok(())
}
