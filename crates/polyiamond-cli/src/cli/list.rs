//! List command implementation.

use anyhow::Result;

use super::common::{checked_count, enumerate, leaf_policy, PatternSummary};
use super::config::Config;
use super::ListArgs;

/// Execute the list command.
pub fn run(config: &Config, args: ListArgs) -> Result<()> {
    let count = checked_count(&args.count, config)?;
    let (generation, _) = enumerate(count, leaf_policy(args.exhaustive))?;

    if args.json {
        let summaries: Vec<PatternSummary> = generation
            .patterns
            .iter()
            .enumerate()
            .map(|(i, p)| PatternSummary::new(i, p))
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!(
        "{} shape(s) of {} triangle(s), {} search",
        generation.patterns.len(),
        count,
        generation.policy
    );
    for (i, pattern) in generation.patterns.iter().enumerate() {
        println!(
            "{:>3}  perimeter {:>2}  symmetry {:>2}  {}",
            i,
            pattern.perimeter(),
            pattern.symmetry_order(),
            pattern
        );
    }
    Ok(())
}
