//! Render command implementation.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::common::{checked_count, enumerate, image_file_name, leaf_policy, OutputFormat};
use super::config::Config;
use super::generate::write_image;
use super::RenderArgs;

/// Execute the render command.
pub fn run(config: &Config, args: RenderArgs) -> Result<()> {
    let count = checked_count(&args.count, config)?;
    let (generation, _) = enumerate(count, leaf_policy(args.exhaustive))?;

    let pattern = generation.patterns.get(args.index).ok_or_else(|| {
        anyhow!(
            "no shape {} among {} shape(s) of {} triangle(s)",
            args.index,
            generation.patterns.len(),
            count
        )
    })?;

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(image_file_name(count, args.index, config.format)));
    let format = OutputFormat::from_path(&path)
        .ok_or_else(|| anyhow!("cannot tell image format from {}; use .png or .svg", path.display()))?;

    write_image(pattern, &config.render, format, &path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
