//! Generate command implementation.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use polyiamond::{render_pattern_svg, RenderStyle};
use polyiamond_core::{GenerationStats, LeafPolicy, Pattern};

use super::common::{checked_count, enumerate, image_file_name, leaf_policy, OutputFormat, PatternSummary};
use super::config::Config;
use super::raster;
use super::GenerateArgs;

const PROMPT: &str = "Enter number of triangles: ";

/// Contents of `manifest.json`.
#[derive(Serialize)]
struct Manifest {
    count: usize,
    policy: LeafPolicy,
    format: OutputFormat,
    /// RFC 3339 UTC timestamp
    generated_at: String,
    stats: GenerationStats,
    patterns: Vec<PatternSummary>,
}

/// Execute the generate command.
pub fn run(config: &Config, args: GenerateArgs) -> Result<()> {
    let text = match args.count {
        Some(text) => text,
        None => prompt_count(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let count = checked_count(&text, config)?;
    let format = args.format.unwrap_or(config.format);
    let base = args.output.unwrap_or_else(|| config.output_dir.clone());

    let (generation, elapsed_ms) = enumerate(count, leaf_policy(args.exhaustive))?;
    info!(count, shapes = generation.patterns.len(), elapsed_ms, "enumerated");

    let dir = base.join(count.to_string());
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut summaries = Vec::with_capacity(generation.patterns.len());
    for (index, pattern) in generation.patterns.iter().enumerate() {
        let name = image_file_name(count, index, format);
        write_image(pattern, &config.render, format, &dir.join(&name))?;

        let mut summary = PatternSummary::new(index, pattern);
        summary.file = Some(name);
        summaries.push(summary);
    }

    if args.manifest {
        let manifest = Manifest {
            count,
            policy: generation.policy,
            format,
            generated_at: Utc::now().to_rfc3339(),
            stats: generation.stats,
            patterns: summaries,
        };
        let path = dir.join("manifest.json");
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(path = %path.display(), "manifest written");
    }

    println!(
        "Wrote {} {} file(s) to {}",
        generation.patterns.len(),
        format,
        dir.display()
    );
    Ok(())
}

/// Render one pattern to `path` in `format`.
pub fn write_image(pattern: &Pattern, style: &RenderStyle, format: OutputFormat, path: &Path) -> Result<()> {
    let svg = render_pattern_svg(pattern, style)?;
    match format {
        OutputFormat::Svg => {
            fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?
        }
        OutputFormat::Png => raster::save_png(&svg, path)?,
    }
    debug!(path = %path.display(), "image written");
    Ok(())
}

/// Ask for the triangle count on `output` and read one line from `input`.
fn prompt_count(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read triangle count")?;
    Ok(line)
}
