//! Helpers shared by the subcommands.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use polyiamond_core::{parse_triangle_count, Generation, Generator, LeafPolicy, Pattern, Triangle};

use super::config::Config;

/// Image format for written files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// Format implied by a file name's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some(OutputFormat::Png),
            "svg" => Some(OutputFormat::Svg),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

pub fn leaf_policy(exhaustive: bool) -> LeafPolicy {
    if exhaustive {
        LeafPolicy::Exhaustive
    } else {
        LeafPolicy::FirstNew
    }
}

/// Parse a count argument and check it against the configured ceiling.
pub fn checked_count(text: &str, config: &Config) -> Result<usize> {
    let count = parse_triangle_count(text)?;
    if count > config.max_triangles {
        bail!(
            "number of triangles must be between 1 and {}, got {}",
            config.max_triangles,
            count
        );
    }
    Ok(count)
}

/// Run the enumeration, returning it with the wall time in milliseconds.
pub fn enumerate(count: usize, policy: LeafPolicy) -> Result<(Generation, f64)> {
    let generator = Generator::new(count)?.with_policy(policy);
    let start = Instant::now();
    let generation = generator.run();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if let Some(index) = generation.patterns.iter().position(|p| !p.is_connected()) {
        bail!("enumeration produced a disconnected shape at index {}", index);
    }
    Ok((generation, elapsed_ms))
}

/// Serializable description of one shape.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub index: usize,
    pub triangles: Vec<Triangle>,
    pub perimeter: usize,
    pub symmetry_order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl PatternSummary {
    pub fn new(index: usize, pattern: &Pattern) -> Self {
        Self {
            index,
            triangles: pattern.triangles().to_vec(),
            perimeter: pattern.perimeter(),
            symmetry_order: pattern.symmetry_order(),
            file: None,
        }
    }
}

/// `<count>_<index>.<ext>`
pub fn image_file_name(count: usize, index: usize, format: OutputFormat) -> String {
    format!("{}_{}.{}", count, index, format.extension())
}
