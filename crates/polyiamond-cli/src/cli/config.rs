//! YAML configuration.
//!
//! ```yaml
//! max_triangles: 12
//! output_dir: out
//! format: svg
//! render:
//!   scale: 120
//!   show_axes: false
//! ```
//!
//! Every key is optional. Command line flags win over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use polyiamond::RenderStyle;

use super::common::OutputFormat;

/// File looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "polyiamond.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Largest triangle count `generate` accepts
    pub max_triangles: usize,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub render: RenderStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_triangles: 16,
            output_dir: PathBuf::from("."),
            format: OutputFormat::Png,
            render: RenderStyle::default(),
        }
    }
}

impl Config {
    /// Load `path`, or the default file if it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        if config.max_triangles == 0 {
            anyhow::bail!("max_triangles must be at least 1");
        }
        config.render.validate()?;
        Ok(config)
    }
}
