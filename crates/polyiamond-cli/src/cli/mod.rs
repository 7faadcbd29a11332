//! Command line definition and subcommand implementations.
//!
//! - `generate` - Write one image per shape for a triangle count
//! - `list` - Print the shapes for a triangle count
//! - `benchmark` - Time the enumeration over a range of counts
//! - `render` - Draw a single shape to a file
//! - `browse` - Interactive terminal viewer

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod benchmark;
pub mod common;
pub mod config;
pub mod generate;
pub mod list;
pub mod raster;
pub mod render;

pub use common::OutputFormat;
pub use config::Config;

#[derive(Parser)]
#[command(name = "polyiamond")]
#[command(author, version, about = "Enumerate polyiamonds up to rotation and reflection")]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML config file (default: ./polyiamond.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate shapes and write one image per shape
    Generate(GenerateArgs),

    /// Print the shapes made of COUNT triangles
    #[command(alias = "ls")]
    List(ListArgs),

    /// Time the enumeration for 1..=MAX triangles
    Benchmark(BenchmarkArgs),

    /// Draw one shape to a PNG or SVG file
    Render(RenderArgs),

    /// Browse shapes in the terminal
    Browse(BrowseArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of triangles (prompted for when omitted)
    pub count: Option<String>,

    /// Directory that receives the <COUNT>/ folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Image format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep searching a leaf after it yields a new shape
    #[arg(long)]
    pub exhaustive: bool,

    /// Also write manifest.json describing every image
    #[arg(long)]
    pub manifest: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Number of triangles
    pub count: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Keep searching a leaf after it yields a new shape
    #[arg(long)]
    pub exhaustive: bool,
}

#[derive(Args)]
pub struct BenchmarkArgs {
    /// Largest triangle count to run
    #[arg(long, default_value_t = 8)]
    pub max: usize,

    /// Keep searching a leaf after it yields a new shape
    #[arg(long)]
    pub exhaustive: bool,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Number of triangles
    pub count: String,

    /// Index of the shape, as printed by `list`
    pub index: usize,

    /// Output file; the extension picks PNG or SVG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep searching a leaf after it yields a new shape
    #[arg(long)]
    pub exhaustive: bool,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Starting number of triangles
    #[arg(default_value_t = 4)]
    pub count: usize,

    /// Keep searching a leaf after it yields a new shape
    #[arg(long)]
    pub exhaustive: bool,
}
