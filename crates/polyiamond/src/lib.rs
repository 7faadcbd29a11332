//! # polyiamond
//!
//! Drawing for polyiamond patterns: a styled [`Scene`] in pixel space
//! (lattice grid, axis rays, pattern edges) and an SVG writer for it.
//!
//! Boundary edges (no neighbor across them inside the pattern) are drawn
//! bold, shared edges thin, so each shape reads as one outlined piece.

pub mod error;
pub mod scene;
pub mod style;
pub mod svg;

pub use error::RenderError;
pub use scene::{classify_edges, EdgeKind, Scene, SceneEdge};
pub use style::RenderStyle;
pub use svg::{render_pattern_svg, scene_to_svg};

// Core types every caller of the renderer needs anyway.
pub use polyiamond_core::{Pattern, Triangle};
