//! # polyiamond-core
//!
//! Triangular lattice coordinates and the enumeration of polyiamonds:
//! shapes made of identical equilateral triangles joined edge-to-edge,
//! counted once per rotation/reflection class.
//!
//! ## Rust Lesson #7: Modules
//!
//! Every module is declared explicitly. The leaf modules (`axis`,
//! `geometry`) know nothing about the ones above them; `generator` sits at
//! the top and only talks to `pattern` and `triangle`.

pub mod axis;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod pattern;
pub mod triangle;

// Re-export common types at crate root for convenience.
pub use axis::{Axis, Rotation};
pub use error::{LatticeError, Result};
pub use generator::{
    generate, parse_triangle_count, Generation, GenerationStats, Generator, LeafPolicy,
};
pub use geometry::{bounds_of, Line, Point};
pub use pattern::Pattern;
pub use triangle::{Orientation, Triangle};
