//! Recursive growth search for polyiamonds.
//!
//! The search starts from a single seed triangle and grows copies of the
//! current sketch one neighbor at a time. Whenever a copy reaches the target
//! size it is compared (up to rotation and reflection) against every shape
//! accepted so far; new shapes are centered and kept.
//!
//! ## Leaf policy
//!
//! At the deepest level the classic search returns as soon as it accepts a
//! new shape, skipping the remaining neighbor/axis choices of that sketch.
//! Shallower levels are unaffected and keep exploring. [`LeafPolicy`]
//! selects between that behavior and finishing the leaf loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::axis::Axis;
use crate::error::{LatticeError, Result};
use crate::pattern::Pattern;
use crate::triangle::Triangle;

/// What the deepest recursion level does after accepting a new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafPolicy {
    /// Return right after the first accepted shape.
    #[default]
    FirstNew,
    /// Keep trying the remaining extensions.
    Exhaustive,
}

impl LeafPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            LeafPolicy::FirstNew => "first-new",
            LeafPolicy::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for LeafPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LeafPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-new" | "first" => Ok(LeafPolicy::FirstNew),
            "exhaustive" | "all" => Ok(LeafPolicy::Exhaustive),
            other => Err(format!("unknown leaf policy '{}'", other)),
        }
    }
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Sketches whose neighbors were tried.
    pub sketches_expanded: u64,
    /// Full-size candidates compared against the accepted list.
    pub candidates_compared: u64,
    /// Candidates that matched an accepted shape.
    pub duplicates_rejected: u64,
}

/// Result of one enumeration.
#[derive(Debug, Clone)]
pub struct Generation {
    pub count: usize,
    pub policy: LeafPolicy,
    /// One centered representative per symmetry class, in discovery order.
    pub patterns: Vec<Pattern>,
    pub stats: GenerationStats,
}

/// Enumerates the shapes made of a fixed number of triangles.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    count: usize,
    policy: LeafPolicy,
}

impl Generator {
    /// Generator for shapes of `count` triangles.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(LatticeError::InvalidTriangleCount(count.to_string()));
        }
        Ok(Self {
            count,
            policy: LeafPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: LeafPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn policy(&self) -> LeafPolicy {
        self.policy
    }

    /// Run the search to completion.
    pub fn run(&self) -> Generation {
        let mut search = Search {
            target: self.count,
            policy: self.policy,
            accepted: Vec::new(),
            stats: GenerationStats::default(),
        };

        let mut sketch = Pattern::with_capacity(self.count);
        sketch.push(Triangle::SEED);

        if self.count == 1 {
            search.accepted.push(sketch);
        } else {
            search.grow(&sketch);
        }

        info!(
            count = self.count,
            policy = %self.policy,
            classes = search.accepted.len(),
            sketches = search.stats.sketches_expanded,
            "enumeration finished"
        );

        Generation {
            count: self.count,
            policy: self.policy,
            patterns: search.accepted,
            stats: search.stats,
        }
    }
}

/// Mutable state threaded through the recursion. Only `accept` appends.
struct Search {
    target: usize,
    policy: LeafPolicy,
    accepted: Vec<Pattern>,
    stats: GenerationStats,
}

impl Search {
    fn grow(&mut self, sketch: &Pattern) {
        self.stats.sketches_expanded += 1;

        for triangle in sketch.iter() {
            for axis in Axis::ALL {
                let neighbor = triangle.neighbor(axis);
                if sketch.contains(&neighbor) {
                    continue;
                }

                let candidate = sketch.extended(neighbor);
                if candidate.len() < self.target {
                    self.grow(&candidate);
                } else if self.accept(candidate) && self.policy == LeafPolicy::FirstNew {
                    return;
                }
            }
        }
    }

    /// Keep `candidate` if it is a new shape. Returns whether it was kept.
    fn accept(&mut self, candidate: Pattern) -> bool {
        self.stats.candidates_compared += 1;

        if self.accepted.iter().any(|known| known.is_congruent(&candidate)) {
            self.stats.duplicates_rejected += 1;
            trace!(%candidate, "duplicate shape");
            return false;
        }

        let centered = candidate.centered();
        debug!(index = self.accepted.len(), pattern = %centered, "new shape");
        self.accepted.push(centered);
        true
    }
}

/// All shapes of `count` triangles, one per symmetry class.
pub fn generate(count: usize) -> Result<Vec<Pattern>> {
    Ok(Generator::new(count)?.run().patterns)
}

/// Parse a user-supplied triangle count.
pub fn parse_triangle_count(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(LatticeError::InvalidTriangleCount(text.trim().to_string())),
    }
}
