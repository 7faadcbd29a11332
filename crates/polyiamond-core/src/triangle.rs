//! A single cell of the triangular lattice.
//!
//! Each triangle is named by the three grid lines its sides lie on, one per
//! axis: `(x, y, z)`. For every real triangle the coordinates add up to +1
//! or -1, and the sign tells which way the triangle points. Every transform
//! below keeps the sum at ±1, so results are built without re-validating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::axis::{Axis, Rotation};
use crate::error::{LatticeError, Result};
use crate::geometry::{Line, Point};

/// tan(30°)
const TAN_30: f64 = 0.577_350_269_189_625_8;

/// Which way a triangle points, from the sign of `x + y + z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Coordinate sum +1.
    Positive,
    /// Coordinate sum -1.
    Negative,
}

impl Orientation {
    /// The coordinate sum this orientation corresponds to.
    pub fn sign(&self) -> i32 {
        match self {
            Orientation::Positive => 1,
            Orientation::Negative => -1,
        }
    }

    pub fn flipped(&self) -> Orientation {
        match self {
            Orientation::Positive => Orientation::Negative,
            Orientation::Negative => Orientation::Positive,
        }
    }
}

/// One lattice triangle. Immutable; transforms return new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTriangle")]
pub struct Triangle {
    x: i32,
    y: i32,
    z: i32,
}

/// Unvalidated serde shape of a triangle.
#[derive(Deserialize)]
struct RawTriangle {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<RawTriangle> for Triangle {
    type Error = LatticeError;

    fn try_from(raw: RawTriangle) -> Result<Self> {
        Triangle::new(raw.x, raw.y, raw.z)
    }
}

impl Triangle {
    /// Starting cell of every enumeration.
    pub const SEED: Triangle = Triangle { x: 0, y: 1, z: 0 };

    /// Create a triangle, checking that the coordinates describe a real cell.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self> {
        match x + y + z {
            1 | -1 => Ok(Self { x, y, z }),
            _ => Err(LatticeError::InvalidTriangle { x, y, z }),
        }
    }

    /// Build from coordinates already known to sum to ±1.
    #[inline]
    const fn raw(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Coordinate on the given axis.
    #[inline]
    pub fn coord(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub fn coords(&self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    pub fn orientation(&self) -> Orientation {
        if self.x + self.y + self.z > 0 {
            Orientation::Positive
        } else {
            Orientation::Negative
        }
    }

    /// The triangle sharing this one's side on the grid line of `axis`.
    ///
    /// The coordinate on `axis` stays put, the other two move by the
    /// coordinate sum, which flips the orientation.
    pub fn neighbor(&self, axis: Axis) -> Triangle {
        let look = self.x + self.y + self.z;
        match axis {
            Axis::X => Triangle::raw(self.x, self.y - look, self.z - look),
            Axis::Y => Triangle::raw(self.x - look, self.y, self.z - look),
            Axis::Z => Triangle::raw(self.x - look, self.y - look, self.z),
        }
    }

    /// All three neighbors in axis order.
    pub fn neighbors(&self) -> [Triangle; 3] {
        Axis::ALL.map(|axis| self.neighbor(axis))
    }

    /// Rotate about the origin.
    pub fn rotated(&self, rotation: Rotation) -> Triangle {
        let (x, y, z) = (self.x, self.y, self.z);
        match rotation {
            Rotation::R60 => Triangle::raw(-y, -z, -x),
            Rotation::R120 => Triangle::raw(z, x, y),
            Rotation::R180 => Triangle::raw(-x, -y, -z),
            Rotation::R240 => Triangle::raw(y, z, x),
            Rotation::R300 => Triangle::raw(-z, -x, -y),
        }
    }

    /// Mirror over the grid direction of `axis`.
    pub fn reflected(&self, axis: Axis) -> Triangle {
        let (x, y, z) = (self.x, self.y, self.z);
        match axis {
            Axis::X => Triangle::raw(-x, -z, -y),
            Axis::Y => Triangle::raw(-z, -y, -x),
            Axis::Z => Triangle::raw(-y, -x, -z),
        }
    }

    /// Translate by `shift` lattice steps along `axis`.
    pub fn shifted(&self, shift: i32, axis: Axis) -> Triangle {
        let (x, y, z) = (self.x, self.y, self.z);
        match axis {
            Axis::X => Triangle::raw(x, y + shift, z - shift),
            Axis::Y => Triangle::raw(x - shift, y, z + shift),
            Axis::Z => Triangle::raw(x + shift, y - shift, z),
        }
    }

    /// Planar endpoints of the side lying on the grid line of `axis`.
    ///
    /// Only the renderer needs this.
    pub fn edge(&self, axis: Axis) -> Line {
        let (x, y, z) = (self.x as f64, self.y as f64, self.z as f64);
        let half_width = 2.0 * TAN_30;
        match axis {
            Axis::X => {
                let x1 = x / half_width;
                Line::new(x1, x / 2.0 + y, x1, -x / 2.0 - z)
            }
            Axis::Y => {
                let x1 = x / half_width;
                let x2 = -(z + y) / half_width;
                Line::new(x1, x / 2.0 + y, x2, x2 * TAN_30 + y)
            }
            Axis::Z => {
                let x1 = x / half_width;
                let x2 = -(z + y) / half_width;
                Line::new(x1, -x / 2.0 - z, x2, -x2 * TAN_30 - z)
            }
        }
    }

    /// The three corners in the plane.
    pub fn vertices(&self) -> [Point; 3] {
        let x_edge = self.edge(Axis::X);
        let y_edge = self.edge(Axis::Y);
        [x_edge.start(), x_edge.end(), y_edge.end()]
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(x: i32, y: i32, z: i32) -> Triangle {
        Triangle::new(x, y, z).unwrap()
    }

    /// A block of valid triangles around the origin.
    fn sample() -> Vec<Triangle> {
        let mut out = Vec::new();
        for x in -3..=3 {
            for y in -3..=3 {
                for z in [1 - x - y, -1 - x - y] {
                    out.push(tri(x, y, z));
                }
            }
        }
        out
    }

    #[test]
    fn construction_checks_coordinate_sum() {
        assert!(Triangle::new(0, 1, 0).is_ok());
        assert!(Triangle::new(0, 0, -1).is_ok());
        assert_eq!(
            Triangle::new(0, 0, 0),
            Err(LatticeError::InvalidTriangle { x: 0, y: 0, z: 0 })
        );
        assert!(Triangle::new(1, 1, 1).is_err());
    }

    #[test]
    fn neighbors_of_seed() {
        let seed = Triangle::SEED;
        assert_eq!(seed.neighbor(Axis::X), tri(0, 0, -1));
        assert_eq!(seed.neighbor(Axis::Y), tri(-1, 1, -1));
        assert_eq!(seed.neighbor(Axis::Z), tri(-1, 0, 0));
    }

    #[test]
    fn neighbor_is_involutive_and_flips_orientation() {
        for t in sample() {
            for axis in Axis::ALL {
                let n = t.neighbor(axis);
                assert_eq!(n.neighbor(axis), t);
                assert_eq!(n.orientation(), t.orientation().flipped());
                assert_eq!(n.coord(axis), t.coord(axis));
            }
        }
    }

    #[test]
    fn rotation_cases() {
        let t = tri(2, -3, 2);
        assert_eq!(t.rotated(Rotation::R60), tri(3, -2, -2));
        assert_eq!(t.rotated(Rotation::R120), tri(2, 2, -3));
        assert_eq!(t.rotated(Rotation::R180), tri(-2, 3, -2));
        assert_eq!(t.rotated(Rotation::R240), tri(-3, 2, 2));
        assert_eq!(t.rotated(Rotation::R300), tri(-2, -2, 3));
    }

    #[test]
    fn six_sixty_degree_turns_are_identity() {
        for t in sample() {
            let mut r = t;
            for _ in 0..6 {
                r = r.rotated(Rotation::R60);
            }
            assert_eq!(r, t);
            assert_eq!(t.rotated(Rotation::R180).rotated(Rotation::R180), t);
        }
    }

    #[test]
    fn rotations_compose_like_angles() {
        for t in sample() {
            for a in Rotation::ALL {
                for b in Rotation::ALL {
                    let stepwise = t.rotated(a).rotated(b);
                    let direct = match a.then(b) {
                        Some(c) => t.rotated(c),
                        None => t,
                    };
                    assert_eq!(stepwise, direct, "{} then {}", a, b);
                }
            }
        }
    }

    #[test]
    fn reflection_cases_and_involution() {
        let t = tri(2, -3, 2);
        assert_eq!(t.reflected(Axis::X), tri(-2, -2, 3));
        assert_eq!(t.reflected(Axis::Y), tri(-2, 3, -2));
        assert_eq!(t.reflected(Axis::Z), tri(3, -2, -2));
        for t in sample() {
            for axis in Axis::ALL {
                assert_eq!(t.reflected(axis).reflected(axis), t);
                assert_eq!(t.reflected(axis).orientation(), t.orientation().flipped());
            }
        }
    }

    #[test]
    fn shift_round_trip_preserves_orientation() {
        for t in sample() {
            for axis in Axis::ALL {
                for s in [-3, -1, 1, 4] {
                    let moved = t.shifted(s, axis);
                    assert_eq!(moved.orientation(), t.orientation());
                    assert_eq!(moved.shifted(-s, axis), t);
                }
            }
        }
    }

    #[test]
    fn shared_edges_project_to_the_same_segment() {
        for t in sample() {
            for axis in Axis::ALL {
                let mine = t.edge(axis);
                let theirs = t.neighbor(axis).edge(axis);
                let same = mine.start().approx_eq(theirs.start(), 1e-9)
                    && mine.end().approx_eq(theirs.end(), 1e-9);
                let swapped = mine.start().approx_eq(theirs.end(), 1e-9)
                    && mine.end().approx_eq(theirs.start(), 1e-9);
                assert!(same || swapped, "{} across {}", t, axis);
            }
        }
    }

    #[test]
    fn edges_have_unit_length() {
        for t in sample() {
            for axis in Axis::ALL {
                assert!((t.edge(axis).length() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn display_and_serde() {
        let t = tri(-1, 1, -1);
        assert_eq!(t.to_string(), "Triangle(-1, 1, -1)");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"x":-1,"y":1,"z":-1}"#);
        assert_eq!(serde_json::from_str::<Triangle>(&json).unwrap(), t);
        assert!(serde_json::from_str::<Triangle>(r#"{"x":0,"y":0,"z":0}"#).is_err());
    }
}
