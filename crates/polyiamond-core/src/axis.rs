//! The three lattice directions and the rotations of the lattice.
//!
//! ## Rust Lesson #12: Closed Enums
//!
//! Axes and rotation angles form tiny fixed sets. Modelling them as enums
//! means every `match` on them is checked for exhaustiveness at compile
//! time; the only place an invalid label can show up is when parsing text
//! or a raw angle, and that returns an error instead of a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LatticeError, Result};

/// One of the three grid directions of the triangular tiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in iteration order. The generator's discovery order depends
    /// on this order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Get the axis label.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Parse an axis label (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(LatticeError::InvalidAxis(name.to_string())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = LatticeError;

    fn from_str(s: &str) -> Result<Self> {
        Axis::from_name(s)
    }
}

/// A non-identity rotation of the lattice about the origin.
///
/// The identity (0° / 360°) is deliberately absent: callers that want "no
/// rotation" simply don't rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R60,
    R120,
    R180,
    R240,
    R300,
}

impl Rotation {
    pub const ALL: [Rotation; 5] = [
        Rotation::R60,
        Rotation::R120,
        Rotation::R180,
        Rotation::R240,
        Rotation::R300,
    ];

    /// Rotation angle in degrees.
    pub fn degrees(&self) -> i32 {
        self.steps() * 60
    }

    /// Number of 60° steps.
    pub fn steps(&self) -> i32 {
        match self {
            Rotation::R60 => 1,
            Rotation::R120 => 2,
            Rotation::R180 => 3,
            Rotation::R240 => 4,
            Rotation::R300 => 5,
        }
    }

    /// Rotation for a given angle in degrees.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match degrees {
            60 => Ok(Rotation::R60),
            120 => Ok(Rotation::R120),
            180 => Ok(Rotation::R180),
            240 => Ok(Rotation::R240),
            300 => Ok(Rotation::R300),
            _ => Err(LatticeError::InvalidAngle(degrees)),
        }
    }

    /// Rotation by a number of 60° steps; `None` when the steps add up to a
    /// full turn.
    pub fn from_steps(steps: i32) -> Option<Self> {
        match steps.rem_euclid(6) {
            1 => Some(Rotation::R60),
            2 => Some(Rotation::R120),
            3 => Some(Rotation::R180),
            4 => Some(Rotation::R240),
            5 => Some(Rotation::R300),
            _ => None,
        }
    }

    /// This rotation followed by `other`. `None` is the identity.
    pub fn then(self, other: Rotation) -> Option<Rotation> {
        Rotation::from_steps(self.steps() + other.steps())
    }

    /// The rotation undoing this one.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::R60 => Rotation::R300,
            Rotation::R120 => Rotation::R240,
            Rotation::R180 => Rotation::R180,
            Rotation::R240 => Rotation::R120,
            Rotation::R300 => Rotation::R60,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_parsing() {
        assert_eq!(Axis::from_name("x"), Ok(Axis::X));
        assert_eq!(Axis::from_name("Y"), Ok(Axis::Y));
        assert_eq!(" z ".parse::<Axis>(), Ok(Axis::Z));
        assert_eq!(
            Axis::from_name("w"),
            Err(LatticeError::InvalidAxis("w".to_string()))
        );
        assert!(Axis::from_name("").is_err());
    }

    #[test]
    fn axis_order_is_fixed() {
        let names: Vec<&str> = Axis::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn rotation_parsing() {
        for rotation in Rotation::ALL {
            assert_eq!(Rotation::from_degrees(rotation.degrees()), Ok(rotation));
        }
        assert_eq!(Rotation::from_degrees(90), Err(LatticeError::InvalidAngle(90)));
        assert_eq!(Rotation::from_degrees(0), Err(LatticeError::InvalidAngle(0)));
        assert_eq!(Rotation::from_degrees(360), Err(LatticeError::InvalidAngle(360)));
        assert_eq!(Rotation::from_degrees(-60), Err(LatticeError::InvalidAngle(-60)));
    }

    #[test]
    fn rotation_composition_wraps() {
        assert_eq!(Rotation::R60.then(Rotation::R60), Some(Rotation::R120));
        assert_eq!(Rotation::R240.then(Rotation::R180), Some(Rotation::R60));
        assert_eq!(Rotation::R180.then(Rotation::R180), None);
        for rotation in Rotation::ALL {
            assert_eq!(rotation.then(rotation.inverse()), None);
        }
    }
}
