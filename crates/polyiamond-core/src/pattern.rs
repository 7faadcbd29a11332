//! Patterns: ordered, duplicate-free sets of lattice triangles.
//!
//! Whole-pattern transforms apply the triangle transform to every element
//! and keep the element order. Two normal forms remove translation:
//! [`Pattern::aligned`] for comparisons and [`Pattern::centered`] for
//! display.
//!
//! ## Rust Lesson #14: Custom Equality
//!
//! `PartialEq` for `Pattern` is *not* field-by-field. Two patterns are
//! equal when one is a rotation and/or reflection of the other, which is
//! the notion of "same shape" the enumeration counts. Use
//! [`Pattern::same_cells`] for the literal comparison.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::axis::{Axis, Rotation};
use crate::triangle::Triangle;

/// Axis whose grid direction is left free when patterns are compared.
const COMPARE_AXIS: Axis = Axis::Z;

/// A shape made of lattice triangles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Pattern {
    triangles: Vec<Triangle>,
}

impl Pattern {
    /// Create an empty pattern.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Append a triangle unless it is already present.
    ///
    /// Returns whether the triangle was added.
    pub fn push(&mut self, triangle: Triangle) -> bool {
        if self.contains(&triangle) {
            return false;
        }
        self.triangles.push(triangle);
        true
    }

    /// Copy of this pattern with one more triangle.
    pub fn extended(&self, triangle: Triangle) -> Pattern {
        let mut extended = Pattern::with_capacity(self.len() + 1);
        extended.triangles.extend_from_slice(&self.triangles);
        extended.push(triangle);
        extended
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn contains(&self, triangle: &Triangle) -> bool {
        self.triangles.contains(triangle)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Smallest coordinate on `axis`, `None` when empty.
    pub fn min_coord(&self, axis: Axis) -> Option<i32> {
        self.triangles.iter().map(|t| t.coord(axis)).min()
    }

    /// Largest coordinate on `axis`, `None` when empty.
    pub fn max_coord(&self, axis: Axis) -> Option<i32> {
        self.triangles.iter().map(|t| t.coord(axis)).max()
    }

    /// Apply a bijection of the lattice to every triangle, in order.
    fn map(&self, transform: impl Fn(&Triangle) -> Triangle) -> Pattern {
        Pattern {
            triangles: self.triangles.iter().map(transform).collect(),
        }
    }

    pub fn shifted(&self, shift: i32, axis: Axis) -> Pattern {
        self.map(|t| t.shifted(shift, axis))
    }

    pub fn rotated(&self, rotation: Rotation) -> Pattern {
        self.map(|t| t.rotated(rotation))
    }

    pub fn reflected(&self, axis: Axis) -> Pattern {
        self.map(|t| t.reflected(axis))
    }

    /// Translate so the shape is pinned against two boundaries.
    ///
    /// With free axis `f`, the first shift brings the maximum on the axis
    /// after `f` to zero and the second brings the minimum on the axis after
    /// that to zero. Two patterns that differ only by a translation have the
    /// same aligned form.
    pub fn aligned(&self, free_axis: Axis) -> Pattern {
        let (pinned_max, pinned_min) = match free_axis {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        };

        let Some(max_coord) = self.max_coord(pinned_max) else {
            return Pattern::new();
        };
        let aligned = self.shifted(max_coord, pinned_min);
        let min_coord = aligned.min_coord(pinned_min).unwrap_or(0);
        aligned.shifted(-min_coord, pinned_max)
    }

    /// Translate so the x and y extents straddle the origin.
    ///
    /// Midpoints use integer division (truncating toward zero), so the
    /// result is only approximately centered.
    pub fn centered(&self) -> Pattern {
        let (Some(min_x), Some(max_x)) = (self.min_coord(Axis::X), self.max_coord(Axis::X)) else {
            return Pattern::new();
        };
        let centered = self.shifted((min_x + max_x) / 2, Axis::Y);

        let min_y = centered.min_coord(Axis::Y).unwrap_or(0);
        let max_y = centered.max_coord(Axis::Y).unwrap_or(0);
        centered.shifted(-((min_y + max_y) / 2), Axis::X)
    }

    /// Whether both patterns hold exactly the same triangles, ignoring order.
    pub fn same_cells(&self, other: &Pattern) -> bool {
        self.len() == other.len()
            && self.iter().all(|t| other.contains(t))
            && other.iter().all(|t| self.contains(t))
    }

    /// The twelve images of this pattern under the lattice's rotation and
    /// reflection group: each of the six rotations (identity first), plain
    /// and mirrored over the z direction.
    pub fn symmetry_images(&self) -> impl Iterator<Item = Pattern> + '_ {
        std::iter::once(None)
            .chain(Rotation::ALL.into_iter().map(Some))
            .flat_map(move |rotation| {
                let turned = match rotation {
                    Some(rotation) => self.rotated(rotation),
                    None => self.clone(),
                };
                let mirrored = turned.reflected(COMPARE_AXIS);
                [turned, mirrored]
            })
    }

    /// Whether `other` is a rotation and/or reflection of this pattern,
    /// up to translation.
    pub fn is_congruent(&self, other: &Pattern) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let target = self.aligned(COMPARE_AXIS);
        other
            .symmetry_images()
            .any(|image| image.aligned(COMPARE_AXIS).same_cells(&target))
    }

    /// How many of the twelve group elements map the shape onto itself.
    pub fn symmetry_order(&self) -> usize {
        let target = self.aligned(COMPARE_AXIS);
        self.symmetry_images()
            .filter(|image| image.aligned(COMPARE_AXIS).same_cells(&target))
            .count()
    }

    /// Whether every triangle can be reached from the first through shared
    /// edges. The empty pattern counts as connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.triangles.first() else {
            return true;
        };

        let mut seen: HashSet<Triangle> = HashSet::with_capacity(self.len());
        let mut stack = vec![start];
        seen.insert(start);

        while let Some(current) = stack.pop() {
            for neighbor in current.neighbors() {
                if self.contains(&neighbor) && seen.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        seen.len() == self.len()
    }

    /// Number of triangle sides with no neighbor inside the pattern.
    pub fn perimeter(&self) -> usize {
        self.triangles
            .iter()
            .flat_map(|t| t.neighbors())
            .filter(|n| !self.contains(n))
            .count()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.is_congruent(other)
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Triangle pattern: ")?;
        for (i, triangle) in self.triangles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", triangle)?;
        }
        Ok(())
    }
}

impl FromIterator<Triangle> for Pattern {
    /// Collect triangles, dropping repeats.
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        let mut pattern = Pattern::new();
        for triangle in iter {
            pattern.push(triangle);
        }
        pattern
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(x: i32, y: i32, z: i32) -> Triangle {
        Triangle::new(x, y, z).unwrap()
    }

    fn pattern(cells: &[(i32, i32, i32)]) -> Pattern {
        cells.iter().map(|&(x, y, z)| tri(x, y, z)).collect()
    }

    /// Three in a row: seed, its x neighbor, and that one's y neighbor.
    fn trapezoid() -> Pattern {
        pattern(&[(0, 1, 0), (0, 0, -1), (1, 0, 0)])
    }

    /// Trapezoid with a fourth cell hung off the seed.
    fn bar() -> Pattern {
        pattern(&[(0, 1, 0), (0, 0, -1), (1, 0, 0), (-1, 1, -1)])
    }

    #[test]
    fn push_rejects_duplicates() {
        let mut p = Pattern::new();
        assert!(p.push(Triangle::SEED));
        assert!(!p.push(Triangle::SEED));
        assert_eq!(p.len(), 1);
        assert!(p.contains(&Triangle::SEED));
    }

    #[test]
    fn extended_leaves_source_untouched() {
        let p = trapezoid();
        let q = p.extended(tri(-1, 1, -1));
        assert_eq!(p.len(), 3);
        assert_eq!(q.len(), 4);
        assert_eq!(&q.triangles()[..3], p.triangles());
    }

    #[test]
    fn extremes() {
        let p = bar();
        assert_eq!(p.min_coord(Axis::X), Some(-1));
        assert_eq!(p.max_coord(Axis::X), Some(1));
        assert_eq!(p.min_coord(Axis::Z), Some(-1));
        assert_eq!(Pattern::new().min_coord(Axis::Y), None);
    }

    #[test]
    fn transforms_keep_order_and_round_trip() {
        let p = bar();
        for axis in Axis::ALL {
            let moved = p.shifted(3, axis);
            assert_eq!(moved.shifted(-3, axis).triangles(), p.triangles());
            assert_eq!(moved.triangles()[0], p.triangles()[0].shifted(3, axis));
            assert_eq!(p.reflected(axis).reflected(axis).triangles(), p.triangles());
        }
        let mut turned = p.clone();
        for _ in 0..6 {
            turned = turned.rotated(Rotation::R60);
        }
        assert_eq!(turned.triangles(), p.triangles());
    }

    #[test]
    fn alignment_pins_two_extremes() {
        let p = bar().shifted(5, Axis::X).shifted(-2, Axis::Z);
        for (free, pinned_max, pinned_min) in [
            (Axis::X, Axis::Y, Axis::Z),
            (Axis::Y, Axis::Z, Axis::X),
            (Axis::Z, Axis::X, Axis::Y),
        ] {
            let aligned = p.aligned(free);
            assert_eq!(aligned.max_coord(pinned_max), Some(0), "free axis {}", free);
            assert_eq!(aligned.min_coord(pinned_min), Some(0), "free axis {}", free);
        }
    }

    #[test]
    fn alignment_forgets_translation() {
        let p = trapezoid();
        let q = p.shifted(4, Axis::Y).shifted(-7, Axis::X);
        for axis in Axis::ALL {
            assert!(p.aligned(axis).same_cells(&q.aligned(axis)));
        }
        assert!(Pattern::new().aligned(Axis::Z).is_empty());
    }

    #[test]
    fn centering_truncates_midpoints() {
        // x extent -1..0 and y extent 0..1 both truncate to a zero midpoint.
        let p = pattern(&[(0, 1, 0), (0, 0, -1), (-1, 1, -1)]);
        assert_eq!(p.centered().triangles(), p.triangles());

        let far = p.shifted(6, Axis::Z).shifted(-4, Axis::X);
        let centered = far.centered();
        let x_mid = centered.min_coord(Axis::X).unwrap() + centered.max_coord(Axis::X).unwrap();
        let y_mid = centered.min_coord(Axis::Y).unwrap() + centered.max_coord(Axis::Y).unwrap();
        assert!(x_mid.abs() <= 1, "x extent should straddle 0");
        assert!(y_mid.abs() <= 1, "y extent should straddle 0");
    }

    #[test]
    fn congruence_under_group_and_translation() {
        let p = bar();
        for rotation in Rotation::ALL {
            for axis in Axis::ALL {
                let image = p.rotated(rotation).reflected(axis).shifted(2, Axis::Y);
                assert_eq!(p, image);
                assert_eq!(image, p);
            }
        }
        assert_eq!(p, p.clone());
    }

    #[test]
    fn different_shapes_or_sizes_differ() {
        let big = pattern(&[(0, 1, 0), (0, 0, -1), (-1, 1, -1), (-1, 0, 0)]);
        let straight = pattern(&[(0, 1, 0), (0, 0, -1), (-1, 0, 0), (1, 0, 0)]);
        assert_ne!(bar(), straight);
        assert_ne!(bar(), big);
        assert_ne!(big, straight);
        assert_ne!(trapezoid(), bar());
        assert_ne!(Pattern::new(), trapezoid());
    }

    #[test]
    fn same_cells_ignores_order() {
        let p = trapezoid();
        let q = pattern(&[(1, 0, 0), (0, 1, 0), (0, 0, -1)]);
        assert!(p.same_cells(&q));
        assert!(!p.same_cells(&bar()));
    }

    #[test]
    fn symmetry_orders() {
        assert_eq!(pattern(&[(0, 1, 0)]).symmetry_order(), 6);
        assert_eq!(pattern(&[(0, 1, 0), (0, 0, -1)]).symmetry_order(), 4);
        assert_eq!(trapezoid().symmetry_order(), 2);
        // Big triangle: one cell and all three of its neighbors.
        let big = pattern(&[(0, 1, 0), (0, 0, -1), (-1, 1, -1), (-1, 0, 0)]);
        assert_eq!(big.symmetry_order(), 6);
        assert_eq!(big.symmetry_images().count(), 12);
    }

    #[test]
    fn connectivity_and_perimeter() {
        assert!(trapezoid().is_connected());
        assert!(Pattern::new().is_connected());
        let split = pattern(&[(0, 1, 0), (2, 1, -2)]);
        assert!(!split.is_connected());

        assert_eq!(pattern(&[(0, 1, 0)]).perimeter(), 3);
        assert_eq!(pattern(&[(0, 1, 0), (0, 0, -1)]).perimeter(), 4);
        assert_eq!(trapezoid().perimeter(), 5);
    }

    #[test]
    fn textual_description() {
        let p = pattern(&[(0, 1, 0), (0, 0, -1)]);
        assert_eq!(
            p.to_string(),
            "Triangle pattern: Triangle(0, 1, 0), Triangle(0, 0, -1)"
        );
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"triangles":[{"x":0,"y":1,"z":0},{"x":0,"y":0,"z":-1}]}"#
        );
    }
}
