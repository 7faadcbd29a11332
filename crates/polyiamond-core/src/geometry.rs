//! Planar geometry types used when projecting lattice triangles.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(...)]` generates the boring parts:
//! - `Debug` = print with `{:?}`
//! - `Clone, Copy` = small stack values, copied implicitly
//! - `PartialEq` = compare with `==`
//!
//! Nothing combinatorial depends on these floats; they only feed the
//! renderer.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether two points coincide within `epsilon`.
    #[inline]
    pub fn approx_eq(&self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Line between two points.
    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Get the midpoint of the line.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Largest absolute coordinate of either endpoint.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.x1.abs().max(self.y1.abs()).max(self.x2.abs()).max(self.y2.abs())
    }
}

/// Get the bounding box of a set of lines as (min_x, min_y, max_x, max_y).
///
/// Returns `None` for an empty slice.
pub fn bounds_of(lines: &[Line]) -> Option<(f64, f64, f64, f64)> {
    if lines.is_empty() {
        return None;
    }

    let xs = lines.iter().flat_map(|l| [l.x1, l.x2]);
    let ys = lines.iter().flat_map(|l| [l.y1, l.y2]);

    let min_x = xs.clone().fold(f64::INFINITY, f64::min);
    let max_x = xs.fold(f64::NEG_INFINITY, f64::max);
    let min_y = ys.clone().fold(f64::INFINITY, f64::min);
    let max_y = ys.fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_measurements() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.midpoint(), Point::new(1.5, 2.0));
        assert_eq!(line.reach(), 4.0);
    }

    #[test]
    fn bounds_cover_all_endpoints() {
        let lines = vec![
            Line::new(-1.0, 2.0, 0.5, 0.0),
            Line::new(3.0, -2.0, 1.0, 1.0),
        ];
        assert_eq!(bounds_of(&lines), Some((-1.0, -2.0, 3.0, 2.0)));
        assert_eq!(bounds_of(&[]), None);
    }
}
