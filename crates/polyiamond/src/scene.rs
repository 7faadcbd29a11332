//! Layout of one pattern drawing in pixel space.
//!
//! The canvas is a square centred on the lattice origin, large enough to hold
//! every projected edge plus one unit of margin. Lattice coordinates map to
//! pixels with y pointing down:
//!
//! ```text
//! px = x * scale + width / 2
//! py = height / 2 - y * scale
//! ```

use polyiamond_core::{Axis, Line, Orientation, Pattern, Point};
use tracing::debug;

use crate::style::RenderStyle;

/// tan(30°)
const TAN_30: f64 = 0.577_350_269_189_625_8;

/// Whether an edge is shared inside the pattern or part of its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    Interior,
    Boundary,
}

/// One pattern edge in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEdge {
    pub line: Line,
    pub kind: EdgeKind,
}

/// Everything needed to draw a pattern, already in pixel coordinates.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// Half-size of the canvas in lattice units.
    pub extent: f64,
    pub grid: Vec<Line>,
    pub axes: Vec<Line>,
    pub edges: Vec<SceneEdge>,
    /// Textual description of the drawn pattern.
    pub description: String,
    pub style: RenderStyle,
}

/// Pattern edges in lattice space, each listed once.
///
/// An edge without a neighbor across it is part of the outline. Shared
/// edges are emitted only from the positively oriented triangle so they
/// aren't drawn twice.
pub fn classify_edges(pattern: &Pattern) -> Vec<(Line, EdgeKind)> {
    let mut edges = Vec::with_capacity(pattern.len() * 3);
    for triangle in pattern {
        for axis in Axis::ALL {
            let line = triangle.edge(axis);
            if !pattern.contains(&triangle.neighbor(axis)) {
                edges.push((line, EdgeKind::Boundary));
            } else if triangle.orientation() == Orientation::Positive {
                edges.push((line, EdgeKind::Interior));
            }
        }
    }
    edges
}

impl Scene {
    /// Lay out `pattern` with `style`.
    pub fn build(pattern: &Pattern, style: &RenderStyle) -> Scene {
        let edges = classify_edges(pattern);

        let radius = edges.iter().map(|(line, _)| line.reach()).fold(0.0, f64::max);
        let extent = radius.trunc() + 1.0;
        let side = 2.0 * extent * style.scale + style.indent;

        let frame = Frame {
            scale: style.scale,
            width: side,
            height: side,
        };

        let grid = if style.show_grid {
            grid_lines(extent).iter().map(|l| frame.line(l)).collect()
        } else {
            Vec::new()
        };

        let axes = if style.show_axes {
            axis_rays(extent).iter().map(|l| frame.line(l)).collect()
        } else {
            Vec::new()
        };

        let edges: Vec<SceneEdge> = edges
            .into_iter()
            .map(|(line, kind)| SceneEdge {
                line: frame.line(&line),
                kind,
            })
            .collect();

        debug!(
            triangles = pattern.len(),
            edges = edges.len(),
            grid = grid.len(),
            size = side,
            "scene laid out"
        );

        Scene {
            width: side,
            height: side,
            extent,
            grid,
            axes,
            edges,
            description: pattern.to_string(),
            style: style.clone(),
        }
    }

    /// Lattice point to pixel position.
    pub fn to_pixels(&self, point: Point) -> Point {
        Frame {
            scale: self.style.scale,
            width: self.width,
            height: self.height,
        }
        .point(point)
    }

    pub fn boundary_edges(&self) -> impl Iterator<Item = &SceneEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Boundary)
    }

    pub fn interior_edges(&self) -> impl Iterator<Item = &SceneEdge> {
        self.edges.iter().filter(|e| e.kind == EdgeKind::Interior)
    }
}

/// Lattice-to-pixel mapping.
struct Frame {
    scale: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn point(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.width / 2.0,
            self.height / 2.0 - p.y * self.scale,
        )
    }

    fn line(&self, line: &Line) -> Line {
        Line::between(self.point(line.start()), self.point(line.end()))
    }
}

/// Lattice lines crossing the box `[-extent, extent]²`.
///
/// Vertical lines sit every `1 / (2 tan 30°)`; the two sloped families are
/// generated in mirrored pairs and clipped at the top and bottom of the box.
fn grid_lines(extent: f64) -> Vec<Line> {
    let (x_min, x_max) = (-extent, extent);
    let (y_min, y_max) = (-extent, extent);
    let step = 2.0 * TAN_30;

    let mut lines = Vec::new();

    let first = (x_min * step).trunc() as i64;
    let last = (x_max * step).trunc() as i64;
    for k in first..=last {
        let x = k as f64 / step;
        lines.push(Line::new(x, y_min, x, y_max));
    }

    let top = (y_max - (x_min * TAN_30).trunc()) as i64;
    let bottom = (y_min - (x_max * TAN_30).trunc()) as i64;
    for y in (bottom + 1..=top).rev() {
        let mut x1 = x_min;
        let mut y1 = y as f64 + x_min * TAN_30;
        let mut x2 = x_max;
        let mut y2 = y1 + (x_max - x_min) * TAN_30;

        if y1 < y_min {
            x1 = x_min + (y_min - y1) / TAN_30;
            y1 = y_min;
        }
        if y2 > y_max {
            x2 = x_max - (y2 - y_max) / TAN_30;
            y2 = y_max;
        }
        if x1 >= x2 {
            continue;
        }

        let x3 = x_max - x1 + x_min;
        let x4 = x_max - x2 + x_min;
        lines.push(Line::new(x1, y1, x2, y2));
        lines.push(Line::new(x3, y1, x4, y2));
    }

    lines
}

/// The three axis rays from the origin to the edge of the box.
fn axis_rays(extent: f64) -> [Line; 3] {
    [
        Line::new(0.0, 0.0, 0.0, extent),
        Line::new(0.0, 0.0, -extent, -extent * TAN_30),
        Line::new(0.0, 0.0, extent, -extent * TAN_30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyiamond_core::Triangle;

    fn pattern(cells: &[(i32, i32, i32)]) -> Pattern {
        cells
            .iter()
            .map(|&(x, y, z)| Triangle::new(x, y, z).unwrap())
            .collect()
    }

    fn rhombus() -> Pattern {
        pattern(&[(0, 1, 0), (0, 0, -1)])
    }

    #[test]
    fn edges_are_listed_once() {
        let edges = classify_edges(&rhombus());
        let boundary = edges.iter().filter(|(_, k)| *k == EdgeKind::Boundary).count();
        let interior = edges.iter().filter(|(_, k)| *k == EdgeKind::Interior).count();
        assert_eq!(boundary, 4);
        assert_eq!(interior, 1);

        let trapezoid = pattern(&[(0, 1, 0), (0, 0, -1), (1, 0, 0)]);
        let edges = classify_edges(&trapezoid);
        assert_eq!(edges.len(), 7);
        assert_eq!(
            edges.iter().filter(|(_, k)| *k == EdgeKind::Boundary).count(),
            trapezoid.perimeter()
        );
    }

    #[test]
    fn canvas_fits_edges_with_margin() {
        let scene = Scene::build(&rhombus(), &RenderStyle::default());
        // Radius 1 -> extent 2 -> 4 units * 200 px + 20 px indent.
        assert_eq!(scene.extent, 2.0);
        assert_eq!(scene.width, 820.0);
        assert_eq!(scene.height, 820.0);
        assert_eq!(scene.to_pixels(Point::new(0.0, 0.0)), Point::new(410.0, 410.0));
        assert_eq!(scene.to_pixels(Point::new(0.0, 1.0)), Point::new(410.0, 210.0));
    }

    #[test]
    fn overlays_follow_style() {
        let full = Scene::build(&rhombus(), &RenderStyle::default());
        assert!(!full.grid.is_empty());
        assert_eq!(full.axes.len(), 3);

        let plain = Scene::build(&rhombus(), &RenderStyle::default().plain());
        assert!(plain.grid.is_empty());
        assert!(plain.axes.is_empty());
        assert_eq!(plain.edges.len(), full.edges.len());
    }

    #[test]
    fn everything_stays_on_canvas() {
        let big = pattern(&[(0, 1, 0), (0, 0, -1), (1, 0, 0), (1, -1, 1), (2, -1, 0)]);
        let scene = Scene::build(&big, &RenderStyle::default());
        let inside = |p: Point| {
            p.x >= -1e-6 && p.x <= scene.width + 1e-6 && p.y >= -1e-6 && p.y <= scene.height + 1e-6
        };
        for line in scene.grid.iter().chain(scene.axes.iter()) {
            assert!(inside(line.start()) && inside(line.end()), "{:?}", line);
        }
        for edge in &scene.edges {
            assert!(inside(edge.line.start()) && inside(edge.line.end()));
        }
    }

    #[test]
    fn boundary_edges_are_pixel_scaled() {
        let scene = Scene::build(&rhombus(), &RenderStyle::default());
        for edge in scene.boundary_edges() {
            assert!((edge.line.length() - 200.0).abs() < 1e-6);
        }
        assert_eq!(scene.interior_edges().count(), 1);
    }
}
