//! Render style: sizes, colors and which overlays to draw.
//!
//! Every field has a default, so a style file only lists what it changes:
//!
//! ```yaml
//! scale: 120
//! show_grid: false
//! edge_color: "#224488"
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Visual settings for one drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Pixels per lattice unit
    pub scale: f64,
    /// Extra pixels added to both canvas dimensions
    pub indent: f64,
    /// Draw the three families of lattice lines
    pub show_grid: bool,
    /// Draw the three axis rays from the origin
    pub show_axes: bool,
    pub background: String,
    pub grid_color: String,
    pub axis_color: String,
    pub edge_color: String,
    pub grid_width: f64,
    pub axis_width: f64,
    /// Stroke for edges shared by two triangles of the pattern
    pub interior_width: f64,
    /// Stroke for the outline of the pattern
    pub boundary_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            scale: 200.0,
            indent: 20.0,
            show_grid: true,
            show_axes: true,
            background: "white".to_string(),
            grid_color: "lightgray".to_string(),
            axis_color: "gray".to_string(),
            edge_color: "black".to_string(),
            grid_width: 1.0,
            axis_width: 1.0,
            interior_width: 1.0,
            boundary_width: 4.0,
        }
    }
}

impl RenderStyle {
    /// Check colors and sizes.
    pub fn validate(&self) -> Result<(), RenderError> {
        for (field, value) in [
            ("background", &self.background),
            ("grid_color", &self.grid_color),
            ("axis_color", &self.axis_color),
            ("edge_color", &self.edge_color),
        ] {
            if svgtypes::Color::from_str(value).is_err() {
                return Err(RenderError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }

        for (field, value) in [
            ("scale", self.scale),
            ("grid_width", self.grid_width),
            ("axis_width", self.axis_width),
            ("interior_width", self.interior_width),
            ("boundary_width", self.boundary_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RenderError::InvalidStyle(format!(
                    "{} must be positive, got {}",
                    field, value
                )));
            }
        }

        if !(self.indent.is_finite() && self.indent >= 0.0) {
            return Err(RenderError::InvalidStyle(format!(
                "indent must not be negative, got {}",
                self.indent
            )));
        }

        Ok(())
    }

    /// Same style without grid or axes.
    pub fn plain(&self) -> Self {
        Self {
            show_grid: false,
            show_axes: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_valid() {
        assert!(RenderStyle::default().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_color() {
        let style = RenderStyle {
            edge_color: "blackish".to_string(),
            ..RenderStyle::default()
        };
        match style.validate() {
            Err(RenderError::InvalidColor { field, value }) => {
                assert_eq!(field, "edge_color");
                assert_eq!(value, "blackish");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn accepts_hex_and_rgb_colors() {
        let style = RenderStyle {
            background: "#fafafa".to_string(),
            grid_color: "rgb(200, 200, 200)".to_string(),
            ..RenderStyle::default()
        };
        assert!(style.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let style = RenderStyle {
            boundary_width: 0.0,
            ..RenderStyle::default()
        };
        assert!(matches!(style.validate(), Err(RenderError::InvalidStyle(_))));

        let style = RenderStyle {
            indent: -1.0,
            ..RenderStyle::default()
        };
        assert!(matches!(style.validate(), Err(RenderError::InvalidStyle(_))));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let style: RenderStyle = serde_yaml::from_str("scale: 50\nshow_grid: false\n").unwrap();
        assert_eq!(style.scale, 50.0);
        assert!(!style.show_grid);
        assert!(style.show_axes);
        assert_eq!(style.boundary_width, 4.0);
    }
}
