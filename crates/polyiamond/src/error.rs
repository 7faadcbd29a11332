//! Errors raised while styling or writing a drawing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A style color that SVG can't parse.
    #[error("invalid color for {field}: '{value}'")]
    InvalidColor { field: &'static str, value: String },

    /// A numeric style value out of range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("SVG write error: {0}")]
    Xml(String),
}
