//! SVG rasterization through resvg.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use tiny_skia::Pixmap;

/// Rasterize an SVG document at its own size.
pub fn svg_to_image(svg: &str) -> Result<RgbaImage> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options).context("failed to parse generated SVG")?;

    let size = tree.size().to_int_size();
    let mut pixmap =
        Pixmap::new(size.width(), size.height()).context("could not create pixmap")?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .context("pixmap does not match image size")
}

pub fn save_png(svg: &str, path: &Path) -> Result<()> {
    let image = svg_to_image(svg)?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
}
