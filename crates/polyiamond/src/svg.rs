//! SVG output for a [`Scene`].
//!
//! The document has a background rect, a `<desc>` holding the pattern's
//! textual form, then one `<g>` per layer (`grid`, `axes`, `interior`,
//! `boundary`) so later layers paint over earlier ones.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use polyiamond_core::{Line, Pattern};

use crate::error::RenderError;
use crate::scene::{EdgeKind, Scene};
use crate::style::RenderStyle;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Validate `style`, lay out `pattern` and write it as SVG.
pub fn render_pattern_svg(pattern: &Pattern, style: &RenderStyle) -> Result<String, RenderError> {
    style.validate()?;
    scene_to_svg(&Scene::build(pattern, style))
}

/// Write a laid-out scene as a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> Result<String, RenderError> {
    let mut doc = SvgWriter::new();
    let style = &scene.style;

    doc.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let width = format!("{:.0}", scene.width);
    let height = format!("{:.0}", scene.height);
    let view_box = format!("0 0 {} {}", width, height);
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("version", "1.1"));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    doc.event(Event::Start(root))?;

    doc.event(Event::Start(BytesStart::new("desc")))?;
    doc.event(Event::Text(BytesText::new(&scene.description)))?;
    doc.event(Event::End(BytesEnd::new("desc")))?;

    let mut background = BytesStart::new("rect");
    background.push_attribute(("width", "100%"));
    background.push_attribute(("height", "100%"));
    background.push_attribute(("fill", style.background.as_str()));
    doc.event(Event::Empty(background))?;

    doc.layer("grid", &style.grid_color, style.grid_width, scene.grid.iter())?;
    doc.layer("axes", &style.axis_color, style.axis_width, scene.axes.iter())?;
    doc.layer(
        "interior",
        &style.edge_color,
        style.interior_width,
        scene.edges.iter().filter(|e| e.kind == EdgeKind::Interior).map(|e| &e.line),
    )?;
    doc.layer(
        "boundary",
        &style.edge_color,
        style.boundary_width,
        scene.edges.iter().filter(|e| e.kind == EdgeKind::Boundary).map(|e| &e.line),
    )?;

    doc.event(Event::End(BytesEnd::new("svg")))?;
    doc.finish()
}

struct SvgWriter {
    inner: Writer<Vec<u8>>,
}

impl SvgWriter {
    fn new() -> Self {
        Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.inner
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }

    /// One stroked group of lines. Empty layers are skipped.
    fn layer<'a>(
        &mut self,
        id: &str,
        color: &str,
        width: f64,
        lines: impl Iterator<Item = &'a Line>,
    ) -> Result<(), RenderError> {
        let mut lines = lines.peekable();
        if lines.peek().is_none() {
            return Ok(());
        }

        let stroke_width = format!("{}", width);
        let mut group = BytesStart::new("g");
        group.push_attribute(("id", id));
        group.push_attribute(("stroke", color));
        group.push_attribute(("stroke-width", stroke_width.as_str()));
        group.push_attribute(("stroke-linecap", "round"));
        group.push_attribute(("fill", "none"));
        self.event(Event::Start(group))?;

        for line in lines {
            let coords = [
                format!("{:.2}", line.x1),
                format!("{:.2}", line.y1),
                format!("{:.2}", line.x2),
                format!("{:.2}", line.y2),
            ];
            let mut element = BytesStart::new("line");
            for (name, value) in ["x1", "y1", "x2", "y2"].iter().zip(coords.iter()) {
                element.push_attribute((*name, value.as_str()));
            }
            self.event(Event::Empty(element))?;
        }

        self.event(Event::End(BytesEnd::new("g")))
    }

    fn finish(self) -> Result<String, RenderError> {
        String::from_utf8(self.inner.into_inner()).map_err(|e| RenderError::Xml(e.to_string()))
    }
}
