#![forbid(unsafe_code)]

//! SVG export of a scene snapshot.
//!
//! Each shape becomes a `<text>` element centred on its position
//! (`text-anchor="middle"`, `dominant-baseline="middle"`), sized in pixels,
//! with its current opacity. The document uses the canvas size as both its
//! dimensions and its `viewBox`.
//!
//! # Usage
//!
//! ```
//! use wcloud_core::CanvasSpec;
//! use wcloud_render::{SceneSurface, ShapeSpec, Surface, SvgExporter};
//!
//! let mut scene = SceneSurface::new(CanvasSpec::DEFAULT);
//! scene.create_shape(ShapeSpec {
//!     term: "cloud".into(),
//!     x: 500.0,
//!     y: 204.0,
//!     font_size_px: 22.0,
//!     opacity: 0.9,
//! });
//! let svg = SvgExporter::default().export(&scene);
//! assert!(svg.contains(">cloud</text>"));
//! ```

use std::fmt::Write;

use crate::scene::{SceneSurface, ShapeSnapshot};

/// Configuration for SVG export.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    pub font_family: String,
    /// Fill color for labels (any SVG paint value).
    pub fill: String,
    /// Optional background fill; `None` leaves the document transparent.
    pub background: Option<String>,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".into(),
            fill: "#333333".into(),
            background: None,
        }
    }
}

impl SvgExporter {
    /// Export the scene's current state.
    pub fn export(&self, scene: &SceneSurface) -> String {
        let canvas = scene.canvas();
        self.export_shapes(canvas.width, canvas.height, &scene.shapes())
    }

    /// Export an explicit list of shapes on a `width`×`height` canvas.
    pub fn export_shapes(&self, width: f64, height: f64, shapes: &[ShapeSnapshot]) -> String {
        let mut out = String::with_capacity(256 + shapes.len() * 160);

        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">"
        );

        if let Some(background) = &self.background {
            out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"");
            escape_into(&mut out, background);
            out.push_str("\"/>");
        }

        out.push_str("<g class=\"main\" font-family=\"");
        escape_into(&mut out, &self.font_family);
        out.push_str("\" fill=\"");
        escape_into(&mut out, &self.fill);
        out.push_str("\">");

        for shape in shapes {
            let _ = write!(
                out,
                "<text class=\"word\" text-anchor=\"middle\" dominant-baseline=\"middle\" \
                 x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}px\" opacity=\"{:.3}\">",
                shape.x, shape.y, shape.font_size_px, shape.opacity
            );
            escape_into(&mut out, &shape.term);
            out.push_str("</text>");
        }

        out.push_str("</g></svg>");
        out
    }
}

/// XML-escape a string into the output buffer (text and attribute safe).
fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
