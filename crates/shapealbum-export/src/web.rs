//! Web export: one HTML page with an inline SVG per snapshot.
//!
//! Rectangles are placed by their min corner, ovals by their center with
//! the extents used as radii.

use std::fmt::Write;

use shapealbum_core::{Shape, ShapeKind, Snapshot};

/// Page and drawing-area settings for the web export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebOptions {
    pub title: String,
    pub heading: String,
    /// Minimum SVG width; grows to fit shapes past the right edge
    pub width: u32,
    /// Minimum SVG height; grows to fit shapes past the bottom edge
    pub height: u32,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            title: "Shapes Photo Album".to_string(),
            heading: "Welcome To The Album!".to_string(),
            width: 1000,
            height: 1000,
        }
    }
}

/// Escape text for use inside HTML element content or quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// SVG size that fits every shape of the snapshot, never below the configured size
fn canvas_size(snapshot: &Snapshot, options: &WebOptions) -> (i64, i64) {
    snapshot.shapes().fold(
        (i64::from(options.width), i64::from(options.height)),
        |(w, h), shape| {
            let (_, _, max_x, max_y) = shape.bounds();
            (w.max(max_x), h.max(max_y))
        },
    )
}

/// SVG element for a single shape
pub fn render_shape(shape: &Shape) -> String {
    let pos = shape.position();
    let extent = shape.extent();
    let fill = shape.color().to_css();
    match shape.kind() {
        ShapeKind::Rectangle => format!(
            "<rect id='{}' x='{}' y='{}' width='{}' height='{}' fill='{}' />\n",
            escape_html(shape.name()),
            pos.x,
            pos.y,
            extent.horizontal,
            extent.vertical,
            fill
        ),
        ShapeKind::Oval => format!(
            "<ellipse id='{}' cx='{}' cy='{}' rx='{}' ry='{}' fill='{}' />\n",
            escape_html(shape.name()),
            pos.x,
            pos.y,
            extent.horizontal,
            extent.vertical,
            fill
        ),
    }
}

/// Metadata paragraphs and SVG drawing for one snapshot
pub fn render_snapshot(snapshot: &Snapshot, options: &WebOptions) -> String {
    let mut html = String::new();
    let (width, height) = canvas_size(snapshot, options);

    let _ = writeln!(html, "<p>Snapshot ID: {}</p>", escape_html(snapshot.id().as_str()));
    let _ = writeln!(html, "<p>Snapshot Timestamp: {}</p>", escape_html(snapshot.timestamp()));
    let _ = writeln!(html, "<p>Snapshot Description: {}</p>\n", escape_html(snapshot.description()));

    let _ = writeln!(html, "<svg width='{width}' height='{height}'>");
    html.push_str("<g transform=\"translate(0, 0)\">\n");
    for shape in snapshot.shapes() {
        html.push_str(&render_shape(shape));
    }
    html.push_str("</g>\n</svg>\n");
    html
}

/// Full HTML page for all snapshots, oldest first
pub fn export_html(snapshots: &[Snapshot], options: &WebOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&options.title));
    html.push_str(
        "<style>\n\
         .snapshot {\n    border: 2px solid black;\n    padding: 10px;\n    margin-bottom: 20px;\n    background-color: rgb(255, 255, 153);\n}\n\
         h1 {\n  font-family: 'Comic Sans MS', cursive;\n  color: orange;\n}\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&options.heading));

    for snapshot in snapshots {
        html.push_str("<div class='snapshot'>\n");
        html.push_str(&render_snapshot(snapshot, options));
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scenario_snapshots;

    #[test]
    fn shapes_render_by_kind() {
        let snaps = scenario_snapshots();
        let shapes: Vec<_> = snaps[0].shapes().collect();
        assert_eq!(
            render_shape(shapes[0]),
            "<rect id='R' x='200' y='200' width='50' height='100' fill='rgb(255,0,0)' />\n"
        );
        assert_eq!(
            render_shape(shapes[1]),
            "<ellipse id='O' cx='500' cy='100' rx='60' ry='30' fill='rgb(0,0,255)' />\n"
        );
    }

    #[test]
    fn page_contains_every_snapshot_in_order() {
        let snaps = scenario_snapshots();
        let html = export_html(&snaps, &WebOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Shapes Photo Album</title>"));
        assert!(html.contains("<h1>Welcome To The Album!</h1>"));
        assert_eq!(html.matches("<div class='snapshot'>").count(), 2);

        let first = html.find("Snapshot Description: Initial").unwrap();
        let second = html.find("Snapshot Description: After moving").unwrap();
        assert!(first < second);
        assert!(html.contains("<svg width='1000' height='1000'>"));
    }

    #[test]
    fn svg_grows_to_fit_far_shapes() {
        let snaps = scenario_snapshots();
        let options = WebOptions {
            width: 100,
            height: 100,
            ..WebOptions::default()
        };
        let html = render_snapshot(&snaps[0], &options);
        // Oval at (500,100) with radii (60,30) reaches x=560, y=130; rect reaches y=300
        assert!(html.contains("<svg width='560' height='300'>"));
    }

    #[test]
    fn extreme_coordinates_render_without_overflow() {
        let mut album = shapealbum_session::Album::new();
        album
            .run_script(
                "shape R rectangle 2147483647 0 10 10 0 0 0\n\
                 shape O oval 0 0 -2147483648 1 0 0 0\n\
                 snapshot big\n",
            )
            .unwrap();
        let html = export_html(&album.snapshots(), &WebOptions::default());
        assert!(html.contains("<svg width='2147483657' height='1000'>"));
        assert!(html.contains("<ellipse id='O' cx='0' cy='0' rx='-2147483648' ry='1'"));
    }

    #[test]
    fn descriptions_are_escaped() {
        assert_eq!(escape_html("a<b & 'c'"), "a&lt;b &amp; &#39;c&#39;");
    }
}
