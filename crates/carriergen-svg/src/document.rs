//! SVG document rendering and output.
//!
//! Turns an assembled [`Layer`] into a self-contained SVG with a 1:1
//! unit-to-inch mapping: declared width/height in inches, viewBox spanning
//! the image bounding box, one stroked unfilled path per shape preceded by
//! its label as a comment.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use carriergen_core::{Layer, Shape};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::SvgError;

const STROKE_WIDTH: &str = ".01";

/// Renders a layer as a complete SVG document.
pub fn render(layer: &Layer) -> String {
    let mut out = String::new();
    out.push_str(
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">",
    );
    let _ = write!(
        out,
        "<svg version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" xml:space=\"preserve\" \
         width=\"{w:.6}in\" height=\"{h:.6}in\" \
         viewBox=\"{:.6} {:.6} {w:.6} {h:.6}\">",
        0.0,
        0.0,
        w = layer.width,
        h = layer.height,
    );
    out.push('\n');

    for shape in &layer.shapes {
        let _ = writeln!(out, "<!-- {} -->", shape.label());
        let _ = writeln!(
            out,
            "  <path stroke=\"black\" fill=\"none\" stroke-width=\"{STROKE_WIDTH}\" d=\"{}\" />",
            path_data(shape)
        );
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

/// Renders a layer and persists it atomically at `path`.
///
/// The document is serialized fully in memory and written through a
/// temporary file in the destination directory, then renamed into place,
/// so a failed write never leaves a partial document behind.
pub fn write(layer: &Layer, path: &Path) -> Result<(), SvgError> {
    let svg = render(layer);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(svg.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| SvgError::Io(e.error))?;

    debug!(path = %path.display(), bytes = svg.len(), "wrote svg document");
    Ok(())
}

/// Path data for one shape: a move for each pen-up fragment, line segments
/// for everything else, and a close command for solid boundaries.
fn path_data(shape: &Shape) -> String {
    let mut d = String::new();
    for fragment in shape.fragments() {
        let mut points = fragment.points().iter();
        if fragment.pen_up() {
            if let Some(p) = points.next() {
                let _ = write!(d, " M{:.6},{:.6}", p.x, p.y);
            }
        }
        for p in points {
            let _ = write!(d, " L{:.6},{:.6}", p.x, p.y);
        }
    }
    if shape.closed() {
        d.push_str(" z");
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use carriergen_core::{arc, Layer, LayerKind, Point, Shape};
    use std::f64::consts::PI;

    fn sample_layer() -> Layer {
        let mut circle = Shape::new("Test circle", false);
        circle.push(arc(Point::new(1.0, 1.0), 0.5, 0.0, 2.0 * PI, true).unwrap());

        let mut boundary = Shape::new("Test boundary", true);
        boundary.push(arc(Point::new(1.0, 1.0), 0.25, 0.0, PI, true).unwrap());

        Layer {
            kind: LayerKind::Top,
            width: 8.6,
            height: 6.5,
            shapes: vec![circle, boundary],
        }
    }

    #[test]
    fn document_declares_physical_size_and_viewbox() {
        let svg = render(&sample_layer());
        assert!(svg.starts_with("<!DOCTYPE svg"));
        assert!(svg.contains("width=\"8.600000in\""));
        assert!(svg.contains("height=\"6.500000in\""));
        assert!(svg.contains("viewBox=\"0.000000 0.000000 8.600000 6.500000\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn one_path_and_comment_per_shape() {
        let svg = render(&sample_layer());
        assert_eq!(svg.matches("<path ").count(), 2);
        assert!(svg.contains("<!-- Test circle -->"));
        assert!(svg.contains("<!-- Test boundary -->"));
        assert!(svg.contains("stroke=\"black\" fill=\"none\" stroke-width=\".01\""));
    }

    #[test]
    fn only_closed_shapes_get_a_close_command() {
        let layer = sample_layer();
        let open = path_data(&layer.shapes[0]);
        let closed = path_data(&layer.shapes[1]);
        assert!(!open.ends_with(" z"));
        assert!(closed.ends_with(" z"));
        assert!(open.starts_with(" M"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let layer = sample_layer();
        assert_eq!(render(&layer), render(&layer));
    }

    #[test]
    fn write_persists_the_rendered_document() {
        let dir = tempfile::tempdir().unwrap();
        let layer = sample_layer();
        let path = dir.path().join("test_top.svg");

        write(&layer, &path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render(&layer));
    }
}
