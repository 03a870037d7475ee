//! Polyline path primitives.
//!
//! Everything a carrier layer is made of bottoms out in two builders:
//! [`arc`], which approximates a circular arc as a polyline, and [`rect`],
//! which produces an axis-aligned closed rectangle. Both return a
//! [`PathFragment`] holding the vertices the pen visits; serialization to
//! path data happens at the output boundary, not here.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::GeometryError;

/// Angular step for arc approximation, roughly half a degree.
pub const ARC_STEP: f64 = PI / 360.0;

/// A 2D point in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the circle of the given center and radius at angle `theta`.
    pub fn on_circle(center: Point, radius: f64, theta: f64) -> Self {
        Self {
            x: center.x + theta.cos() * radius,
            y: center.y + theta.sin() * radius,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One pen stroke: an ordered run of vertices, optionally preceded by a
/// pen-up move to the first vertex.
///
/// A continuation fragment (`pen_up == false`) does not carry its start
/// vertex; the caller's pen is assumed to already sit there, and the first
/// stored vertex is the first point the pen draws a segment to.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFragment {
    points: Vec<Point>,
    pen_up: bool,
}

impl PathFragment {
    /// Builds a fragment from precomputed vertices.
    pub fn polyline(points: Vec<Point>, pen_up: bool) -> Self {
        Self { points, pen_up }
    }

    /// The vertices the pen visits, in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the fragment starts with a pen-up move.
    pub fn pen_up(&self) -> bool {
        self.pen_up
    }
}

/// A named, stroked, unfilled path made of one or more fragments.
///
/// `closed` marks solid boundaries (outline, holes, cutout) that get an
/// explicit close at serialization time. Multi-circle pin sets stay open;
/// each full-revolution circle already lands back on its start point.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    label: String,
    fragments: Vec<PathFragment>,
    closed: bool,
}

impl Shape {
    pub fn new(label: impl Into<String>, closed: bool) -> Self {
        Self {
            label: label.into(),
            fragments: Vec::new(),
            closed,
        }
    }

    pub fn push(&mut self, fragment: PathFragment) {
        self.fragments.push(fragment);
    }

    /// Human-readable annotation carried into the output document.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fragments(&self) -> &[PathFragment] {
        &self.fragments
    }

    pub fn closed(&self) -> bool {
        self.closed
    }
}

/// Approximates a circular arc from `theta0` to `theta1` (radians, either
/// winding) as a polyline.
///
/// The segment count is `1 + floor(|theta1 - theta0| / ARC_STEP)` and the
/// per-segment delta is recomputed from it, so the endpoint at `theta1` is
/// exact regardless of rounding and a degenerate range still yields one
/// segment. No closing segment is added; a full 2pi sweep closes itself.
pub fn arc(
    center: Point,
    radius: f64,
    theta0: f64,
    theta1: f64,
    pen_up: bool,
) -> Result<PathFragment, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius { radius });
    }
    if !theta0.is_finite() || !theta1.is_finite() {
        return Err(GeometryError::InvalidAngleRange { theta0, theta1 });
    }

    let segments = 1 + ((theta1 - theta0).abs() / ARC_STEP) as usize;
    let dtheta = (theta1 - theta0) / segments as f64;

    let mut points = Vec::with_capacity(segments + 1);
    if pen_up {
        points.push(Point::on_circle(center, radius, theta0));
    }
    for i in 0..segments {
        let theta = theta0 + (i + 1) as f64 * dtheta;
        points.push(Point::on_circle(center, radius, theta));
    }

    Ok(PathFragment { points, pen_up })
}

/// Closed axis-aligned rectangle with its upper-left corner at `top_left`,
/// wound clockwise in screen coordinates. Five vertices, first == last,
/// always pen-up.
pub fn rect(top_left: Point, width: f64, height: f64) -> Result<PathFragment, GeometryError> {
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        return Err(GeometryError::InvalidRectDimensions { width, height });
    }

    let points = vec![
        top_left,
        Point::new(top_left.x + width, top_left.y),
        Point::new(top_left.x + width, top_left.y + height),
        Point::new(top_left.x, top_left.y + height),
        top_left,
    ];

    Ok(PathFragment {
        points,
        pen_up: true,
    })
}
