//! Carrier shape composition.
//!
//! Builds every shape of a Beseler 23C negative carrier — paddle outline
//! with tangent fillets, separator holes, film cutout, aligner pins, the
//! ring layer and its alignment holes — from explicit dimension and format
//! values, and assembles them into cuttable layers.
//!
//! All geometry is centered on a single point at half the image height on
//! both axes; every placement below is relative to that center.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

use crate::error::{GeometryError, ParameterError};
use crate::layers::{Layer, LayerKind};
use crate::path::{arc, PathFragment, Point, Shape};

/// Radius of the four ring alignment holes.
const RING_ALIGNER_RADIUS: f64 = 0.125;
/// How far the ring aligner centers sit inside the ring's outer edge.
const RING_ALIGNER_INSET: f64 = 0.25;
/// Radial wall of the washer; inner diameter = outer diameter - 2 * wall.
const RING_WALL: f64 = 0.5;
/// Margin between the large circle and the extra pin centers.
const EXTRA_PIN_MARGIN: f64 = 0.625;
/// Extra pin diameter on the top layer.
pub const EXTRA_PIN_DIAMETER_TOP: f64 = 0.750;
/// Undersized extra pin diameter on the bottom layer, for stack clearance.
pub const EXTRA_PIN_DIAMETER_BOTTOM: f64 = 0.375;
/// Undersized aligner pin scale on the bottom layer.
pub const BOTTOM_ALIGNER_SCALE: f64 = 0.5;
/// Separator hole radius as a fraction of half the handle width.
const SEPARATOR_HOLE_FACTOR: f64 = 0.6;

/// Fixed paddle and ring envelope shared by every film format.
///
/// All values are inches. `Default` carries the Beseler 23C dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarrierDimensions {
    /// Bounding box of the whole drawing.
    pub image_width: f64,
    pub image_height: f64,
    /// Major diameter of the paddle disc.
    pub large_diameter: f64,
    pub handle_width: f64,
    /// Handle length past the large circle.
    pub handle_length: f64,
    /// Outer diameter of the washer-shaped ring layer.
    pub ring_diameter: f64,
    /// Radius of the tangent fillet joining disc and handle.
    pub handle_fillet: f64,
    /// Corner round radius at the handle tip.
    pub handle_corner_radius: f64,
}

impl Default for CarrierDimensions {
    fn default() -> Self {
        Self {
            image_width: 8.6,
            image_height: 6.5,
            large_diameter: 6.375,
            handle_width: 1.135,
            handle_length: 8.450 - 6.375,
            ring_diameter: 4.725,
            handle_fillet: 0.750,
            handle_corner_radius: 0.150,
        }
    }
}

impl CarrierDimensions {
    pub fn large_radius(&self) -> f64 {
        self.large_diameter / 2.0
    }

    pub fn ring_radius(&self) -> f64 {
        self.ring_diameter / 2.0
    }

    /// Common center of the large circle, ring, and film cutout.
    pub fn center(&self) -> Point {
        let c = self.image_height / 2.0;
        Point::new(c, c)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("image_width", self.image_width),
            ("image_height", self.image_height),
            ("large_diameter", self.large_diameter),
            ("handle_width", self.handle_width),
            ("handle_length", self.handle_length),
            ("ring_diameter", self.ring_diameter),
            ("handle_fillet", self.handle_fillet),
            ("handle_corner_radius", self.handle_corner_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NonPositiveDimension {
                    name: name.to_string(),
                    value,
                });
            }
        }

        // The fillet tangency angle is asin of this ratio; at >= 1 the
        // handle plus fillet no longer fits inside the paddle diameter.
        let ratio =
            (self.handle_width / 2.0 + self.handle_fillet) / (self.large_radius() + self.handle_fillet);
        if ratio >= 1.0 {
            return Err(ParameterError::InvalidValue {
                name: "handle_width".to_string(),
                reason: "handle and fillet do not fit inside the paddle diameter".to_string(),
            });
        }

        Ok(())
    }
}

/// Per-film-format inputs for one carrier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatParameters {
    /// Base name for output documents, e.g. `23C_35mm`.
    pub name: String,
    /// Cutout opening along the film travel direction.
    pub cut_width: f64,
    /// Cutout opening across the film.
    pub cut_height: f64,
    /// Physical film strip width, including clearance.
    pub film_width: f64,
    /// Aligner pin diameter.
    pub aligner_diameter: f64,
    /// Whether the supplementary 45-degree pin set is drawn.
    #[serde(default)]
    pub extra_pins: bool,
}

impl FormatParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.name.is_empty() {
            return Err(ParameterError::EmptyName);
        }
        for (name, value) in [
            ("cut_width", self.cut_width),
            ("cut_height", self.cut_height),
            ("film_width", self.film_width),
            ("aligner_diameter", self.aligner_diameter),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NonPositiveDimension {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Composes carrier shapes for one film format.
///
/// Fully deterministic: the same dimensions and parameters always produce
/// the same shapes.
pub struct CarrierGenerator {
    dims: CarrierDimensions,
    params: FormatParameters,
}

impl CarrierGenerator {
    /// Creates a generator, validating both inputs up front.
    pub fn new(
        dims: CarrierDimensions,
        params: FormatParameters,
    ) -> Result<Self, ParameterError> {
        dims.validate()?;
        params.validate()?;
        Ok(Self { dims, params })
    }

    pub fn dimensions(&self) -> &CarrierDimensions {
        &self.dims
    }

    pub fn parameters(&self) -> &FormatParameters {
        &self.params
    }

    /// Angle at which the handle-side fillet meets the large circle,
    /// from the tangency condition: the fillet center sits on the ray
    /// through the tangent point at distance `large_radius + fillet`.
    fn handle_theta0(&self) -> f64 {
        let d = &self.dims;
        ((d.handle_width / 2.0 + d.handle_fillet) / (d.large_radius() + d.handle_fillet)).asin()
    }

    /// Fillet centers on either side of the handle.
    fn fillet_centers(&self) -> (Point, Point) {
        let d = &self.dims;
        let c = d.center();
        let theta0 = self.handle_theta0();
        let dist = d.handle_fillet + d.large_radius();
        let a = Point::new(c.x + dist * theta0.cos(), c.y - dist * theta0.sin());
        let b = Point::new(c.x + dist * theta0.cos(), c.y + dist * theta0.sin());
        (a, b)
    }

    /// Paddle outline: large-circle arc skipping the handle wedge, fillet
    /// into the handle, two corner rounds at the tip, and the mirror fillet
    /// back. One continuous stroke, explicitly closed.
    pub fn paddle_outline(&self) -> Result<Shape, GeometryError> {
        let d = &self.dims;
        let c = d.center();
        let large_rad = d.large_radius();
        let theta0 = self.handle_theta0();
        let theta1 = FRAC_PI_2 - theta0;
        let (fillet_a, fillet_b) = self.fillet_centers();

        let mut shape = Shape::new("Paddle outline", true);
        shape.push(arc(c, large_rad, theta0, 2.0 * PI - theta0, true)?);

        // Fillet into the handle's near edge. The 1.5 rad start is
        // load-bearing: carriers already in service were cut with this
        // sweep, so it must not be "corrected" to a symmetric form.
        shape.push(arc(fillet_a, d.handle_fillet, 1.5 + theta1, FRAC_PI_2, false)?);

        // Corner rounds at the handle tip.
        let handle_end = d.handle_length + c.x + large_rad;
        let r = d.handle_corner_radius;
        shape.push(arc(
            Point::new(handle_end - r, c.y - 0.5 * d.handle_width + r),
            r,
            -FRAC_PI_2,
            0.0,
            false,
        )?);
        shape.push(arc(
            Point::new(handle_end - r, c.y + 0.5 * d.handle_width - r),
            r,
            0.0,
            FRAC_PI_2,
            false,
        )?);

        // Mirror fillet on the return path.
        shape.push(arc(
            fillet_b,
            d.handle_fillet,
            1.5 * PI,
            1.5 * PI - theta1,
            false,
        )?);

        Ok(shape)
    }

    /// Witness holes for prying the stacked top and bottom layers apart
    /// after cutting: one in the handle, one 80%-scaled near the far edge
    /// of the disc.
    pub fn separator_holes(&self) -> Result<Shape, GeometryError> {
        let d = &self.dims;
        let c = d.center();
        let large_rad = d.large_radius();
        let r = d.handle_width / 2.0 * SEPARATOR_HOLE_FACTOR;

        let mut shape = Shape::new("Paddle separator holes", true);
        shape.push(arc(
            Point::new(c.x + large_rad + d.handle_length - d.handle_width / 2.0, c.y),
            r,
            0.0,
            2.0 * PI,
            true,
        )?);
        shape.push(arc(
            Point::new(c.x - large_rad + r * 1.2, c.y),
            r * 0.8,
            0.0,
            2.0 * PI,
            true,
        )?);
        Ok(shape)
    }

    /// Film cutout rectangle, centered on the carrier center. The film runs
    /// vertically through the paddle, so cut_height spans x and cut_width
    /// spans y.
    pub fn film_cutout(&self) -> Result<Shape, GeometryError> {
        let p = &self.params;
        let c = self.dims.center();
        let x0 = c.x - p.cut_height / 2.0;
        let y0 = c.y - p.cut_width / 2.0;

        let mut shape = Shape::new(
            format!("Film cutout {:.4}x{:.4}\"", p.cut_width, p.cut_height),
            true,
        );
        shape.push(PathFragment::polyline(
            vec![
                Point::new(x0, y0),
                Point::new(x0 + p.cut_height, y0),
                Point::new(x0 + p.cut_height, y0 + p.cut_width),
                Point::new(x0, y0 + p.cut_width),
            ],
            true,
        ));
        Ok(shape)
    }

    /// Four aligner pins, one per cutout corner. Pins straddle the film
    /// edge: pushed outside the film strip in x, pulled inside the cutout
    /// in y. `scale` shrinks the drawn diameter without moving the centers,
    /// which is how the bottom layer gets its undersized pins.
    pub fn aligner_pins(&self, scale: f64) -> Result<Shape, GeometryError> {
        let p = &self.params;
        let c = self.dims.center();
        let r = p.aligner_diameter / 2.0;

        let centers = [
            Point::new(c.x - p.film_width / 2.0 - r, c.y - p.cut_width / 2.0 + r),
            Point::new(c.x + p.film_width / 2.0 + r, c.y - p.cut_width / 2.0 + r),
            Point::new(c.x - p.film_width / 2.0 - r, c.y + p.cut_width / 2.0 - r),
            Point::new(c.x + p.film_width / 2.0 + r, c.y + p.cut_width / 2.0 - r),
        ];
        circle_set(
            format!("Aligner pins {:.4}\" diam", p.aligner_diameter * scale),
            &centers,
            r * scale,
        )
    }

    /// The washer-shaped ring layer: two concentric circles.
    pub fn ring(&self) -> Result<Shape, GeometryError> {
        let d = &self.dims;
        let c = d.center();
        let outer = d.ring_radius();

        let mut shape = Shape::new(
            format!(
                "Ring OD={:.4}\", ID={:.4}\"",
                d.ring_diameter,
                d.ring_diameter - 2.0 * RING_WALL
            ),
            false,
        );
        shape.push(arc(c, outer, 0.0, 2.0 * PI, true)?);
        shape.push(arc(c, outer - RING_WALL, 0.0, 2.0 * PI, true)?);
        Ok(shape)
    }

    /// Four small alignment holes at the cardinal directions, just inside
    /// the ring's outer edge. Drawn on both the bottom layer and the ring
    /// so the two register.
    pub fn ring_aligners(&self) -> Result<Shape, GeometryError> {
        let c = self.dims.center();
        let off = self.dims.ring_radius() - RING_ALIGNER_INSET;

        let centers = [
            Point::new(c.x, c.y - off),
            Point::new(c.x, c.y + off),
            Point::new(c.x - off, c.y),
            Point::new(c.x + off, c.y),
        ];
        circle_set("Ring alignment holes".to_string(), &centers, RING_ALIGNER_RADIUS)
    }

    /// Supplementary registration pins at 45 degrees from center, sized to
    /// sit inside the large circle. Top and bottom layers pass different
    /// diameters on purpose.
    pub fn extra_pins(&self, diameter: f64) -> Result<Shape, GeometryError> {
        let c = self.dims.center();
        let off = (self.dims.large_radius() - EXTRA_PIN_MARGIN) / f64::sqrt(2.0);

        let centers = [
            Point::new(c.x - off, c.y - off),
            Point::new(c.x - off, c.y + off),
            Point::new(c.x + off, c.y - off),
            Point::new(c.x + off, c.y + off),
        ];
        circle_set("Extra alignment pins".to_string(), &centers, diameter / 2.0)
    }

    /// Assembles the ordered shape list for one layer.
    pub fn assemble(&self, kind: LayerKind) -> Result<Layer, GeometryError> {
        let mut shapes = Vec::new();
        match kind {
            LayerKind::Top => {
                shapes.push(self.paddle_outline()?);
                shapes.push(self.film_cutout()?);
                shapes.push(self.aligner_pins(1.0)?);
                if self.params.extra_pins {
                    shapes.push(self.extra_pins(EXTRA_PIN_DIAMETER_TOP)?);
                }
            }
            LayerKind::Bottom => {
                shapes.push(self.paddle_outline()?);
                shapes.push(self.separator_holes()?);
                shapes.push(self.film_cutout()?);
                shapes.push(self.aligner_pins(BOTTOM_ALIGNER_SCALE)?);
                if self.params.extra_pins {
                    shapes.push(self.extra_pins(EXTRA_PIN_DIAMETER_BOTTOM)?);
                }
                shapes.push(self.ring_aligners()?);
            }
            LayerKind::Ring => {
                shapes.push(self.ring()?);
                shapes.push(self.ring_aligners()?);
            }
            LayerKind::All => {
                shapes.push(self.paddle_outline()?);
                shapes.push(self.separator_holes()?);
                shapes.push(self.film_cutout()?);
                shapes.push(self.aligner_pins(1.0)?);
                shapes.push(self.aligner_pins(BOTTOM_ALIGNER_SCALE)?);
                if self.params.extra_pins {
                    shapes.push(self.extra_pins(EXTRA_PIN_DIAMETER_TOP)?);
                    shapes.push(self.extra_pins(EXTRA_PIN_DIAMETER_BOTTOM)?);
                }
                shapes.push(self.ring()?);
                shapes.push(self.ring_aligners()?);
            }
        }

        debug!(
            format = %self.params.name,
            layer = %kind,
            shapes = shapes.len(),
            "assembled layer"
        );

        Ok(Layer {
            kind,
            width: self.dims.image_width,
            height: self.dims.image_height,
            shapes,
        })
    }
}

/// Emits one shape holding a pen-up full circle at each center. The
/// repeated four-corner and four-cardinal pin patterns all go through
/// here.
fn circle_set(label: String, centers: &[Point], radius: f64) -> Result<Shape, GeometryError> {
    let mut shape = Shape::new(label, false);
    for &center in centers {
        shape.push(arc(center, radius, 0.0, 2.0 * PI, true)?);
    }
    Ok(shape)
}
