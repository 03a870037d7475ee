//! # Carriergen Core
//!
//! Geometry engine for Beseler 23C negative carrier outlines.
//!
//! A carrier is cut from three stacked sheets (top paddle, bottom paddle,
//! ring) whose outlines this crate computes from a handful of physical
//! dimensions and per-film-format parameters:
//!
//! - **path** - polyline primitives: arcs, rectangles, path fragments
//! - **carrier** - shape composition: paddle outline with tangent fillets,
//!   film cutout, aligner pins, ring, and layer assembly
//! - **layers** - the four per-format documents (top, bottom, ring, all)
//! - **formats** - built-in film format presets and JSON format files
//! - **error** - structured error types
//!
//! Everything is pure computation; serialization and file output live in
//! the `carriergen-svg` crate.

pub mod carrier;
pub mod error;
pub mod formats;
pub mod layers;
pub mod path;

pub use carrier::{CarrierDimensions, CarrierGenerator, FormatParameters};
pub use error::{CarrierError, CarrierResult, GeometryError, ParameterError};
pub use layers::{Layer, LayerKind};
pub use path::{arc, rect, PathFragment, Point, Shape};
