//! # carriergen
//!
//! Generates laser cutter SVG files for Beseler 23C enlarger negative
//! carriers. A carrier is three stacked sheets — top paddle, bottom
//! paddle, and a washer-shaped ring — and each film format yields four
//! documents: `<name>_top.svg`, `<name>_bottom.svg`, `<name>_ring.svg`,
//! and a combined `<name>_all.svg` for checking alignment.
//!
//! ## Architecture
//!
//! The workspace is split into:
//!
//! 1. **carriergen-core** - geometry: path primitives, shape composition,
//!    layer assembly, format presets
//! 2. **carriergen-svg** - SVG serialization and atomic file output
//! 3. **carriergen** - this binary: logging setup and the batch job

pub mod job;

pub use carriergen_core::{
    arc, formats, rect, CarrierDimensions, CarrierError, CarrierGenerator, CarrierResult,
    FormatParameters, GeometryError, Layer, LayerKind, ParameterError, PathFragment, Point, Shape,
};
pub use carriergen_svg as svg;
pub use job::CarrierJob;

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and `RUST_LOG`
/// environment variable support, defaulting to INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let fmt_layer = fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
