//! # Carriergen SVG
//!
//! Drawing sink for carrier layers: serializes an assembled layer as a
//! self-contained SVG line drawing and writes it atomically to disk.

use thiserror::Error;

mod document;

pub use document::{render, write};

/// Errors from writing SVG documents.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The document could not be written to its destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
