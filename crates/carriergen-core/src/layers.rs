//! Carrier layers.
//!
//! A [`Layer`] is one physical sheet to be cut: an ordered shape list plus
//! the fixed image bounding box. Four layers exist per format; `All` is a
//! debug overlay of the other three.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::Shape;

/// Which of the four per-format documents a layer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Top,
    Bottom,
    Ring,
    /// Every shape of all three sheets overlaid, for eyeballing alignment.
    All,
}

impl LayerKind {
    /// All four kinds, in generation order.
    pub fn all() -> [LayerKind; 4] {
        [
            LayerKind::Top,
            LayerKind::Bottom,
            LayerKind::Ring,
            LayerKind::All,
        ]
    }

    /// Filename suffix for the layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Top => "top",
            LayerKind::Bottom => "bottom",
            LayerKind::Ring => "ring",
            LayerKind::All => "all",
        }
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One assembled sheet: ordered shapes plus the drawing bounding box in
/// inches.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub kind: LayerKind,
    pub width: f64,
    pub height: f64,
    pub shapes: Vec<Shape>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_kinds_map_to_filename_suffixes() {
        let suffixes: Vec<&str> = LayerKind::all().iter().map(|k| k.as_str()).collect();
        assert_eq!(suffixes, ["top", "bottom", "ring", "all"]);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(LayerKind::Bottom.to_string(), "bottom");
    }
}
