//! Batch carrier generation.
//!
//! Drives one generation pass: for every configured film format, assemble
//! and write all four layer documents into the output directory.

use std::path::PathBuf;

use anyhow::bail;
use carriergen_core::{CarrierDimensions, CarrierGenerator, FormatParameters, LayerKind};
use tracing::{error, info};

/// One batch run over a set of film formats.
pub struct CarrierJob {
    dims: CarrierDimensions,
    formats: Vec<FormatParameters>,
    out_dir: PathBuf,
}

impl CarrierJob {
    /// Job over the given formats with the stock 23C envelope.
    pub fn new(formats: Vec<FormatParameters>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            dims: CarrierDimensions::default(),
            formats,
            out_dir: out_dir.into(),
        }
    }

    /// Replaces the paddle/ring envelope, for non-stock enlargers.
    pub fn with_dimensions(mut self, dims: CarrierDimensions) -> Self {
        self.dims = dims;
        self
    }

    /// Generates every document.
    ///
    /// Batch policy: a document that fails is logged with its format and
    /// layer and skipped; the remaining documents are still generated. The
    /// job returns an error at the end if anything failed, so the process
    /// exits non-zero.
    pub fn run(&self) -> anyhow::Result<()> {
        let mut written = 0usize;
        let mut failed = 0usize;

        for params in &self.formats {
            info!(format = %params.name, "generating carrier");

            let generator = match CarrierGenerator::new(self.dims, params.clone()) {
                Ok(generator) => generator,
                Err(e) => {
                    error!(format = %params.name, "invalid parameters: {e}");
                    failed += LayerKind::all().len();
                    continue;
                }
            };

            for kind in LayerKind::all() {
                let path = self.out_dir.join(format!("{}_{}.svg", params.name, kind));
                let result = generator
                    .assemble(kind)
                    .map_err(anyhow::Error::from)
                    .and_then(|layer| {
                        carriergen_svg::write(&layer, &path).map_err(anyhow::Error::from)
                    });
                match result {
                    Ok(()) => {
                        info!(format = %params.name, layer = %kind, path = %path.display(), "wrote document");
                        written += 1;
                    }
                    Err(e) => {
                        error!(format = %params.name, layer = %kind, "generation failed: {e}");
                        failed += 1;
                    }
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} documents failed", written + failed);
        }
        Ok(())
    }
}
