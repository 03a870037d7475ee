use std::path::{Path, PathBuf};

use carriergen::{formats, init_logging, CarrierJob};
use tracing::info;

/// Usage: `carriergen [out_dir] [formats.json]`
///
/// With no arguments the three built-in 23C presets are generated into the
/// current directory.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    info!(
        "carriergen {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE")
    );

    let mut args = std::env::args().skip(1);
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let formats = match args.next() {
        Some(file) => formats::load_from_file(Path::new(&file))?,
        None => formats::presets(),
    };

    CarrierJob::new(formats, out_dir).run()
}
