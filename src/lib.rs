//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod export;
pub mod render;

pub use self::core::{
    config::{Config, ConfigBuilder, Mode},
    error::{ConfigError, ExportError, HistError},
    record::{IngestReport, Record},
    sample::{BinnedCounter, Sample},
    stats::{Summary, summarize},
};

pub use export::{AnalysisStore, BINNED_SERIES, FileStore, MemoryStore, POINT_SERIES};
pub use render::{DISPLAY_BINS, DISPLAY_HEIGHT, DisplayHistogram};

use std::io::{Read, Write};

/// Convenience function: run the whole pipeline over arbitrary endpoints.
///
/// Console output (chart + statistics) lands on `console`, the persisted
/// series in `store`. This is the same path the binary takes with stdin,
/// stdout and a [`FileStore`].
pub fn process<R: Read, W: Write, S: AnalysisStore>(
    input: R,
    console: &mut W,
    store: &mut S,
    cfg: &Config,
) -> Result<IngestReport, HistError> {
    let (sample, report) = cli::handlers::collect(input, console, cfg)?;
    export::export_sample(store, &sample, cfg.mode)?;
    Ok(report)
}
