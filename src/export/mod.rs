//! Persistence of the accumulated series to an analysis store.
//!
//! The store is an injected collaborator: the CLI hands the pipeline a
//! file-backed [`FileStore`], tests substitute the in-memory
//! [`MemoryStore`]. Series names are fixed identifiers, not user input.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::{MemoryStore, Series};

use crate::core::{config::Mode, error::ExportError, sample::BinnedCounter, sample::Sample};

/// Name under which the bin counter is always persisted.
pub const BINNED_SERIES: &str = "hist";
/// Name of the point series written in the graph modes.
pub const POINT_SERIES: &str = "graph";

/// Sink for named series. Implementations own their medium and decide
/// what "finish" means (flush, close, nothing).
pub trait AnalysisStore {
    fn put_binned(&mut self, name: &str, counter: &BinnedCounter) -> Result<(), ExportError>;

    fn put_points(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<(), ExportError>;

    fn put_points_with_errors(
        &mut self,
        name: &str,
        xs: &[f64],
        ys: &[f64],
        x_err: &[f64],
        y_err: &[f64],
    ) -> Result<(), ExportError>;

    fn finish(&mut self) -> Result<(), ExportError>;
}

/// Write everything the run accumulated and finalize the store.
///
/// The bin counter goes out unconditionally (an all-zero counter for an
/// empty stream is still a valid result); the point series only in the
/// matching mode.
pub fn export_sample<S: AnalysisStore>(
    store: &mut S,
    sample: &Sample,
    mode: Mode,
) -> Result<(), ExportError> {
    store.put_binned(BINNED_SERIES, &sample.counter)?;
    match mode {
        Mode::Value => {}
        Mode::Point => store.put_points(POINT_SERIES, &sample.coords, &sample.values)?,
        Mode::PointWithError => store.put_points_with_errors(
            POINT_SERIES,
            &sample.coords,
            &sample.values,
            &sample.x_err,
            &sample.y_err,
        )?,
    }
    store.finish()
}
