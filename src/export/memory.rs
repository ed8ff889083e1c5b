//! In-memory analysis store, used by the test suite in place of file I/O.

use crate::core::{error::ExportError, sample::BinnedCounter};
use crate::export::AnalysisStore;

/// One recorded series, as handed to the store.
#[derive(Clone, Debug, PartialEq)]
pub enum Series {
    Binned {
        name: String,
        low: f64,
        high: f64,
        counts: Vec<f64>,
    },
    Points {
        name: String,
        xs: Vec<f64>,
        ys: Vec<f64>,
    },
    PointsWithErrors {
        name: String,
        xs: Vec<f64>,
        ys: Vec<f64>,
        x_err: Vec<f64>,
        y_err: Vec<f64>,
    },
}

/// Captures every write; `finished` flips once on `finish`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub series: Vec<Series>,
    pub finished: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnalysisStore for MemoryStore {
    fn put_binned(&mut self, name: &str, counter: &BinnedCounter) -> Result<(), ExportError> {
        self.series.push(Series::Binned {
            name: name.to_owned(),
            low: counter.low(),
            high: counter.high(),
            counts: counter.counts().to_vec(),
        });
        Ok(())
    }

    fn put_points(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<(), ExportError> {
        self.series.push(Series::Points {
            name: name.to_owned(),
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        });
        Ok(())
    }

    fn put_points_with_errors(
        &mut self,
        name: &str,
        xs: &[f64],
        ys: &[f64],
        x_err: &[f64],
        y_err: &[f64],
    ) -> Result<(), ExportError> {
        self.series.push(Series::PointsWithErrors {
            name: name.to_owned(),
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            x_err: x_err.to_vec(),
            y_err: y_err.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.finished = true;
        Ok(())
    }
}
