//! Sample accumulation: ordered per-field sequences + fixed-range bin counter.
//!
//! The accumulator is the single writer; the statistics engine, renderer and
//! exporter all borrow it read-only once the stream is exhausted.

use crate::core::{config::Config, record::Record};

/// Fixed-resolution counter over `[low, high)`.
///
/// Counts are `f64` so the persisted series carries the same arithmetic type
/// as the raw values.
#[derive(Clone, Debug)]
pub struct BinnedCounter {
    low: f64,
    high: f64,
    counts: Vec<f64>,
}

impl BinnedCounter {
    #[must_use]
    pub fn new(low: f64, high: f64, bins: usize) -> Self {
        Self {
            low,
            high,
            counts: vec![0.0; bins],
        }
    }

    /// Increment the bin holding `y`; out-of-range values touch no bin.
    pub fn fill(&mut self, y: f64) {
        let span = self.high - self.low;
        let b = (self.counts.len() as f64 * (y - self.low) / span).floor();
        if b >= 0.0 && b < self.counts.len() as f64 {
            self.counts[b as usize] += 1.0;
        }
    }

    #[inline]
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }
    #[inline]
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.counts.iter().sum()
    }
}

/// Every accepted record, in arrival order, plus the bin counter.
///
/// `coords` stays parallel to `values` in the point modes; the error
/// sequences stay parallel in the error-bar mode. All four are empty or
/// equal-length by construction.
#[derive(Clone, Debug)]
pub struct Sample {
    pub values: Vec<f64>,
    pub coords: Vec<f64>,
    pub x_err: Vec<f64>,
    pub y_err: Vec<f64>,
    pub counter: BinnedCounter,
}

impl Sample {
    #[must_use]
    pub fn new(cfg: &Config) -> Self {
        Self {
            values: Vec::new(),
            coords: Vec::new(),
            x_err: Vec::new(),
            y_err: Vec::new(),
            counter: BinnedCounter::new(cfg.bin_low, cfg.bin_high, cfg.bin_count),
        }
    }

    /// Append one accepted record and update the bin counter.
    pub fn accept(&mut self, rec: &Record) {
        match *rec {
            Record::Value { y } => {
                self.push_y(y);
            }
            Record::Point { x, y } => {
                self.push_y(y);
                self.coords.push(x);
            }
            Record::PointWithError { x, y, x_err, y_err } => {
                self.push_y(y);
                self.coords.push(x);
                self.x_err.push(x_err);
                self.y_err.push(y_err);
            }
        }
    }

    #[inline]
    fn push_y(&mut self, y: f64) {
        self.values.push(y);
        self.counter.fill(y);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn cfg(low: f64, high: f64, bins: usize) -> Config {
        Config::builder()
            .bin_range(low, high)
            .bin_count(bins)
            .build()
            .unwrap()
    }

    #[test]
    fn single_value_lands_in_values() {
        let mut s = Sample::new(&cfg(0.0, 10.0, 10));
        s.accept(&Record::Value { y: 4.2 });
        assert_eq!(s.values, vec![4.2]);
        assert!(s.coords.is_empty());
    }

    #[test]
    fn bin_mapping_uses_half_open_range() {
        let mut c = BinnedCounter::new(0.0, 10.0, 10);
        c.fill(0.0); // first bin
        c.fill(9.999); // last bin
        c.fill(10.0); // == high, out of range
        c.fill(-0.001); // below low, out of range
        assert_eq!(c.counts()[0], 1.0);
        assert_eq!(c.counts()[9], 1.0);
        assert_eq!(c.total(), 2.0);
    }

    #[test]
    fn out_of_range_values_are_still_stored() {
        let mut s = Sample::new(&cfg(0.0, 1.0, 4));
        s.accept(&Record::Value { y: 5.0 });
        assert_eq!(s.len(), 1);
        assert_eq!(s.counter.total(), 0.0);
    }

    #[test]
    fn bin_total_plus_out_of_range_equals_len() {
        let mut s = Sample::new(&cfg(0.0, 10.0, 5));
        let ys = [-1.0, 0.0, 2.5, 9.9, 10.0, 42.0];
        for y in ys {
            s.accept(&Record::Value { y });
        }
        let out_of_range = ys.iter().filter(|y| **y < 0.0 || **y >= 10.0).count();
        assert_eq!(s.counter.total() as usize + out_of_range, s.len());
    }

    #[test]
    fn point_sequences_stay_parallel() {
        let mut s = Sample::new(&cfg(0.0, 10.0, 10));
        s.accept(&Record::Point { x: 0.0, y: 1.0 });
        s.accept(&Record::Point { x: 1.0, y: 2.0 });
        assert_eq!(s.coords, vec![0.0, 1.0]);
        assert_eq!(s.values, vec![1.0, 2.0]);
    }

    #[test]
    fn error_sequences_stay_parallel() {
        let mut s = Sample::new(&cfg(0.0, 10.0, 10));
        s.accept(&Record::PointWithError {
            x: 0.0,
            y: 1.0,
            x_err: 0.1,
            y_err: 0.2,
        });
        assert_eq!(s.coords.len(), s.values.len());
        assert_eq!(s.x_err, vec![0.1]);
        assert_eq!(s.y_err, vec![0.2]);
    }
}
