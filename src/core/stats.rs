//! One-pass descriptive statistics over the accepted values.

/// Count, mean and population standard deviation of a sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Summarise `values` in a single linear pass; `None` when empty.
///
/// Standard deviation is the population form (no Bessel correction),
/// computed from the second moment. Rounding can push the residue a hair
/// below zero for near-constant samples, so it is clamped before the root.
#[must_use]
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let (mut sum, mut sum_sq) = (0.0_f64, 0.0_f64);
    for v in values {
        sum += v;
        sum_sq += v * v;
    }
    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(0.0);
    Some(Summary {
        count: values.len(),
        mean,
        std_dev: variance.sqrt(),
    })
}
