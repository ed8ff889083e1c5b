//! Coarse 10×10 ASCII rendering of the value distribution.
//!
//! This chart is purely a console aid; the persisted bin counter keeps the
//! configured resolution regardless of what is drawn here.

use std::io::{self, Write};

use crate::core::sample::Sample;

/// Number of display columns.
pub const DISPLAY_BINS: usize = 10;
/// Number of display rows (height thresholds 10 down to 1).
pub const DISPLAY_HEIGHT: usize = 10;
/// Margin added on each side of the data extent.
const PADDING_FRACTION: f64 = 0.1;

/// Ephemeral display buckets derived from a sample at render time.
#[derive(Clone, Copy, Debug)]
pub struct DisplayHistogram {
    pub ledge: f64,
    pub redge: f64,
    pub y_low: f64,
    pub y_high: f64,
    heights: [f64; DISPLAY_BINS],
}

impl DisplayHistogram {
    /// Bucket and normalize `values`; `None` when there is nothing to draw.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let first = *values.first()?;
        let (min, max) = values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        let ledge = min - (max - min) * PADDING_FRACTION;
        let redge = max + (max - min) * PADDING_FRACTION;

        let mut heights = [0.0_f64; DISPLAY_BINS];
        if redge > ledge {
            let span = redge - ledge;
            for &v in values {
                let b = (DISPLAY_BINS as f64 * (v - ledge) / span).floor();
                if b >= 0.0 && b < DISPLAY_BINS as f64 {
                    heights[b as usize] += 1.0;
                }
            }
        }
        // redge == ledge: every value identical, all buckets stay zero

        let (mut y_low, mut y_high) = (heights[0], heights[0]);
        for &h in &heights[1..] {
            y_low = y_low.min(h);
            y_high = y_high.max(h);
        }
        if y_low < y_high {
            for h in &mut heights {
                *h = DISPLAY_HEIGHT as f64 * (*h - y_low) / (y_high - y_low);
            }
        }

        Some(Self {
            ledge,
            redge,
            y_low,
            y_high,
            heights,
        })
    }

    /// Normalized column heights, scaled into `0..=10`.
    #[inline]
    #[must_use]
    pub fn heights(&self) -> &[f64; DISPLAY_BINS] {
        &self.heights
    }
}

/// Draw the bar grid, axis and range summary onto `out`.
pub fn render<W: Write>(out: &mut W, hist: &DisplayHistogram) -> io::Result<()> {
    for row in 0..DISPLAY_HEIGHT {
        let threshold = (DISPLAY_HEIGHT - row) as f64;
        write!(out, " |")?;
        for h in hist.heights() {
            write!(out, "{}", if *h >= threshold { "*" } else { " " })?;
        }
        writeln!(out)?;
    }
    writeln!(out, " +---------->")?;
    writeln!(out, "Axis:")?;
    writeln!(out, "[xmin:xmax] = [{}:{}]", hist.ledge, hist.redge)?;
    writeln!(out, "[ymin:ymax] = [{}:{}]", hist.y_low, hist.y_high)?;
    Ok(())
}

/// Convenience wrapper used by the CLI: derive + draw in one call.
///
/// Empty samples draw nothing, matching the skip-on-empty contract.
pub fn render_sample<W: Write>(out: &mut W, sample: &Sample) -> io::Result<()> {
    match DisplayHistogram::from_values(&sample.values) {
        Some(hist) => render(out, &hist),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(values: &[f64]) -> String {
        let hist = DisplayHistogram::from_values(values).unwrap();
        let mut buf = Vec::new();
        render(&mut buf, &hist).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_sample_has_no_histogram() {
        assert!(DisplayHistogram::from_values(&[]).is_none());
    }

    #[test]
    fn padded_range_straddles_the_data() {
        let values: Vec<f64> = (1..=10).map(f64::from).collect();
        let hist = DisplayHistogram::from_values(&values).unwrap();
        assert!(hist.ledge < 1.0);
        assert!(hist.redge > 10.0);
        // every value maps into exactly one display bucket
        let span = hist.redge - hist.ledge;
        let in_range = values
            .iter()
            .filter(|v| {
                let b = (10.0 * (**v - hist.ledge) / span).floor();
                (0.0..10.0).contains(&b)
            })
            .count();
        assert_eq!(in_range, values.len());
    }

    #[test]
    fn identical_values_render_flat_without_panicking() {
        let hist = DisplayHistogram::from_values(&[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(hist.ledge, hist.redge);
        assert!(hist.heights().iter().all(|h| *h == 0.0));
        assert_eq!(hist.y_low, 0.0);
        assert_eq!(hist.y_high, 0.0);
        // still renders the full chrome
        let text = rendered(&[5.0, 5.0, 5.0]);
        assert_eq!(text.lines().count(), DISPLAY_HEIGHT + 4);
    }

    #[test]
    fn single_value_renders_without_panicking() {
        let text = rendered(&[3.0]);
        assert!(text.contains("+---------->"));
    }

    #[test]
    fn grid_is_ten_rows_of_ten_columns() {
        let values: Vec<f64> = (0..100).map(|i| f64::from(i % 7)).collect();
        let text = rendered(&values);
        let rows: Vec<&str> = text.lines().take(DISPLAY_HEIGHT).collect();
        assert_eq!(rows.len(), DISPLAY_HEIGHT);
        for row in rows {
            assert!(row.starts_with(" |"));
            assert_eq!(row.chars().count(), 2 + DISPLAY_BINS);
        }
    }

    #[test]
    fn tallest_bucket_reaches_the_top_row() {
        // 0.0 x9 and 100.0 x1: first bucket dominates
        let mut values = vec![0.0; 9];
        values.push(100.0);
        let text = rendered(&values);
        let top = text.lines().next().unwrap();
        assert_eq!(top.as_bytes()[2], b'*');
    }

    #[test]
    fn normalized_heights_stay_in_scale() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i) * 0.3).collect();
        let hist = DisplayHistogram::from_values(&values).unwrap();
        assert!(hist.heights().iter().all(|h| (0.0..=10.0).contains(h)));
    }

    #[test]
    fn axis_summary_reports_both_ranges() {
        let text = rendered(&[1.0, 2.0, 3.0]);
        assert!(text.contains("Axis:"));
        assert!(text.contains("[xmin:xmax] = ["));
        assert!(text.contains("[ymin:ymax] = ["));
    }
}
