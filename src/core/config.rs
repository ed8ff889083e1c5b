//! Run-time configuration object + fluent builder.

use crate::core::error::ConfigError;

/// Which record layout the ingest loop expects, one per run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// One y-value per line.
    #[default]
    Value,
    /// `x y` pairs per line.
    Point,
    /// `x y xerr yerr` per line.
    PointWithError,
}

/// Immutable parameters handed to the ingest/export pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub bin_low: f64,
    pub bin_high: f64,
    pub bin_count: usize,
    pub output: String,
    pub text_render: bool,
}

impl Config {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    mode: Mode,
    bin_low: Option<f64>,
    bin_high: Option<f64>,
    bin_count: Option<usize>,
    output: Option<String>,
    text_render: bool,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            text_render: true,
            ..Self::default()
        }
    }

    #[inline]
    pub fn mode(mut self, m: Mode) -> Self {
        self.mode = m;
        self
    }
    #[inline]
    pub fn bin_range(mut self, low: f64, high: f64) -> Self {
        self.bin_low = Some(low);
        self.bin_high = Some(high);
        self
    }
    #[inline]
    pub fn bin_count(mut self, n: usize) -> Self {
        self.bin_count = Some(n);
        self
    }
    #[inline]
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }
    #[inline]
    pub fn text_render(mut self, on: bool) -> Self {
        self.text_render = on;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let bin_low = self.bin_low.ok_or(ConfigError::MissingField("xmin"))?;
        let bin_high = self.bin_high.ok_or(ConfigError::MissingField("xmax"))?;
        let bin_count = self.bin_count.ok_or(ConfigError::MissingField("nbins"))?;
        if bin_low >= bin_high {
            return Err(ConfigError::InvalidRange {
                low: bin_low,
                high: bin_high,
            });
        }
        if bin_count == 0 {
            return Err(ConfigError::InvalidBinCount(bin_count));
        }
        Ok(Config {
            mode: self.mode,
            bin_low,
            bin_high,
            bin_count,
            output: self.output.unwrap_or_else(|| "out.hist".into()),
            text_render: self.text_render,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fills_defaults() {
        let cfg = Config::builder()
            .bin_range(0.0, 1.0)
            .bin_count(100)
            .build()
            .unwrap();
        assert_eq!(cfg.mode, Mode::Value);
        assert_eq!(cfg.output, "out.hist");
        assert!(cfg.text_render);
    }

    #[test]
    fn inverted_range_rejected() {
        let err = Config::builder()
            .bin_range(5.0, 5.0)
            .bin_count(10)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));
    }

    #[test]
    fn zero_bins_rejected() {
        let err = Config::builder()
            .bin_range(0.0, 1.0)
            .bin_count(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBinCount(0)));
    }

    #[test]
    fn missing_range_reported_by_field() {
        let err = Config::builder().bin_count(10).build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("xmin")));
    }
}
