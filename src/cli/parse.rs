use clap::{ArgGroup, Parser};

use crate::core::{
    config::{Config, Mode},
    error::ConfigError,
};

/// Top-level CLI structure.
///
/// Flat flags, one run per invocation: records arrive on stdin, the chart
/// and statistics go to stdout, the structured result to `--output`.
#[derive(Parser, Debug)]
#[command(
    name = "histpipe",
    about = "Pipe numeric records into a histogram, summary statistics and an analysis file"
)]
#[command(group(ArgGroup::new("mode").args(["graph", "graph_err"])))]
pub struct Cli {
    /// Analysis file destination (replaced if it already exists)
    #[arg(short, long, value_name = "FILE", default_value = "out.hist")]
    pub output: String,

    /// Left edge of the binned range
    #[arg(long, value_name = "MIN", default_value_t = 0.0)]
    pub xmin: f64,

    /// Right edge of the binned range
    #[arg(long, value_name = "MAX", default_value_t = 10e-9)]
    pub xmax: f64,

    /// Number of bins of the persisted histogram
    #[arg(long, value_name = "N", default_value_t = 200)]
    pub nbins: usize,

    /// Read `x y` pairs and export a 2D graph as well
    #[arg(long)]
    pub graph: bool,

    /// Read `x y xerr yerr` and export a graph with error bars
    #[arg(long = "graph-err")]
    pub graph_err: bool,

    /// Suppress the console text histogram
    #[arg(long)]
    pub quiet: bool,

    /// Report ingestion counts on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.graph_err {
            Mode::PointWithError
        } else if self.graph {
            Mode::Point
        } else {
            Mode::Value
        }
    }

    /// Resolve the parsed flags into the immutable pipeline configuration.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mode = self.mode();
        Config::builder()
            .mode(mode)
            .bin_range(self.xmin, self.xmax)
            .bin_count(self.nbins)
            .output(self.output)
            .text_render(!self.quiet)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_value_mode_histogram() {
        let cli = Cli::parse_from(["histpipe"]);
        let cfg = cli.into_config().unwrap();
        assert_eq!(cfg.mode, Mode::Value);
        assert_eq!(cfg.bin_low, 0.0);
        assert_eq!(cfg.bin_high, 10e-9);
        assert_eq!(cfg.bin_count, 200);
        assert_eq!(cfg.output, "out.hist");
        assert!(cfg.text_render);
    }

    #[test]
    fn graph_flags_select_the_point_modes() {
        let cli = Cli::parse_from(["histpipe", "--graph"]);
        assert_eq!(cli.mode(), Mode::Point);
        let cli = Cli::parse_from(["histpipe", "--graph-err"]);
        assert_eq!(cli.mode(), Mode::PointWithError);
    }

    #[test]
    fn graph_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["histpipe", "--graph", "--graph-err"]).is_err());
    }

    #[test]
    fn quiet_disables_text_rendering() {
        let cli = Cli::parse_from(["histpipe", "--quiet"]);
        let cfg = cli.into_config().unwrap();
        assert!(!cfg.text_render);
    }

    #[test]
    fn inverted_range_surfaces_at_resolution_time() {
        let cli = Cli::parse_from(["histpipe", "--xmin", "5", "--xmax", "1"]);
        assert!(cli.into_config().is_err());
    }
}
