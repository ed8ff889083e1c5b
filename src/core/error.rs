//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidRange { low: f64, high: f64 },
    InvalidBinCount(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::InvalidRange { low, high } => {
                write!(f, "xmin {low} must be < xmax {high}")
            }
            ConfigError::InvalidBinCount(n) => write!(f, "nbins must be >= 1, got {n}"),
        }
    }
}
impl Error for ConfigError {}

/// Faults raised while writing the analysis file.
#[derive(Debug)]
pub enum ExportError {
    Create { path: String, source: io::Error },
    Write { series: String, source: io::Error },
    NameTooLong(usize),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Create { path, source } => {
                write!(f, "cannot create analysis file `{path}`: {source}")
            }
            ExportError::Write { series, source } => {
                write!(f, "failed writing series `{series}`: {source}")
            }
            ExportError::NameTooLong(n) => write!(f, "series name of {n} bytes exceeds u16"),
        }
    }
}
impl Error for ExportError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum HistError {
    Io(io::Error),
    Config(ConfigError),
    Export(ExportError),
}

impl fmt::Display for HistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistError::Io(e) => write!(f, "{e}"),
            HistError::Config(e) => write!(f, "{e}"),
            HistError::Export(e) => write!(f, "{e}"),
        }
    }
}
impl Error for HistError {}

// automatic conversions
impl From<io::Error> for HistError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for HistError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<ExportError> for HistError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}
