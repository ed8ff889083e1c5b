//! Aggregates the “business logic” layer.

pub mod config;
pub mod error;
pub mod record;
pub mod sample;
pub mod stats;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder, Mode};
pub use error::{ConfigError, ExportError, HistError};
pub use record::{IngestReport, Record, ingest, parse_line};
pub use sample::{BinnedCounter, Sample};
pub use stats::{Summary, summarize};
