pub mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::HistError;

pub fn run() -> Result<(), HistError> {
    let cli = parse::Cli::parse();
    let debug = cli.debug;
    let cfg = cli.into_config()?;
    handlers::run(&cfg, debug)
}
