use std::io::{self, Read, Write};

use crate::{
    core::{
        config::Config,
        error::HistError,
        record::{IngestReport, ingest},
        sample::Sample,
        stats::summarize,
    },
    export::{FileStore, export_sample},
    render::render_sample,
};

/// Drain `input`, then emit the chart and statistics onto `console`.
///
/// Returns the finished sample so the caller can hand it to whichever
/// store it wants; tests pass a `Cursor` and capture the console in a
/// `Vec<u8>`.
pub fn collect<R: Read, W: Write>(
    input: R,
    console: &mut W,
    cfg: &Config,
) -> Result<(Sample, IngestReport), HistError> {
    let mut sample = Sample::new(cfg);
    let report = ingest(input, cfg.mode, &mut sample)?;

    if cfg.text_render && !sample.is_empty() {
        render_sample(console, &sample)?;
    }
    if let Some(s) = summarize(&sample.values) {
        writeln!(console, "Mean: {}", s.mean)?;
        writeln!(console, "StdDev: {}", s.std_dev)?;
    }
    Ok((sample, report))
}

/// Full pipeline against the real endpoints: stdin, stdout, file store.
pub fn run(cfg: &Config, debug: bool) -> Result<(), HistError> {
    let mut stdout = io::stdout().lock();
    let (sample, report) = collect(io::stdin().lock(), &mut stdout, cfg)?;
    stdout.flush()?;

    let mut store = FileStore::create(&cfg.output)?;
    export_sample(&mut store, &sample, cfg.mode)?;

    if debug {
        eprintln!(
            "ingest: {} lines   {} accepted   {} skipped",
            report.lines, report.accepted, report.skipped
        );
    }
    Ok(())
}
