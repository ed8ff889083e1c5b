//! Line-to-record parsing with zero-allocation float parsing.
//!
//! One line of input becomes at most one [`Record`]; a line that fails to
//! parse yields `None` and the ingest loop moves on. The splitting policy
//! only ever locates the *first* remaining space, so anything after the
//! last expected field is ignored rather than validated.

use std::io::{self, BufRead, BufReader, Read};

use crate::core::{config::Mode, sample::Sample};

/// One accepted input line, shaped by the active [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Record {
    Value { y: f64 },
    Point { x: f64, y: f64 },
    PointWithError { x: f64, y: f64, x_err: f64, y_err: f64 },
}

impl Record {
    /// The histogrammed component, present in every variant.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        match *self {
            Record::Value { y }
            | Record::Point { y, .. }
            | Record::PointWithError { y, .. } => y,
        }
    }
}

// --- Helpers ---

#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrites U+2212 (unicode minus) to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8]) -> Option<f64> {
    let val = lexical_core::parse::<f64>(trim(bytes)).ok()?;
    val.is_finite().then_some(val)
}

/// Split at the first space; the tail (if any) excludes the separator.
#[inline]
fn split_first(bytes: &[u8]) -> (&[u8], Option<&[u8]>) {
    match bytes.iter().position(|&b| b == b' ') {
        Some(i) => (&bytes[..i], Some(&bytes[i + 1..])),
        None => (bytes, None),
    }
}

/// Take the next field, leaving the unsplit remainder for the caller.
#[inline]
fn next_field<'a>(rest: &mut Option<&'a [u8]>) -> Option<&'a [u8]> {
    let bytes = (*rest)?;
    let (head, tail) = split_first(bytes);
    *rest = tail;
    Some(head)
}

// --- Per-line parsing ---

/// Parse one line for the active mode. `None` means "skip this line".
#[must_use]
pub fn parse_line(line: &[u8], mode: Mode) -> Option<Record> {
    match mode {
        Mode::Value => Some(Record::Value {
            y: parse_f64(line)?,
        }),
        Mode::Point => {
            let mut rest = Some(line);
            let x = parse_f64(next_field(&mut rest)?)?;
            let y = parse_f64(next_field(&mut rest)?)?;
            Some(Record::Point { x, y })
        }
        Mode::PointWithError => {
            let mut rest = Some(line);
            let x = parse_f64(next_field(&mut rest)?)?;
            let y = parse_f64(next_field(&mut rest)?)?;
            let x_err = parse_f64(next_field(&mut rest)?)?;
            let y_err = parse_f64(next_field(&mut rest)?)?;
            Some(Record::PointWithError { x, y, x_err, y_err })
        }
    }
}

// --- Stream ingest ---

/// Tallies reported after the stream is exhausted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IngestReport {
    pub lines: usize,
    pub accepted: usize,
    pub skipped: usize,
}

const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Drain `src` line by line into `sample` until EOF.
///
/// Malformed lines are counted but otherwise have no effect on the sample.
pub fn ingest<R: Read>(src: R, mode: Mode, sample: &mut Sample) -> io::Result<IngestReport> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut report = IngestReport::default();

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        report.lines += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }
        normalize_unicode_minus(&mut buf);

        match parse_line(&buf, mode) {
            Some(rec) => {
                sample.accept(&rec);
                report.accepted += 1;
            }
            None => report.skipped += 1,
        }
    }
    Ok(report)
}
