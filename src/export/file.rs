//! File-backed analysis store.
//!
//! Layout: 4-byte magic, u16 format version, then a sequence of framed
//! series records. All integers and floats are little-endian fixed-width.
//!
//! ```text
//! record   := tag:u8  name_len:u16  name:bytes  payload
//! binned   := low:f64  high:f64  nbins:u32  counts:f64 × nbins
//! points   := n:u32  (x:f64 y:f64) × n
//! pointerr := n:u32  (x:f64 y:f64 xerr:f64 yerr:f64) × n
//! ```

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use crate::core::{error::ExportError, sample::BinnedCounter};
use crate::export::AnalysisStore;

/// File signature, bumped together with `FORMAT_VERSION` on layout changes.
pub const MAGIC: [u8; 4] = *b"HPA1";
/// Current format version.
pub const FORMAT_VERSION: u16 = 1;

const TAG_BINNED: u8 = 1;
const TAG_POINTS: u8 = 2;
const TAG_POINTS_WITH_ERRORS: u8 = 3;

/// Buffered writer that truncates the destination on creation.
#[derive(Debug)]
pub struct FileStore {
    out: BufWriter<File>,
}

impl FileStore {
    /// Create (or replace) the analysis file and write the header.
    pub fn create(path: &str) -> Result<Self, ExportError> {
        let wrap = |source: io::Error| ExportError::Create {
            path: path.to_owned(),
            source,
        };
        let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
        out.write_all(&MAGIC).map_err(wrap)?;
        out.write_all(&FORMAT_VERSION.to_le_bytes()).map_err(wrap)?;
        Ok(Self { out })
    }

    fn frame(&mut self, tag: u8, name: &str) -> Result<(), io::Error> {
        debug_assert!(u16::try_from(name.len()).is_ok());
        self.out.write_all(&[tag])?;
        self.out.write_all(&(name.len() as u16).to_le_bytes())?;
        self.out.write_all(name.as_bytes())
    }

    fn write_f64s(&mut self, vals: &[f64]) -> Result<(), io::Error> {
        for v in vals {
            self.out.write_all(&v.to_le_bytes())?;
        }
        Ok(())
    }
}

fn wrap(name: &str) -> impl Fn(io::Error) -> ExportError + '_ {
    move |source| ExportError::Write {
        series: name.to_owned(),
        source,
    }
}

impl AnalysisStore for FileStore {
    fn put_binned(&mut self, name: &str, counter: &BinnedCounter) -> Result<(), ExportError> {
        check_name(name)?;
        let e = wrap(name);
        self.frame(TAG_BINNED, name).map_err(&e)?;
        self.out.write_all(&counter.low().to_le_bytes()).map_err(&e)?;
        self.out.write_all(&counter.high().to_le_bytes()).map_err(&e)?;
        self.out
            .write_all(&(counter.counts().len() as u32).to_le_bytes())
            .map_err(&e)?;
        self.write_f64s(counter.counts()).map_err(&e)
    }

    fn put_points(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<(), ExportError> {
        check_name(name)?;
        let e = wrap(name);
        self.frame(TAG_POINTS, name).map_err(&e)?;
        self.out
            .write_all(&(xs.len() as u32).to_le_bytes())
            .map_err(&e)?;
        for (x, y) in xs.iter().zip(ys) {
            self.write_f64s(&[*x, *y]).map_err(&e)?;
        }
        Ok(())
    }

    fn put_points_with_errors(
        &mut self,
        name: &str,
        xs: &[f64],
        ys: &[f64],
        x_err: &[f64],
        y_err: &[f64],
    ) -> Result<(), ExportError> {
        check_name(name)?;
        let e = wrap(name);
        self.frame(TAG_POINTS_WITH_ERRORS, name).map_err(&e)?;
        self.out
            .write_all(&(xs.len() as u32).to_le_bytes())
            .map_err(&e)?;
        for ((x, y), (xe, ye)) in xs.iter().zip(ys).zip(x_err.iter().zip(y_err)) {
            self.write_f64s(&[*x, *y, *xe, *ye]).map_err(&e)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ExportError> {
        self.out.flush().map_err(|source| ExportError::Write {
            series: "<flush>".to_owned(),
            source,
        })
    }
}

fn check_name(name: &str) -> Result<(), ExportError> {
    if u16::try_from(name.len()).is_ok() {
        Ok(())
    } else {
        Err(ExportError::NameTooLong(name.len()))
    }
}
