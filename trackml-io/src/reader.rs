//! Hits CSV reader.
//!

use crate::{Error, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use serde_json::value::RawValue;
use serde_json::Number;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use trackml_core::{is_header_row, Spacepoint, Z_COLUMN};

/// A spacepoint whose coordinates keep the exact text of the input tokens.
pub type JsonSpacepoint = Spacepoint<Box<RawValue>>;

/// Reader yielding the spacepoints of a TrackML hits file in row order.
///
/// Blank rows and the header row (any row mentioning `hit_id`) are
/// skipped. Coordinates are taken from columns 4 to 6 and must be valid
/// JSON numbers; they are otherwise passed through untouched.
pub struct HitsReader<R = File> {
    reader: Reader<R>,
    record: StringRecord,
    path: PathBuf,
}

impl HitsReader<File> {
    /// Opens a hits file for reading.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(file, path))
    }
}

impl<R: Read> HitsReader<R> {
    /// Wraps an already opened source; `path` is only used in error messages.
    pub fn from_reader<P: AsRef<Path>>(source: R, path: P) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            record: StringRecord::new(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads the next spacepoint, or `None` at end of file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be decoded, a row has fewer
    /// than seven columns, or a coordinate is not a number.
    pub fn read_spacepoint(&mut self) -> Result<Option<JsonSpacepoint>> {
        loop {
            if !self.reader.read_record(&mut self.record)? {
                return Ok(None);
            }
            if is_blank(&self.record) || is_header_row(&self.record) {
                continue;
            }
            return self.parse_record().map(Some);
        }
    }

    /// Reads every remaining spacepoint.
    ///
    /// # Errors
    /// Fails on the first row that [`Self::read_spacepoint`] rejects.
    pub fn read_all(mut self) -> Result<Vec<JsonSpacepoint>> {
        let mut spacepoints = Vec::new();
        while let Some(point) = self.read_spacepoint()? {
            spacepoints.push(point);
        }
        log::debug!(
            "Read {} spacepoints from {}",
            spacepoints.len(),
            self.path.display()
        );
        Ok(spacepoints)
    }

    fn parse_record(&self) -> Result<JsonSpacepoint> {
        let tokens = Spacepoint::from_row(&self.record).ok_or_else(|| {
            self.malformed(format!(
                "expected at least {} columns, found {}",
                Z_COLUMN + 1,
                self.record.len()
            ))
        })?;

        tokens.try_map(|token| {
            Number::from_str(token)
                .and_then(|_| RawValue::from_string(token.to_string()))
                .map_err(|_| self.malformed(format!("'{token}' is not a number")))
        })
    }

    fn malformed(&self, reason: String) -> Error {
        let line = self.record.position().map_or(0, csv::Position::line);
        Error::MalformedRow {
            path: self.path.clone(),
            line,
            reason,
        }
    }
}

impl<R: Read> Iterator for HitsReader<R> {
    type Item = Result<JsonSpacepoint>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_spacepoint().transpose()
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
