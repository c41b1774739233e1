//! Event identification and the event document.

use crate::hit::Spacepoint;
use crate::role::base_name;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Run number written into every event; TrackML files carry none.
pub const RUN_NUMBER: u64 = 0;

/// Extension of the derived output file.
const OUTPUT_EXTENSION: &str = "json";

/// Derives the event number from an input file name.
///
/// Only the decimal digits of the base name (the file name before its
/// first `.`) are kept, so `event000000016-hits.csv` yields `16`.
///
/// # Errors
/// Returns [`Error::MalformedEventNumber`] if the base name has no digits
/// or the digits do not fit in a `u64`.
pub fn event_number(path: &Path) -> Result<u64> {
    let base = base_name(path);
    let digits: String = base.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|source| Error::MalformedEventNumber { name: base, source })
}

/// Derives the default output path from an input file name.
///
/// The base name is cut at its first `-` and given a `.json` extension;
/// the result sits next to the input.
#[must_use]
pub fn default_output_path(path: &Path) -> PathBuf {
    let base = base_name(path);
    let stem = base.split('-').next().unwrap_or_default();
    let file_name = format!("{stem}.{OUTPUT_EXTENSION}");
    match path.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Hits of one event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HitsSection<C> {
    #[cfg_attr(feature = "serde", serde(rename = "Spacepoints"))]
    pub spacepoints: Vec<Spacepoint<C>>,
}

/// One converted event, in output key order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EventRecord<C> {
    #[cfg_attr(feature = "serde", serde(rename = "event number"))]
    pub event_number: u64,
    #[cfg_attr(feature = "serde", serde(rename = "run number"))]
    pub run_number: u64,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Hits", skip_serializing_if = "Option::is_none")
    )]
    pub hits: Option<HitsSection<C>>,
}

impl<C> EventRecord<C> {
    /// Creates an event with no hits section.
    #[must_use]
    pub fn new(event_number: u64) -> Self {
        Self {
            event_number,
            run_number: RUN_NUMBER,
            hits: None,
        }
    }

    /// Attaches the hits section.
    #[must_use]
    pub fn with_spacepoints(mut self, spacepoints: Vec<Spacepoint<C>>) -> Self {
        self.hits = Some(HitsSection { spacepoints });
        self
    }

    /// Number of spacepoints, or `None` when the event has no hits section.
    #[must_use]
    pub fn spacepoint_count(&self) -> Option<usize> {
        self.hits.as_ref().map(|hits| hits.spacepoints.len())
    }
}
