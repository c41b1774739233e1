//! trackml-io: File I/O for TrackML event conversion.
//!
//! This crate reads spacepoints from hits CSV files and writes event
//! documents as JSON, committing the output file only once it is complete.
//!

pub mod convert;
mod error;
mod reader;
mod writer;

pub use convert::{convert, ConversionSummary};
pub use error::{Error, Result};
pub use reader::{HitsReader, JsonSpacepoint};
pub use writer::EventFileWriter;
