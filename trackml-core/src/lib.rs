//! trackml-core: Core types for converting TrackML event files.
//!
//! This crate provides the pure, I/O-free parts of the converter:
//! inferring the role of each input file from its name, deriving the
//! event number and default output name, and the event document types.
//!

pub mod error;
pub mod event;
pub mod hit;
pub mod plan;
pub mod role;

pub use error::{Error, Result};
pub use event::{default_output_path, event_number, EventRecord, HitsSection, RUN_NUMBER};
pub use hit::{is_header_row, Spacepoint, HEADER_TOKEN, X_COLUMN, Y_COLUMN, Z_COLUMN};
pub use plan::ConversionPlan;
pub use role::{base_name, classify, IgnoredInput, InputFileSet, InputRole};
