//! Conversion of one event from CSV inputs to a JSON document.
//!

use crate::reader::HitsReader;
use crate::writer::EventFileWriter;
use crate::Result;
use std::path::PathBuf;
use trackml_core::{ConversionPlan, EventRecord};

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Event number written to the document.
    pub event_number: u64,
    /// Path the document was committed to.
    pub output: PathBuf,
    /// Spacepoints written, or `None` when there was no hits file.
    pub spacepoints: Option<usize>,
}

/// Runs a resolved conversion.
///
/// Processing pipeline:
/// 1. Read the hits file, if one was classified
/// 2. Build the event document
/// 3. Write it to a temporary file beside the output
/// 4. Rename it onto the output path
///
/// Truth and particles files are classified but not read.
///
/// # Errors
/// Returns an error if the hits file cannot be read or holds a malformed
/// row, or if the output cannot be written. No output file is created in
/// either case.
pub fn convert(plan: &ConversionPlan) -> Result<ConversionSummary> {
    let mut event = EventRecord::new(plan.event_number());

    if let Some(hits) = plan.inputs().hits() {
        log::info!("Reading hits from {}", hits.display());
        let spacepoints = HitsReader::open(hits)?.read_all()?;
        event = event.with_spacepoints(spacepoints);
    }

    let mut writer = EventFileWriter::create(plan.output())?;
    writer.write_event(&event)?;
    let output = writer.commit()?;
    log::info!(
        "Wrote event {} to {}",
        plan.event_number(),
        output.display()
    );

    Ok(ConversionSummary {
        event_number: plan.event_number(),
        output,
        spacepoints: event.spacepoint_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::Value;
    use std::fs;

    #[test]
    fn test_convert_hits_file() {
        let dir = tempfile::tempdir().unwrap();
        let hits = dir.path().join("event000000016-hits.csv");
        fs::write(
            &hits,
            "hit_id,x,y,z,volume_id\n1,0,0,0,1.0,2.0,3.0\n2,0,0,0,4.0,5.0,6.0\n",
        )
        .unwrap();

        let plan = ConversionPlan::resolve(&[&hits], None).unwrap();
        let summary = convert(&plan).unwrap();

        assert_eq!(summary.event_number, 16);
        assert_eq!(summary.spacepoints, Some(2));
        assert_eq!(summary.output, dir.path().join("event000000016.json"));

        let doc: Value = serde_json::from_str(&fs::read_to_string(&summary.output).unwrap()).unwrap();
        assert_eq!(doc["event number"].as_u64(), Some(16));
        assert_eq!(doc["Hits"]["Spacepoints"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_convert_without_hits_file() {
        let dir = tempfile::tempdir().unwrap();
        let truth = dir.path().join("event000000005-truth.csv");
        let output = dir.path().join("out.json");

        let plan = ConversionPlan::resolve(&[&truth], Some(output.clone())).unwrap();
        let summary = convert(&plan).unwrap();

        assert_eq!(summary.spacepoints, None);
        let doc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"event number".to_string()));
        assert!(keys.contains(&"run number".to_string()));
    }

    #[test]
    fn test_missing_hits_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let hits = dir.path().join("event000000007-hits.csv");

        let plan = ConversionPlan::resolve(&[&hits], None).unwrap();
        let result = convert(&plan);

        assert!(matches!(result, Err(Error::Open { .. })));
        assert!(!plan.output().exists());
    }
}
