//! Resolved parameters of a single conversion.

use crate::event::{default_output_path, event_number};
use crate::role::InputFileSet;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Everything a conversion needs, fixed before any file is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPlan {
    inputs: InputFileSet,
    event_number: u64,
    output: PathBuf,
}

impl ConversionPlan {
    /// Classifies `inputs` and resolves the event number and output path.
    ///
    /// The event number and default output name both come from the first
    /// input, whatever its role. An explicit `output` is used unchanged.
    ///
    /// # Errors
    /// Returns [`Error::NoInputs`] for an empty input list and
    /// [`Error::MalformedEventNumber`] when the first input's name has no
    /// usable digits.
    pub fn resolve<P: AsRef<Path>>(inputs: &[P], output: Option<PathBuf>) -> Result<Self> {
        let files = InputFileSet::classify(inputs)?;
        let first = inputs.first().ok_or(Error::NoInputs)?.as_ref();
        let event_number = event_number(first)?;
        let output = output.unwrap_or_else(|| default_output_path(first));

        Ok(Self {
            inputs: files,
            event_number,
            output,
        })
    }

    /// Returns the classified input files.
    #[must_use]
    pub fn inputs(&self) -> &InputFileSet {
        &self.inputs
    }

    /// Returns the event number.
    #[must_use]
    pub fn event_number(&self) -> u64 {
        self.event_number
    }

    /// Returns the output path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_derives_defaults() {
        let plan = ConversionPlan::resolve(&["event000000016-hits.csv"], None).unwrap();
        assert_eq!(plan.event_number(), 16);
        assert_eq!(plan.output(), Path::new("event000000016.json"));
        assert_eq!(
            plan.inputs().hits(),
            Some(Path::new("event000000016-hits.csv"))
        );
    }

    #[test]
    fn test_resolve_keeps_explicit_output() {
        let plan = ConversionPlan::resolve(
            &["event000000016-truth.csv", "event000000016-hits.csv"],
            Some(PathBuf::from("out/custom.json")),
        )
        .unwrap();
        assert_eq!(plan.output(), Path::new("out/custom.json"));
        assert_eq!(plan.inputs().truth(), Some(Path::new("event000000016-truth.csv")));
    }

    #[test]
    fn test_resolve_uses_first_input_for_event_number() {
        let plan =
            ConversionPlan::resolve(&["event000000002-hits.csv", "event000000003-truth.csv"], None)
                .unwrap();
        assert_eq!(plan.event_number(), 2);
    }

    #[test]
    fn test_resolve_empty_inputs() {
        let inputs: [&str; 0] = [];
        let result = ConversionPlan::resolve(&inputs, None);
        assert!(matches!(result, Err(Error::NoInputs)));
    }

    #[test]
    fn test_resolve_without_digits() {
        let result = ConversionPlan::resolve(&["hits.csv"], None);
        assert!(matches!(result, Err(Error::MalformedEventNumber { .. })));
    }
}
