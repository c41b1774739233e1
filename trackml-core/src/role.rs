//! Input file roles and classification.
//!
//! A TrackML event is spread over several CSV files named after the event,
//! e.g. `event000000016-hits.csv`, `event000000016-truth.csv` and
//! `event000000016-particles.csv`. The role of each file is inferred from
//! its name alone.

use crate::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// The part an input file plays in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputRole {
    /// Reconstructed hit positions.
    Hits,
    /// Truth association between hits and particles.
    Truth,
    /// Generated particle parameters.
    Particles,
    /// Name matches none of the known roles.
    Unknown,
}

impl InputRole {
    /// Roles that can be assigned a file, in matching priority order.
    pub const KNOWN: [Self; 3] = [Self::Hits, Self::Truth, Self::Particles];

    /// Substring that marks a file name as belonging to this role.
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Hits => Some("hits"),
            Self::Truth => Some("truth"),
            Self::Particles => Some("particles"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hits => "hits",
            Self::Truth => "truth",
            Self::Particles => "particles",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Returns the file name of `path` truncated at its first `.`.
///
/// Directory components are ignored, so `data/event16-hits.csv` and
/// `event16-hits.csv` share the base name `event16-hits`.
#[must_use]
pub fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    file_name.split('.').next().unwrap_or_default().to_string()
}

/// Infers the role of a single input file from its base name.
///
/// The first role whose marker occurs in the base name wins, checked in
/// the order hits, truth, particles.
#[must_use]
pub fn classify(path: &Path) -> InputRole {
    let base = base_name(path);
    InputRole::KNOWN
        .into_iter()
        .find(|role| role.marker().is_some_and(|marker| base.contains(marker)))
        .unwrap_or(InputRole::Unknown)
}

/// An input that was not assigned to any role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredInput {
    /// Path as given on the command line.
    pub path: PathBuf,
    /// Role inferred for the path; `Unknown` when nothing matched,
    /// otherwise the role that was already taken by an earlier input.
    pub role: InputRole,
}

/// The classified inputs of one conversion: at most one file per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFileSet {
    hits: Option<PathBuf>,
    truth: Option<PathBuf>,
    particles: Option<PathBuf>,
    ignored: Vec<IgnoredInput>,
}

impl InputFileSet {
    /// Classifies `inputs` in order, keeping the first file for each role.
    ///
    /// Later files for an already-filled role, and files with no
    /// recognisable role, are logged and recorded in [`Self::ignored`].
    ///
    /// # Errors
    /// Returns [`Error::NoInputs`] if `inputs` is empty.
    pub fn classify<I, P>(inputs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut set = Self::default();
        let mut seen_any = false;

        for input in inputs {
            seen_any = true;
            set.insert(input.as_ref());
        }

        if !seen_any {
            return Err(Error::NoInputs);
        }
        Ok(set)
    }

    fn insert(&mut self, path: &Path) {
        let role = classify(path);
        let slot = match role {
            InputRole::Hits => &mut self.hits,
            InputRole::Truth => &mut self.truth,
            InputRole::Particles => &mut self.particles,
            InputRole::Unknown => {
                log::warn!(
                    "Cannot tell whether {} holds hits, truth or particles; ignoring it",
                    path.display()
                );
                self.ignored.push(IgnoredInput {
                    path: path.to_path_buf(),
                    role,
                });
                return;
            }
        };

        if slot.is_some() {
            log::warn!("Multiple {role} files listed! Ignoring {}", path.display());
            self.ignored.push(IgnoredInput {
                path: path.to_path_buf(),
                role,
            });
        } else {
            *slot = Some(path.to_path_buf());
        }
    }

    /// Returns the file assigned to `role`, if any.
    #[must_use]
    pub fn get(&self, role: InputRole) -> Option<&Path> {
        match role {
            InputRole::Hits => self.hits.as_deref(),
            InputRole::Truth => self.truth.as_deref(),
            InputRole::Particles => self.particles.as_deref(),
            InputRole::Unknown => None,
        }
    }

    /// Returns the hits file, if one was classified.
    #[must_use]
    pub fn hits(&self) -> Option<&Path> {
        self.get(InputRole::Hits)
    }

    /// Returns the truth file, if one was classified.
    #[must_use]
    pub fn truth(&self) -> Option<&Path> {
        self.get(InputRole::Truth)
    }

    /// Returns the particles file, if one was classified.
    #[must_use]
    pub fn particles(&self) -> Option<&Path> {
        self.get(InputRole::Particles)
    }

    /// Returns the inputs that were discarded, in argument order.
    #[must_use]
    pub fn ignored(&self) -> &[IgnoredInput] {
        &self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_directories_and_extensions() {
        assert_eq!(
            base_name(Path::new("data/event000000016-hits.csv")),
            "event000000016-hits"
        );
        assert_eq!(base_name(Path::new("event16-hits.csv.gz")), "event16-hits");
        assert_eq!(base_name(Path::new("event16")), "event16");
        assert_eq!(base_name(Path::new("/")), "");
    }

    #[test]
    fn test_classify_roles() {
        assert_eq!(classify(Path::new("event1-hits.csv")), InputRole::Hits);
        assert_eq!(classify(Path::new("event1-truth.csv")), InputRole::Truth);
        assert_eq!(
            classify(Path::new("event1-particles.csv")),
            InputRole::Particles
        );
        assert_eq!(classify(Path::new("event1-cells.csv")), InputRole::Unknown);
    }

    #[test]
    fn test_classify_only_looks_before_first_dot() {
        assert_eq!(classify(Path::new("event1.hits.csv")), InputRole::Unknown);
        assert_eq!(classify(Path::new("hits/event1-cells.csv")), InputRole::Unknown);
    }

    #[test]
    fn test_classify_prefers_hits_over_other_markers() {
        assert_eq!(classify(Path::new("hits-truth.csv")), InputRole::Hits);
        assert_eq!(classify(Path::new("truth-particles.csv")), InputRole::Truth);
    }

    #[test]
    fn test_single_hits_file_is_assigned() {
        let set = InputFileSet::classify(["event000000016-hits.csv"]).unwrap();
        assert_eq!(set.hits(), Some(Path::new("event000000016-hits.csv")));
        assert_eq!(set.truth(), None);
        assert_eq!(set.particles(), None);
        assert!(set.ignored().is_empty());
    }

    #[test]
    fn test_all_roles_are_assigned() {
        let set = InputFileSet::classify([
            "event1-particles.csv",
            "event1-hits.csv",
            "event1-truth.csv",
        ])
        .unwrap();
        assert_eq!(set.hits(), Some(Path::new("event1-hits.csv")));
        assert_eq!(set.truth(), Some(Path::new("event1-truth.csv")));
        assert_eq!(set.particles(), Some(Path::new("event1-particles.csv")));
    }

    #[test]
    fn test_duplicate_role_keeps_first() {
        let set = InputFileSet::classify(["a-hits.csv", "event1-truth.csv", "b-hits.csv"]).unwrap();
        assert_eq!(set.hits(), Some(Path::new("a-hits.csv")));
        assert_eq!(
            set.ignored(),
            &[IgnoredInput {
                path: PathBuf::from("b-hits.csv"),
                role: InputRole::Hits,
            }]
        );
    }

    #[test]
    fn test_duplicate_truth_does_not_depend_on_hits() {
        let set =
            InputFileSet::classify(["e1-hits.csv", "e1-truth.csv", "e2-truth.csv"]).unwrap();
        assert_eq!(set.truth(), Some(Path::new("e1-truth.csv")));
        assert_eq!(set.ignored().len(), 1);
        assert_eq!(set.ignored()[0].path, PathBuf::from("e2-truth.csv"));
    }

    #[test]
    fn test_unknown_inputs_are_ignored() {
        let set = InputFileSet::classify(["event1-cells.csv"]).unwrap();
        assert_eq!(set.hits(), None);
        assert_eq!(set.ignored()[0].role, InputRole::Unknown);
        assert_eq!(set.get(InputRole::Unknown), None);
    }

    #[test]
    fn test_empty_inputs_fail() {
        let result = InputFileSet::classify(Vec::<PathBuf>::new());
        assert!(matches!(result, Err(Error::NoInputs)));
    }
}
