//! JSON event file writer.

use crate::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use trackml_core::EventRecord;

/// Mode requested for new output files; the process umask still applies.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o666;

/// Writer for converted event documents.
///
/// The document is written to a temporary file next to the destination and
/// only renamed onto it by [`Self::commit`]. Dropping the writer without
/// committing removes the temporary file, so a failed conversion never
/// leaves a truncated document behind.
///
/// The committed file gets the permissions of the file it replaces, or the
/// umask default when there was none.
pub struct EventFileWriter {
    temp: NamedTempFile,
    target: PathBuf,
}

impl EventFileWriter {
    /// Creates a writer for `path`.
    ///
    /// # Errors
    /// Returns an error if the temporary file cannot be created in the
    /// destination directory.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let target = path.as_ref().to_path_buf();
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(OUTPUT_MODE));
        }
        let temp = builder.tempfile_in(dir)?;

        if let Ok(existing) = fs::metadata(&target) {
            temp.as_file().set_permissions(existing.permissions())?;
        }
        Ok(Self { temp, target })
    }

    /// Serializes `event` as a single JSON object.
    ///
    /// # Errors
    /// Returns an error if encoding or writing fails.
    pub fn write_event<C: Serialize>(&mut self, event: &EventRecord<C>) -> Result<()> {
        let mut writer = BufWriter::new(self.temp.as_file_mut());
        serde_json::to_writer(&mut writer, event)?;
        writer.flush()?;
        Ok(())
    }

    /// Moves the finished document onto the destination path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be synced or renamed.
    pub fn commit(self) -> Result<PathBuf> {
        let Self { temp, target } = self;
        temp.as_file().sync_all()?;
        if let Err(err) = temp.persist(&target) {
            return Err(Error::Commit {
                path: target,
                source: err.error,
            });
        }
        Ok(target)
    }
}
