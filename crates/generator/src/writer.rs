//! Output writing with the overwrite policy

use std::fs;
use std::path::Path;
use swaggerwiz_common::{ConvertError, Result};

/// What [`write_document`] did with the output path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Document written to the path
    Written,
    /// Path already existed and `overwrite` was not set; nothing written
    SkippedExisting,
}

/// Write a serialized document to `path`
///
/// Existing output is never destroyed unless `overwrite` is set; a skipped
/// write is reported through the outcome, not an error.
pub fn write_document(path: &Path, contents: &str, overwrite: bool) -> Result<WriteOutcome> {
    if path.exists() && !overwrite {
        return Ok(WriteOutcome::SkippedExisting);
    }

    fs::write(path, contents).map_err(|e| {
        ConvertError::Generation(format!("Failed to write {}: {}", path.display(), e))
    })?;

    Ok(WriteOutcome::Written)
}
