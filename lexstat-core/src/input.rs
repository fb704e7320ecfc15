//! Loading text from files

use std::fs;
use std::path::Path;

use crate::cleanup::{clean_up_text, CleanupMode};
use crate::error::Result;

/// Read a UTF-8 file, join its lines without separators and clean it
///
/// Read failures are returned as errors; callers treat them as "nothing to
/// analyze" rather than retrying.
pub fn read_file<P: AsRef<Path>>(path: P, mode: CleanupMode) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)?;

    log::debug!("read {} bytes from {}", content.len(), path.display());

    let joined: String = content.lines().collect();
    clean_up_text(&joined, mode)
}
