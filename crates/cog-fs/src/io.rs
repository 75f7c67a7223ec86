//! Bounded reads and link creation

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file, refusing files larger than `max` bytes.
pub fn read_text_bounded(path: &Path, max: u64) -> Result<String> {
    let size = fs::metadata(path).map_err(|e| Error::io(path, e))?.len();
    if size > max {
        return Err(Error::TooLarge {
            path: path.to_path_buf(),
            size,
            max,
        });
    }
    read_text(path)
}

/// Create `link` as a hard link to `original`.
///
/// The raw `std::io::Error` is returned so callers can distinguish
/// `AlreadyExists` from real failures.
pub fn hard_link(original: &Path, link: &Path) -> std::io::Result<()> {
    fs::hard_link(original, link)
}
