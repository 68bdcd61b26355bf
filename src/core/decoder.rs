//! UTF-8 decode checking logic

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str;

/// A single decode failure: where decoding stopped and why
///
/// `byte_offset` is the index of the first byte that is not part of a
/// valid UTF-8 sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub byte_offset: usize,
    pub reason: String,
}

impl DecodeFailure {
    fn from_utf8_error(err: str::Utf8Error) -> Self {
        let reason = match err.error_len() {
            Some(len) => format!("invalid utf-8 sequence of {} bytes", len),
            None => "incomplete utf-8 byte sequence".to_string(),
        };
        Self {
            byte_offset: err.valid_up_to(),
            reason,
        }
    }
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from byte offset {}", self.reason, self.byte_offset)
    }
}

/// Check a byte buffer for strict UTF-8 validity
///
/// # Returns
/// `None` if the bytes decode cleanly, otherwise the failure record
pub fn audit_bytes(bytes: &[u8]) -> Option<DecodeFailure> {
    match str::from_utf8(bytes) {
        Ok(_) => None,
        Err(err) => Some(DecodeFailure::from_utf8_error(err)),
    }
}

/// Read a file and check its full contents for UTF-8 validity
///
/// Decode failures are returned as a record so the caller can keep
/// scanning. Read errors (permission denied, vanished file) propagate
/// and end the scan.
pub fn audit_file(path: &Path) -> Result<Option<DecodeFailure>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(audit_bytes(&bytes))
}
