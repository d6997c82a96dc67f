//! Size Gate: raw file size plus the size-threshold policy that decides
//! whether format introspection runs at all.

use std::fs;

use tracing::debug;

use crate::status::FieldStatus;

/// Read a file's size in bytes.
///
/// Failures (missing file, permissions, OS path limits) come back as a
/// status, not an error; the size stays 0.
pub fn read_size(full_path: &str) -> (u64, FieldStatus) {
    match fs::metadata(full_path) {
        Ok(meta) => (meta.len(), FieldStatus::Success),
        Err(err) => {
            debug!(path = full_path, error = %err, "size read failed");
            (0, FieldStatus::ReadFailed(format!("{:?}: {}", err.kind(), err)))
        }
    }
}

/// Size-gate policy: `max_size == 0` disables the gate; otherwise a file
/// strictly larger than the threshold is skipped.
pub fn exceeds_threshold(size: u64, max_size: u64) -> bool {
    max_size != 0 && size > max_size
}
