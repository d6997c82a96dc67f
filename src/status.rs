//! Field-level inspection outcomes.
//!
//! Every metadata field on a record carries one of these alongside its
//! value, so a consumer can always tell real data from a deliberate skip
//! or a failure. Statuses are data, never panics or bubbled errors: one
//! unreadable file must not abort a batch.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome attached to the size, page-count and encryption fields of a
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FieldStatus {
    /// The field was read successfully.
    Success,
    /// The value came from the file's own metadata rather than a
    /// structural parse and may be approximate (encrypted PDFs).
    SuccessApproximate,
    /// Skipped: the full path exceeds the configured length limit.
    PathHazard,
    /// Skipped: the file exceeds the configured size threshold.
    SizeSkip,
    /// No handler exists for this file extension.
    Unsupported,
    /// The file could not be read (missing, permissions, OS path limit).
    ReadFailed(String),
    /// Recognized format, but the content could not be parsed.
    ParseFailed(String),
}

impl FieldStatus {
    /// True for [`Success`](FieldStatus::Success) and
    /// [`SuccessApproximate`](FieldStatus::SuccessApproximate).
    pub fn is_success(&self) -> bool {
        matches!(self, FieldStatus::Success | FieldStatus::SuccessApproximate)
    }

    /// True for the deliberate skips (path hazard, size gate, unsupported
    /// format), as opposed to real read or parse failures.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            FieldStatus::PathHazard | FieldStatus::SizeSkip | FieldStatus::Unsupported
        )
    }
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Success => write!(f, "success"),
            FieldStatus::SuccessApproximate => write!(
                f,
                "success (value taken from document metadata and may be approximate)"
            ),
            FieldStatus::PathHazard => {
                write!(f, "skipped: full path length exceeds the configured limit")
            }
            FieldStatus::SizeSkip => {
                write!(f, "skipped: file exceeds the maximum size for processing")
            }
            FieldStatus::Unsupported => {
                write!(f, "unknown: not a supported file type for this check")
            }
            FieldStatus::ReadFailed(msg) => write!(f, "read failed: {}", msg),
            FieldStatus::ParseFailed(msg) => write!(f, "parse failed: {}", msg),
        }
    }
}
