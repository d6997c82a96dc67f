//! docaudit: per-file metadata inspection for bulk document audits.
//!
//! Builds one immutable [`FileMetadataRecord`] per file: path facts, size
//! behind a configurable processing gate, and format-specific
//! introspection (PDF encryption and page counts, TIFF frame counts)
//! that degrades to explicit statuses instead of failing a batch.

// Configuration and errors
pub mod config;
pub mod error;

// Analysis stages
pub mod formats;
pub mod paths;
pub mod size;

// Record assembly and emission
pub mod export;
pub mod inspector;
pub mod record;
pub mod status;

// Re-exports for crate consumers
pub use config::{InspectionConfig, PathLimits};
pub use error::{Error, Result};
pub use formats::{
    EncryptionProbe, FormatHandler, FormatRegistry, PageCountProbe, PdfHandler, TiffHandler,
    UnsupportedFormat,
};
pub use inspector::Inspector;
pub use paths::{PathFacts, UNKNOWN_EXTENSION};
pub use record::{FieldValue, FileMetadataRecord};
pub use status::FieldStatus;
