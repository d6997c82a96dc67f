//! Inspection configuration, threaded explicitly through record
//! construction rather than held as ambient state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classic Windows limit for a full path (directory plus file name).
pub const WINDOWS_MAX_FULL_PATH: usize = 260;

/// Classic Windows limit for the directory part alone.
pub const WINDOWS_MAX_DIRECTORY: usize = 248;

/// Character-count ceilings applied to path facts.
///
/// Defaults follow the Windows limits. Deployments on filesystems without
/// that ceiling can raise them instead of patching call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathLimits {
    /// Maximum full-path length before the hazard flag trips.
    pub max_full_path: usize,
    /// Maximum directory-only length before the hazard flag trips.
    pub max_directory: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_full_path: WINDOWS_MAX_FULL_PATH,
            max_directory: WINDOWS_MAX_DIRECTORY,
        }
    }
}

/// Configuration for building [`FileMetadataRecord`]s.
///
/// [`FileMetadataRecord`]: crate::record::FileMetadataRecord
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionConfig {
    /// Root directory stripped from full paths to form the root-relative
    /// path field. The strip is a literal prefix match; see
    /// [`PathFacts::path_without_root`](crate::paths::PathFacts).
    pub root_dir: String,
    /// Zero-padding width of the display index. Default 5.
    pub index_digits: usize,
    /// Maximum file size in bytes for format introspection; 0 means no
    /// limit. Setting this to 1 effectively restricts inspection to path
    /// facts and sizes.
    pub max_size_for_processing: u64,
    /// Proceed past a full-path length hazard. Only sensible on hosts
    /// where the path ceiling has been raised; with the hazard present,
    /// most deeper reads would fail anyway.
    pub ignore_path_length_limit: bool,
    /// Path-length ceilings.
    pub limits: PathLimits,
}

impl InspectionConfig {
    /// Configuration for auditing files under `root_dir`, with defaults
    /// for everything else.
    pub fn new(root_dir: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.limits.max_full_path == 0 || self.limits.max_directory == 0 {
            return Err(Error::Config(
                "path length limits must be non-zero; raise them instead to disable the hazard"
                    .into(),
            ));
        }
        if self.limits.max_directory > self.limits.max_full_path {
            return Err(Error::Config(
                "directory length limit cannot exceed the full path limit".into(),
            ));
        }
        Ok(())
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            root_dir: String::new(),
            index_digits: 5,
            max_size_for_processing: 0,
            ignore_path_length_limit: false,
            limits: PathLimits::default(),
        }
    }
}
