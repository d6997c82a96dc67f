//! Record construction: threads configuration through the analysis
//! stages in a fixed order.

use tracing::{debug, instrument, warn};

use crate::config::InspectionConfig;
use crate::formats::FormatRegistry;
use crate::paths::PathFacts;
use crate::record::FileMetadataRecord;
use crate::size;
use crate::status::FieldStatus;

/// Builds [`FileMetadataRecord`]s.
///
/// Path analysis always runs; the size gate runs unless a path-length
/// hazard is present and not overridden; format introspection runs unless
/// the size gate skipped the file. All state is read-only after
/// construction, so one inspector may serve many threads as long as each
/// call targets a distinct path.
pub struct Inspector {
    config: InspectionConfig,
    registry: FormatRegistry,
}

impl Inspector {
    /// Inspector with the built-in format handlers.
    pub fn new(config: InspectionConfig) -> Self {
        Self::with_registry(config, FormatRegistry::with_defaults())
    }

    /// Inspector with a caller-assembled handler registry.
    pub fn with_registry(config: InspectionConfig, registry: FormatRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &InspectionConfig {
        &self.config
    }

    /// Build the record for one file.
    ///
    /// Never fails: every problem is captured in the record's status
    /// fields. When the full path exceeds the length limit (and the
    /// override is off) no filesystem read is attempted at all.
    #[instrument(skip(self))]
    pub fn inspect(&self, full_path: &str, index: u64) -> FileMetadataRecord {
        let facts = PathFacts::analyze(full_path, &self.config.root_dir, &self.config.limits);

        let blocked = facts.full_path_exceeds_limit && !self.config.ignore_path_length_limit;
        if blocked {
            warn!(
                len = facts.full_path_len,
                limit = self.config.limits.max_full_path,
                "full path exceeds length limit, skipping inspection"
            );
        }

        let (size_bytes, size_status) = if blocked {
            (0, FieldStatus::PathHazard)
        } else {
            size::read_size(full_path)
        };

        let skipped_for_size =
            !blocked && size::exceeds_threshold(size_bytes, self.config.max_size_for_processing);

        let (is_encrypted, encryption_status, page_count, page_count_status) = if blocked {
            (false, FieldStatus::PathHazard, 0, FieldStatus::PathHazard)
        } else if skipped_for_size {
            debug!(size_bytes, "size threshold exceeded, skipping format inspection");
            (false, FieldStatus::SizeSkip, 0, FieldStatus::SizeSkip)
        } else {
            let handler = self.registry.handler_for(&facts.extension);
            let encryption = handler.detect_encryption(full_path);
            let pages = handler.count_pages(full_path, encryption.encrypted);
            (
                encryption.encrypted,
                encryption.status,
                pages.pages,
                pages.status,
            )
        };

        FileMetadataRecord {
            index_number: index,
            index_digits: zero_pad(index, self.config.index_digits),
            full_path: facts.full_path,
            path_without_root: facts.path_without_root,
            directory_only: facts.directory_only,
            full_name: facts.full_name,
            name_without_extension: facts.name_without_extension,
            extension: facts.extension,
            full_name_clean: facts.full_name_clean,
            name_without_extension_clean: facts.name_without_extension_clean,
            full_path_len: facts.full_path_len,
            directory_len: facts.directory_len,
            full_path_exceeds_limit: facts.full_path_exceeds_limit,
            directory_exceeds_limit: facts.directory_exceeds_limit,
            contains_comma: facts.contains_comma,
            skipped_for_size,
            size_bytes,
            size_status,
            page_count,
            page_count_status,
            is_encrypted,
            encryption_status,
        }
    }
}

/// Zero-pad `index` to `width` digits, keeping the full number when it is
/// already wider.
fn zero_pad(index: u64, width: usize) -> String {
    format!("{:0width$}", index, width = width)
}
