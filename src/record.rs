//! The immutable per-file metadata record and its projections.
//!
//! One ordered field table drives every view of a record: the label-keyed
//! mapping, the positional sequence, the multi-line text rendering and
//! the JSON serialization all derive from [`FileMetadataRecord::fields`],
//! so adding a field is a single change.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::status::FieldStatus;

/// One value in a record's field table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(u64),
    Flag(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Count(count) => write!(f, "{}", count),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::Count(count) => serializer.serialize_u64(*count),
            FieldValue::Flag(flag) => serializer.serialize_bool(*flag),
        }
    }
}

/// Normalized metadata describing one inspected file.
///
/// Built once by [`Inspector::inspect`] and read-only afterwards; a
/// refresh is a new record for the same path, never a mutation. Every
/// value field has a companion status explaining how (or why not) it was
/// produced, so nothing defaults silently.
///
/// [`Inspector::inspect`]: crate::inspector::Inspector::inspect
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadataRecord {
    /// Caller-supplied ordinal, e.g. the position in a directory walk.
    pub index_number: u64,
    /// Zero-padded form of the index for display and sortable exports.
    pub index_digits: String,
    pub full_path: String,
    pub path_without_root: String,
    pub directory_only: String,
    pub full_name: String,
    pub name_without_extension: String,
    pub extension: String,
    pub full_name_clean: String,
    pub name_without_extension_clean: String,
    pub full_path_len: usize,
    pub directory_len: usize,
    pub full_path_exceeds_limit: bool,
    pub directory_exceeds_limit: bool,
    pub contains_comma: bool,
    pub skipped_for_size: bool,
    pub size_bytes: u64,
    pub size_status: FieldStatus,
    pub page_count: u32,
    pub page_count_status: FieldStatus,
    pub is_encrypted: bool,
    pub encryption_status: FieldStatus,
}

impl FileMetadataRecord {
    /// The ordered field table every other view derives from.
    ///
    /// Labels are stable, human-readable column headers for tabular
    /// exports. Adding a field here updates the mapping, sequence, text
    /// and JSON projections together.
    pub fn fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("Index (Number)", FieldValue::Count(self.index_number)),
            ("Index (Padded)", FieldValue::Text(self.index_digits.clone())),
            ("Full Path", FieldValue::Text(self.full_path.clone())),
            (
                "Path Without Root",
                FieldValue::Text(self.path_without_root.clone()),
            ),
            (
                "Directory Only",
                FieldValue::Text(self.directory_only.clone()),
            ),
            ("File Name", FieldValue::Text(self.full_name.clone())),
            (
                "File Name (No Extension)",
                FieldValue::Text(self.name_without_extension.clone()),
            ),
            ("Extension", FieldValue::Text(self.extension.clone())),
            (
                "Clean File Name",
                FieldValue::Text(self.full_name_clean.clone()),
            ),
            (
                "Clean File Name (No Extension)",
                FieldValue::Text(self.name_without_extension_clean.clone()),
            ),
            (
                "Full Path Length",
                FieldValue::Count(self.full_path_len as u64),
            ),
            (
                "Directory Length",
                FieldValue::Count(self.directory_len as u64),
            ),
            (
                "Full Path Too Long",
                FieldValue::Flag(self.full_path_exceeds_limit),
            ),
            (
                "Directory Too Long",
                FieldValue::Flag(self.directory_exceeds_limit),
            ),
            ("Contains Comma", FieldValue::Flag(self.contains_comma)),
            ("Skipped For Size", FieldValue::Flag(self.skipped_for_size)),
            ("Size (Bytes)", FieldValue::Count(self.size_bytes)),
            (
                "Size Status",
                FieldValue::Text(self.size_status.to_string()),
            ),
            ("Page Count", FieldValue::Count(self.page_count as u64)),
            (
                "Page Count Status",
                FieldValue::Text(self.page_count_status.to_string()),
            ),
            ("Encrypted", FieldValue::Flag(self.is_encrypted)),
            (
                "Encryption Status",
                FieldValue::Text(self.encryption_status.to_string()),
            ),
        ]
    }

    /// Column labels in table order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.fields().into_iter().map(|(label, _)| label).collect()
    }

    /// Values in table order, for positional exports.
    pub fn values(&self) -> Vec<FieldValue> {
        self.fields().into_iter().map(|(_, value)| value).collect()
    }

    /// Label-keyed view of the same table, for lookup by column name.
    pub fn field_map(&self) -> HashMap<&'static str, FieldValue> {
        self.fields().into_iter().collect()
    }
}

impl fmt::Display for FileMetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.fields() {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}

impl Serialize for FileMetadataRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (label, value) in fields {
            map.serialize_entry(label, &value)?;
        }
        map.end()
    }
}
