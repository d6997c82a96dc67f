//! Path Analyzer: pure decomposition of a document path into structural
//! facts. No I/O, deterministic, never fails; a path with no separator
//! degrades to an empty directory and an all-name split.

use crate::config::PathLimits;

/// Separators recognized in document paths.
///
/// Records often describe collections walked on Windows, so backslash and
/// forward slash both split regardless of the host platform.
pub const SEPARATORS: [char; 2] = ['\\', '/'];

/// Extension reported when a file name has no usable extension segment.
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// Structural facts derived from one full path string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFacts {
    /// The path exactly as supplied.
    pub full_path: String,
    /// `full_path` with the configured root prefix stripped.
    ///
    /// The strip is a literal `root + separator` prefix match, not a
    /// relative-path computation; when the prefix does not match (mixed
    /// separators, case differences) the full path is kept unchanged.
    pub path_without_root: String,
    /// Directory part, trailing separator included; empty when the path
    /// has no separator.
    pub directory_only: String,
    /// File name, extension included.
    pub full_name: String,
    /// File name with the extension segment removed.
    pub name_without_extension: String,
    /// Lower-cased extension, or [`UNKNOWN_EXTENSION`].
    pub extension: String,
    /// `full_name` with commas replaced by underscores.
    pub full_name_clean: String,
    /// `name_without_extension` with commas replaced by underscores.
    pub name_without_extension_clean: String,
    /// Character count of the full path.
    pub full_path_len: usize,
    /// Character count of the directory part.
    pub directory_len: usize,
    /// Full path length exceeds the configured limit.
    pub full_path_exceeds_limit: bool,
    /// Directory length exceeds the configured limit.
    pub directory_exceeds_limit: bool,
    /// The raw path contains a comma, which some downstream export
    /// pipelines cannot carry.
    pub contains_comma: bool,
}

impl PathFacts {
    pub fn analyze(full_path: &str, root_dir: &str, limits: &PathLimits) -> Self {
        let (directory_only, full_name) = split_directory(full_path);
        let (name_without_extension, extension) = split_extension(full_name);

        let full_path_len = full_path.chars().count();
        let directory_len = directory_only.chars().count();

        Self {
            full_path: full_path.to_owned(),
            path_without_root: strip_root(full_path, root_dir),
            directory_only: directory_only.to_owned(),
            full_name: full_name.to_owned(),
            name_without_extension: name_without_extension.to_owned(),
            extension,
            full_name_clean: sanitize(full_name),
            name_without_extension_clean: sanitize(name_without_extension),
            full_path_len,
            directory_len,
            full_path_exceeds_limit: full_path_len > limits.max_full_path,
            directory_exceeds_limit: directory_len > limits.max_directory,
            contains_comma: full_path.contains(','),
        }
    }
}

/// Split at the last separator; the directory keeps the trailing
/// separator so the two halves concatenate back to the original.
fn split_directory(path: &str) -> (&str, &str) {
    match path.rfind(&SEPARATORS[..]) {
        Some(idx) => path.split_at(idx + 1),
        None => ("", path),
    }
}

/// Split the name at its last dot. A missing or empty extension segment
/// yields [`UNKNOWN_EXTENSION`] so the field is never empty.
fn split_extension(name: &str) -> (&str, String) {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => (&name[..idx], name[idx + 1..].to_lowercase()),
        Some(idx) => (&name[..idx], UNKNOWN_EXTENSION.to_owned()),
        None => (name, UNKNOWN_EXTENSION.to_owned()),
    }
}

fn strip_root(full_path: &str, root_dir: &str) -> String {
    if !root_dir.is_empty() {
        for sep in SEPARATORS {
            let stripped = full_path
                .strip_prefix(root_dir)
                .and_then(|rest| rest.strip_prefix(sep));
            if let Some(rest) = stripped {
                return rest.to_owned();
            }
        }
    }
    full_path.to_owned()
}

fn sanitize(name: &str) -> String {
    name.replace(',', "_")
}
