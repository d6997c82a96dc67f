//! Format Inspector: per-extension introspection handlers.
//!
//! A handler answers two questions for one family of formats: is the file
//! encrypted, and how many pages does it hold. The registry keys handlers
//! by lower-cased extension and resolves everything else to an explicit
//! unsupported handler, so adding a format is a registration, not an edit
//! to a dispatch chain.

mod pdf;
mod tiff;

pub use pdf::PdfHandler;
pub use tiff::TiffHandler;

use std::collections::HashMap;
use std::sync::Arc;

use crate::status::FieldStatus;

/// Result of an encryption probe. `encrypted` is only meaningful when the
/// status is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionProbe {
    pub encrypted: bool,
    pub status: FieldStatus,
}

/// Result of a page-count probe. `pages` is only meaningful when the
/// status is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCountProbe {
    pub pages: u32,
    pub status: FieldStatus,
}

/// Capability interface implemented once per format family.
///
/// Implementations must keep every file handle scoped to the probe that
/// opened it and must report parse problems as statuses; a corrupt file
/// is data, not a reason to abort a batch.
pub trait FormatHandler: Send + Sync {
    /// Determine whether the file is encrypted.
    fn detect_encryption(&self, full_path: &str) -> EncryptionProbe;

    /// Count the file's pages. `encrypted` is the outcome of the prior
    /// encryption probe; the PDF handler falls back to declared metadata
    /// for encrypted files.
    fn count_pages(&self, full_path: &str, encrypted: bool) -> PageCountProbe;
}

/// Fallback for extensions nothing is registered for: both probes report
/// an explicit unsupported status, never a default disguised as success.
#[derive(Debug, Default)]
pub struct UnsupportedFormat;

impl FormatHandler for UnsupportedFormat {
    fn detect_encryption(&self, _full_path: &str) -> EncryptionProbe {
        EncryptionProbe {
            encrypted: false,
            status: FieldStatus::Unsupported,
        }
    }

    fn count_pages(&self, _full_path: &str, _encrypted: bool) -> PageCountProbe {
        PageCountProbe {
            pages: 0,
            status: FieldStatus::Unsupported,
        }
    }
}

/// Extension-keyed lookup of format handlers.
pub struct FormatRegistry {
    handlers: HashMap<String, Arc<dyn FormatHandler>>,
    fallback: Arc<dyn FormatHandler>,
}

impl FormatRegistry {
    /// Empty registry; every extension resolves to the unsupported
    /// fallback.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: Arc::new(UnsupportedFormat),
        }
    }

    /// Registry with the built-in handlers: PDF (encryption + pages) and
    /// TIFF (pages only).
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(&["pdf"], Arc::new(PdfHandler));
        registry.register(&["tif", "tiff"], Arc::new(TiffHandler));
        registry
    }

    /// Register `handler` for each extension, matched case-insensitively.
    /// Later registrations replace earlier ones.
    pub fn register(&mut self, extensions: &[&str], handler: Arc<dyn FormatHandler>) {
        for ext in extensions {
            self.handlers.insert(ext.to_lowercase(), Arc::clone(&handler));
        }
    }

    /// Handler responsible for `extension`, or the unsupported fallback.
    pub fn handler_for(&self, extension: &str) -> &dyn FormatHandler {
        self.handlers
            .get(&extension.to_lowercase())
            .unwrap_or(&self.fallback)
            .as_ref()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
