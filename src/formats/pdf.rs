//! PDF introspection via structural parse.

use lopdf::{Document, Object};
use tracing::debug;

use super::{EncryptionProbe, FormatHandler, PageCountProbe};
use crate::status::FieldStatus;

/// Handler for the `pdf` extension.
///
/// Encryption is detected from the trailer's `Encrypt` entry. Page
/// counting walks the page tree when the file is not encrypted; for
/// encrypted files the `Count` entry of the root `Pages` node is read
/// instead, which is the document's own claim and may be approximate.
#[derive(Debug, Default)]
pub struct PdfHandler;

impl FormatHandler for PdfHandler {
    fn detect_encryption(&self, full_path: &str) -> EncryptionProbe {
        match Document::load(full_path) {
            Ok(doc) => EncryptionProbe {
                encrypted: doc.is_encrypted(),
                status: FieldStatus::Success,
            },
            Err(err) => EncryptionProbe {
                encrypted: false,
                status: FieldStatus::ParseFailed(err.to_string()),
            },
        }
    }

    fn count_pages(&self, full_path: &str, encrypted: bool) -> PageCountProbe {
        let doc = match Document::load(full_path) {
            Ok(doc) => doc,
            Err(err) => {
                return PageCountProbe {
                    pages: 0,
                    status: FieldStatus::ParseFailed(err.to_string()),
                }
            }
        };

        if encrypted {
            debug!(path = full_path, "encrypted PDF, using declared page count");
            match declared_page_count(&doc) {
                Ok(pages) => PageCountProbe {
                    pages,
                    status: FieldStatus::SuccessApproximate,
                },
                Err(msg) => PageCountProbe {
                    pages: 0,
                    status: FieldStatus::ParseFailed(msg),
                },
            }
        } else {
            PageCountProbe {
                pages: doc.get_pages().len() as u32,
                status: FieldStatus::Success,
            }
        }
    }
}

/// Page count as declared by the root `Pages` dictionary's `Count` entry.
/// Reachable without touching encrypted content streams, since dictionary
/// structure is not encrypted.
fn declared_page_count(doc: &Document) -> Result<u32, String> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|e| format!("no document catalog: {}", e))?;
    let catalog = doc
        .get_object(catalog_id)
        .and_then(Object::as_dict)
        .map_err(|e| format!("catalog unreadable: {}", e))?;
    let pages_id = catalog
        .get(b"Pages")
        .and_then(Object::as_reference)
        .map_err(|e| format!("no page tree: {}", e))?;
    let pages = doc
        .get_object(pages_id)
        .and_then(Object::as_dict)
        .map_err(|e| format!("page tree unreadable: {}", e))?;
    let count = pages
        .get(b"Count")
        .and_then(Object::as_i64)
        .map_err(|e| format!("no declared page count: {}", e))?;
    u32::try_from(count).map_err(|_| format!("invalid declared page count: {}", count))
}
