//! TIFF introspection: embedded frame counting.

use std::fs::File;
use std::io::BufReader;

use tiff::decoder::Decoder;

use super::{EncryptionProbe, FormatHandler, PageCountProbe};
use crate::status::FieldStatus;

/// Handler for the `tif` and `tiff` extensions.
///
/// Multi-page TIFFs chain one image file directory per frame; the frame
/// count is the page count. Encryption is not a TIFF concept, so that
/// probe always reports unsupported.
#[derive(Debug, Default)]
pub struct TiffHandler;

impl FormatHandler for TiffHandler {
    fn detect_encryption(&self, _full_path: &str) -> EncryptionProbe {
        EncryptionProbe {
            encrypted: false,
            status: FieldStatus::Unsupported,
        }
    }

    fn count_pages(&self, full_path: &str, _encrypted: bool) -> PageCountProbe {
        let file = match File::open(full_path) {
            Ok(file) => file,
            Err(err) => {
                return PageCountProbe {
                    pages: 0,
                    status: FieldStatus::ReadFailed(err.to_string()),
                }
            }
        };

        // Decoding the first directory validates the header; the rest of
        // the chain is walked without decoding pixel data.
        let mut decoder = match Decoder::new(BufReader::new(file)) {
            Ok(decoder) => decoder,
            Err(err) => {
                return PageCountProbe {
                    pages: 0,
                    status: FieldStatus::ParseFailed(err.to_string()),
                }
            }
        };

        let mut frames: u32 = 1;
        while decoder.more_images() {
            if let Err(err) = decoder.next_image() {
                return PageCountProbe {
                    pages: 0,
                    status: FieldStatus::ParseFailed(err.to_string()),
                };
            }
            frames += 1;
        }

        PageCountProbe {
            pages: frames,
            status: FieldStatus::Success,
        }
    }
}
