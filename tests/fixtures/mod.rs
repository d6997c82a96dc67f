//! Generated on-disk fixtures for integration tests.
//!
//! Real files are built with the same codecs the crate inspects with, so
//! the tests exercise genuine parses rather than canned byte strings;
//! the corrupt fixtures are the exception, by construction.

use std::fs;
use std::path::Path;

use lopdf::{dictionary, Document, Object, StringFormat};

/// Build a valid PDF with `pages` pages at `path`.
pub fn write_pdf(path: &Path, pages: usize) {
    let mut doc = build_pdf(pages, pages as i64);
    doc.save(path).expect("save pdf fixture");
}

/// Build a PDF that reads as encrypted: a Standard security handler stub
/// referenced from the trailer. The declared page count is written
/// independently of the real structure, mimicking approximate metadata.
pub fn write_encrypted_pdf(path: &Path, real_pages: usize, declared_pages: i64) {
    let mut doc = build_pdf(real_pages, declared_pages);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1_i64,
        "R" => 2_i64,
        "Length" => 40_i64,
        "O" => Object::String(vec![0x01; 32], StringFormat::Literal),
        "U" => Object::String(vec![0x02; 32], StringFormat::Literal),
        "P" => -44_i64,
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(vec![0x0a; 16], StringFormat::Literal),
            Object::String(vec![0x0a; 16], StringFormat::Literal),
        ]),
    );
    doc.save(path).expect("save encrypted pdf fixture");
}

/// Build a multi-frame grayscale TIFF with `frames` frames.
pub fn write_tiff(path: &Path, frames: usize) {
    let file = fs::File::create(path).expect("create tiff fixture");
    let mut encoder = tiff::encoder::TiffEncoder::new(file).expect("tiff header");
    for _ in 0..frames {
        encoder
            .write_image::<tiff::encoder::colortype::Gray8>(4, 4, &[0u8; 16])
            .expect("write tiff frame");
    }
}

/// Bytes that claim to be a PDF but cannot be parsed.
pub fn write_corrupt_pdf(path: &Path) {
    fs::write(path, b"%PDF-1.4 but nothing else of substance").expect("write corrupt pdf");
}

/// A TIFF header whose first directory offset points past end of file.
pub fn write_corrupt_tiff(path: &Path) {
    fs::write(path, b"II*\x00\xff\xff\xff\xff").expect("write corrupt tiff");
}

/// Arbitrary payload of `len` bytes.
pub fn write_blob(path: &Path, len: usize) {
    fs::write(path, vec![0u8; len]).expect("write blob");
}

fn build_pdf(real_pages: usize, declared_pages: i64) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..real_pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            })
            .into()
        })
        .collect();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => declared_pages,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}
