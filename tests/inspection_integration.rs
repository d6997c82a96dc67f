//! End-to-end inspection of generated files on disk.

mod fixtures;

use std::path::Path;

use docaudit::{FieldStatus, InspectionConfig, Inspector};
use tempfile::TempDir;

fn inspector_rooted_at(root: &Path) -> Inspector {
    Inspector::new(InspectionConfig::new(root.to_string_lossy().into_owned()))
}

#[test]
fn unencrypted_pdf_reports_structural_page_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contract.pdf");
    fixtures::write_pdf(&path, 3);

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert_eq!(record.extension, "pdf");
    assert_eq!(record.path_without_root, "contract.pdf");
    assert_eq!(record.page_count, 3);
    assert_eq!(record.page_count_status, FieldStatus::Success);
    assert!(!record.is_encrypted);
    assert_eq!(record.encryption_status, FieldStatus::Success);
    assert_eq!(record.size_status, FieldStatus::Success);
    assert!(record.size_bytes > 0);
    assert!(!record.skipped_for_size);
}

#[test]
fn encrypted_pdf_falls_back_to_declared_page_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sealed.pdf");
    // Two real pages, but the document claims seven.
    fixtures::write_encrypted_pdf(&path, 2, 7);

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert!(record.is_encrypted);
    assert_eq!(record.encryption_status, FieldStatus::Success);
    assert_eq!(record.page_count, 7);
    assert_eq!(record.page_count_status, FieldStatus::SuccessApproximate);
}

#[test]
fn multi_frame_tiff_counts_frames() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scan.tiff");
    fixtures::write_tiff(&path, 5);

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert_eq!(record.extension, "tiff");
    assert_eq!(record.page_count, 5);
    assert_eq!(record.page_count_status, FieldStatus::Success);
    assert!(!record.is_encrypted);
    assert_eq!(record.encryption_status, FieldStatus::Unsupported);
}

#[test]
fn single_frame_tif_counts_one_page() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fax.tif");
    fixtures::write_tiff(&path, 1);

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert_eq!(record.extension, "tif");
    assert_eq!(record.page_count, 1);
    assert_eq!(record.page_count_status, FieldStatus::Success);
}

#[test]
fn unsupported_format_with_comma_in_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a,b.docx");
    fixtures::write_blob(&path, 64);

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert!(record.contains_comma);
    assert_eq!(record.full_name_clean, "a_b.docx");
    assert_eq!(record.name_without_extension_clean, "a_b");
    assert_eq!(record.size_bytes, 64);
    assert_eq!(record.size_status, FieldStatus::Success);
    assert_eq!(record.page_count_status, FieldStatus::Unsupported);
    assert_eq!(record.encryption_status, FieldStatus::Unsupported);
}

#[test]
fn oversize_file_skips_format_inspection_but_reports_size() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.pdf");
    fixtures::write_blob(&path, 5000);

    let mut config = InspectionConfig::new(dir.path().to_string_lossy().into_owned());
    config.max_size_for_processing = 1000;
    let record = Inspector::new(config).inspect(&path.to_string_lossy(), 1);

    assert!(record.skipped_for_size);
    assert_eq!(record.size_bytes, 5000);
    assert_eq!(record.size_status, FieldStatus::Success);
    assert_eq!(record.page_count_status, FieldStatus::SizeSkip);
    assert_eq!(record.encryption_status, FieldStatus::SizeSkip);
}

#[test]
fn file_at_the_threshold_is_still_inspected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exact.bin");
    fixtures::write_blob(&path, 1000);

    let mut config = InspectionConfig::new(dir.path().to_string_lossy().into_owned());
    config.max_size_for_processing = 1000;
    let record = Inspector::new(config).inspect(&path.to_string_lossy(), 1);

    assert!(!record.skipped_for_size);
    assert_eq!(record.page_count_status, FieldStatus::Unsupported);
}

#[test]
fn corrupt_files_fail_in_isolation() {
    let dir = TempDir::new().unwrap();
    let bad_pdf = dir.path().join("mangled.pdf");
    let bad_tiff = dir.path().join("mangled.tiff");
    let good = dir.path().join("fine.pdf");
    fixtures::write_corrupt_pdf(&bad_pdf);
    fixtures::write_corrupt_tiff(&bad_tiff);
    fixtures::write_pdf(&good, 1);

    let inspector = inspector_rooted_at(dir.path());

    let record = inspector.inspect(&bad_pdf.to_string_lossy(), 1);
    assert_eq!(record.size_status, FieldStatus::Success);
    assert!(matches!(
        record.encryption_status,
        FieldStatus::ParseFailed(_)
    ));
    assert!(matches!(
        record.page_count_status,
        FieldStatus::ParseFailed(_)
    ));

    let record = inspector.inspect(&bad_tiff.to_string_lossy(), 2);
    assert!(matches!(
        record.page_count_status,
        FieldStatus::ParseFailed(_)
    ));

    // A bad file earlier in the batch has no bearing on the next one.
    let record = inspector.inspect(&good.to_string_lossy(), 3);
    assert_eq!(record.page_count_status, FieldStatus::Success);
    assert_eq!(record.page_count, 1);
}

#[test]
fn missing_file_reports_read_failure_per_stage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vanished.pdf");

    let record = inspector_rooted_at(dir.path()).inspect(&path.to_string_lossy(), 1);

    assert_eq!(record.size_bytes, 0);
    assert!(matches!(record.size_status, FieldStatus::ReadFailed(_)));
    // The format inspector still runs and reports its own failure.
    assert!(matches!(
        record.encryption_status,
        FieldStatus::ParseFailed(_)
    ));
}

#[test]
fn repeated_inspection_yields_identical_records() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stable.pdf");
    fixtures::write_pdf(&path, 2);

    let inspector = inspector_rooted_at(dir.path());
    let first = inspector.inspect(&path.to_string_lossy(), 9);
    let second = inspector.inspect(&path.to_string_lossy(), 9);
    assert_eq!(first, second);
}
