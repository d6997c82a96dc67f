//! Emitters for record collections: CSV, JSON and plain text.
//!
//! All three formats project the records' own field table, so column
//! headers, JSON keys and text labels never drift apart.

use std::io::Write;

use crate::error::Result;
use crate::record::FileMetadataRecord;

/// Write records as CSV, with the record labels as the header row. An
/// empty slice produces empty output.
pub fn write_csv<W: Write>(records: &[FileMetadataRecord], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if let Some(first) = records.first() {
        writer.write_record(first.labels())?;
    }
    for record in records {
        writer.write_record(record.values().iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records as a JSON array of label-keyed objects.
pub fn write_json<W: Write>(records: &[FileMetadataRecord], out: W) -> Result<()> {
    serde_json::to_writer_pretty(out, records)?;
    Ok(())
}

/// Write the multi-line text rendering of each record, blank-line
/// separated.
pub fn write_text<W: Write>(records: &[FileMetadataRecord], mut out: W) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
