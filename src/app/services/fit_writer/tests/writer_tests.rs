//! Tests for file-level writing and overwrite protection

use super::sample_selection;
use crate::app::services::export_filter::Selection;
use crate::app::services::fit_writer::{crc, write_fit_file};
use crate::Error;

#[test]
fn test_write_produces_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.fit");

    let stats = write_fit_file(&path, &sample_selection()).unwrap();
    assert_eq!(stats.records_written, 1);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() as u64, stats.bytes_written);
    assert_eq!(&bytes[8..12], b".FIT");

    let stored = u16::from_le_bytes([bytes[bytes.len() - 2], bytes[bytes.len() - 1]]);
    assert_eq!(crc::checksum(&bytes[..bytes.len() - 2]), stored);
}

#[test]
fn test_existing_sink_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.fit");
    std::fs::write(&path, b"previous export").unwrap();

    let err = write_fit_file(&path, &sample_selection()).unwrap_err();
    assert!(matches!(err, Error::SinkExists { .. }));

    // The earlier file is untouched
    assert_eq!(std::fs::read(&path).unwrap(), b"previous export");
}

#[test]
fn test_empty_selection_still_writes_valid_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.fit");

    let selection = Selection {
        records: Vec::new(),
        fields: Vec::new(),
    };
    let stats = write_fit_file(&path, &selection).unwrap();
    assert_eq!(stats.records_written, 0);

    let bytes = std::fs::read(&path).unwrap();
    // Header, file_id and file_creator messages, trailing CRC
    assert!(bytes.len() > 16);
    let stored = u16::from_le_bytes([bytes[bytes.len() - 2], bytes[bytes.len() - 1]]);
    assert_eq!(crc::checksum(&bytes[..bytes.len() - 2]), stored);
}
