//! Tests for the FIT CRC-16

use crate::app::services::fit_writer::crc;

#[test]
fn test_empty_input_is_zero() {
    assert_eq!(crc::checksum(&[]), 0);
}

#[test]
fn test_zero_byte_is_zero() {
    // Table entry 0 is 0, so a zero byte leaves a zero CRC unchanged
    assert_eq!(crc::update(0, 0), 0);
    assert_eq!(crc::checksum(&[0, 0, 0, 0]), 0);
}

#[test]
fn test_appending_crc_yields_zero() {
    // Defining property of the FIT CRC: a buffer followed by its own CRC
    // (little-endian) checksums to zero. This is how decoders validate files.
    let data = b"scale2fit weight export";
    let crc_value = crc::checksum(data);

    let mut framed = data.to_vec();
    framed.extend_from_slice(&crc_value.to_le_bytes());
    assert_eq!(crc::checksum(&framed), 0);
}

#[test]
fn test_order_sensitivity() {
    assert_ne!(crc::checksum(&[1, 2, 3]), crc::checksum(&[3, 2, 1]));
}
