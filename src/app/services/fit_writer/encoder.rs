//! FIT message framing and the weight-scale record layout
//!
//! Builds the data section in memory; [`FitEncoder::finish`] prepends the
//! 14-byte header (with its own CRC over the first twelve bytes) and appends
//! the file CRC over everything before it.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::crc;
use crate::app::models::CanonicalField;
use crate::constants::FIT_EPOCH_OFFSET_SECS;

// FIT base type identifiers
const BASE_TYPE_ENUM: u8 = 0x00;
const BASE_TYPE_UINT8: u8 = 0x02;
const BASE_TYPE_UINT16: u8 = 0x84;
const BASE_TYPE_UINT32: u8 = 0x86;
const BASE_TYPE_UINT32Z: u8 = 0x8C;

// Invalid-value sentinels for unpopulated fields
const INVALID_UINT8: u8 = 0xFF;
const INVALID_UINT16: u16 = 0xFFFF;

// Global message numbers
const MESG_FILE_ID: u16 = 0;
const MESG_FILE_CREATOR: u16 = 49;
const MESG_WEIGHT_SCALE: u16 = 30;

// Local message numbers; one definition each, reused for every data message
const LOCAL_FILE_ID: u8 = 0;
const LOCAL_FILE_CREATOR: u8 = 1;
const LOCAL_WEIGHT_SCALE: u8 = 2;

/// Record header bit marking a definition message
const DEFINITION_FLAG: u8 = 0x40;

const HEADER_SIZE: u8 = 14;
/// Protocol 2.0 (major version in the high nibble)
const PROTOCOL_VERSION: u8 = 0x20;
const PROFILE_VERSION: u16 = 2132;

/// file_id contents: weight file, development manufacturer
const FILE_TYPE_WEIGHT: u8 = 9;
const MANUFACTURER_DEVELOPMENT: u16 = 255;
const PRODUCT_ID: u16 = 1;
const SERIAL_NUMBER: u32 = 1;

/// file_creator software version (crate version 0.3.1 -> 31)
const SOFTWARE_VERSION: u16 = 31;

/// Weight-scale message fields, in definition and data order:
/// (field number, size, base type)
const WEIGHT_SCALE_FIELDS: &[(u8, u8, u8)] = &[
    (253, 4, BASE_TYPE_UINT32), // timestamp
    (0, 2, BASE_TYPE_UINT16),   // weight, kg x100
    (1, 2, BASE_TYPE_UINT16),   // percent_fat x100
    (2, 2, BASE_TYPE_UINT16),   // percent_hydration x100
    (4, 2, BASE_TYPE_UINT16),   // bone_mass, kg x100
    (5, 2, BASE_TYPE_UINT16),   // muscle_mass, kg x100
    (7, 2, BASE_TYPE_UINT16),   // basal_met, kcal/day x4
    (10, 1, BASE_TYPE_UINT8),   // metabolic_age, years
    (11, 1, BASE_TYPE_UINT8),   // visceral_fat_rating
    (13, 2, BASE_TYPE_UINT16),  // bmi x10
];

const FILE_ID_FIELDS: &[(u8, u8, u8)] = &[
    (0, 1, BASE_TYPE_ENUM),    // type
    (1, 2, BASE_TYPE_UINT16),  // manufacturer
    (2, 2, BASE_TYPE_UINT16),  // product
    (3, 4, BASE_TYPE_UINT32Z), // serial_number
    (4, 4, BASE_TYPE_UINT32),  // time_created
];

const FILE_CREATOR_FIELDS: &[(u8, u8, u8)] = &[
    (0, 2, BASE_TYPE_UINT16), // software_version
    (1, 1, BASE_TYPE_UINT8),  // hardware_version
];

/// Seconds since the FIT epoch (1989-12-31T00:00:00Z), saturating at zero
/// for pre-epoch timestamps
pub fn fit_timestamp(timestamp: NaiveDateTime) -> u32 {
    (timestamp.and_utc().timestamp() - FIT_EPOCH_OFFSET_SECS).max(0) as u32
}

/// In-memory FIT weight-file encoder
///
/// Messages accumulate in the data section buffer; nothing touches the
/// filesystem until the caller takes the finished bytes.
#[derive(Debug, Default)]
pub struct FitEncoder {
    body: Vec<u8>,
    weight_definition_written: bool,
}

impl FitEncoder {
    /// Create an encoder with an empty data section
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the mandatory file_id message
    pub fn write_file_id(&mut self, time_created: NaiveDateTime) {
        self.write_definition(LOCAL_FILE_ID, MESG_FILE_ID, FILE_ID_FIELDS);
        self.body.push(LOCAL_FILE_ID);
        self.body.push(FILE_TYPE_WEIGHT);
        self.push_u16(MANUFACTURER_DEVELOPMENT);
        self.push_u16(PRODUCT_ID);
        self.push_u32(SERIAL_NUMBER);
        self.push_u32(fit_timestamp(time_created));
    }

    /// Write the file_creator message
    pub fn write_file_creator(&mut self) {
        self.write_definition(LOCAL_FILE_CREATOR, MESG_FILE_CREATOR, FILE_CREATOR_FIELDS);
        self.body.push(LOCAL_FILE_CREATOR);
        self.push_u16(SOFTWARE_VERSION);
        self.body.push(INVALID_UINT8); // hardware_version not applicable
    }

    /// Write one weight-scale data message.
    ///
    /// Only the canonical fields present in `values` are populated; every
    /// other field encodes as the invalid sentinel for its base type, which
    /// downstream decoders treat as absent. The definition message is
    /// emitted once, ahead of the first record.
    pub fn write_weight_scale(
        &mut self,
        timestamp: NaiveDateTime,
        values: &HashMap<CanonicalField, f64>,
    ) {
        if !self.weight_definition_written {
            self.write_definition(LOCAL_WEIGHT_SCALE, MESG_WEIGHT_SCALE, WEIGHT_SCALE_FIELDS);
            self.weight_definition_written = true;
        }

        self.body.push(LOCAL_WEIGHT_SCALE);
        self.push_u32(fit_timestamp(timestamp));
        self.push_scaled_u16(values.get(&CanonicalField::WeightKg), 100.0);
        self.push_scaled_u16(values.get(&CanonicalField::BodyFatPct), 100.0);
        self.push_scaled_u16(values.get(&CanonicalField::BodyWaterPct), 100.0);
        self.push_scaled_u16(values.get(&CanonicalField::BoneMassKg), 100.0);
        self.push_scaled_u16(values.get(&CanonicalField::MuscleMassKg), 100.0);
        self.push_scaled_u16(values.get(&CanonicalField::BasalMetabolicRate), 4.0);
        self.push_scaled_u8(values.get(&CanonicalField::BodyAgeYears));
        self.push_scaled_u8(values.get(&CanonicalField::VisceralFatPct));
        self.push_scaled_u16(values.get(&CanonicalField::Bmi), 10.0);
    }

    /// Close the data section and produce the complete file bytes:
    /// header + data + file CRC
    pub fn finish(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE as usize + self.body.len() + 2);
        out.push(HEADER_SIZE);
        out.push(PROTOCOL_VERSION);
        out.extend_from_slice(&PROFILE_VERSION.to_le_bytes());
        out.extend_from_slice(&(self.body.len() as u32).to_le_bytes());
        out.extend_from_slice(b".FIT");

        let header_crc = crc::checksum(&out[..12]);
        out.extend_from_slice(&header_crc.to_le_bytes());

        out.extend_from_slice(&self.body);

        let file_crc = crc::checksum(&out);
        out.extend_from_slice(&file_crc.to_le_bytes());
        out
    }

    fn write_definition(&mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) {
        self.body.push(local | DEFINITION_FLAG);
        self.body.push(0); // reserved
        self.body.push(0); // architecture: little-endian
        self.body.extend_from_slice(&global.to_le_bytes());
        self.body.push(fields.len() as u8);
        for (number, size, base_type) in fields {
            self.body.push(*number);
            self.body.push(*size);
            self.body.push(*base_type);
        }
    }

    fn push_u16(&mut self, value: u16) {
        self.body.extend_from_slice(&value.to_le_bytes());
    }

    fn push_u32(&mut self, value: u32) {
        self.body.extend_from_slice(&value.to_le_bytes());
    }

    /// Encode an optional value scaled into a u16, invalid sentinel when
    /// absent or out of range
    fn push_scaled_u16(&mut self, value: Option<&f64>, scale: f64) {
        let raw = match value {
            Some(v) => {
                let scaled = (v * scale).round();
                if scaled.is_finite() && (0.0..f64::from(INVALID_UINT16)).contains(&scaled) {
                    scaled as u16
                } else {
                    INVALID_UINT16
                }
            }
            None => INVALID_UINT16,
        };
        self.push_u16(raw);
    }

    fn push_scaled_u8(&mut self, value: Option<&f64>) {
        let raw = match value {
            Some(v) => {
                let scaled = v.round();
                if scaled.is_finite() && (0.0..f64::from(INVALID_UINT8)).contains(&scaled) {
                    scaled as u8
                } else {
                    INVALID_UINT8
                }
            }
            None => INVALID_UINT8,
        };
        self.body.push(raw);
    }
}
