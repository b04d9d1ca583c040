//! Decoder for the marker-framed binary navigation message.

use std::ops::Range;

use core_types::{DecodeError, Decoder, FixStatus, Frame, NavRecord};

use crate::gpstime;

/// Minimum bytes required to decode every field: 3 marker bytes plus the
/// 59-byte payload.
pub const MIN_MESSAGE_LEN: usize = 62;

// Field layout, big-endian, offsets relative to the message start (the
// first marker byte). This table is the single source of truth; nothing
// else in the workspace hardcodes an offset.
const STATUS: usize = 4;
const LATITUDE: Range<usize> = 5..9;
const LONGITUDE: Range<usize> = 9..13;
const ALTITUDE: Range<usize> = 13..16;
const DELTA_LAT: Range<usize> = 16..18;
const DELTA_LONG: Range<usize> = 18..20;
const DELTA_ALT: Range<usize> = 20..22;
const TIME_OF_WEEK: Range<usize> = 22..25;
const WEEK: Range<usize> = 25..27;
const SATELLITES: usize = 27;
const SNR: Range<usize> = 28..44;
const PRN: Range<usize> = 44..60;
const CHECKSUM: Range<usize> = 60..62;

// Scale factors. The delta scales are suspect: receiver firmware revisions
// have been seen disagreeing on them, and /100 for delta-altitude in
// particular looks wrong in the field. They stay as-is until the vendor's
// ICD settles the question; changing them silently would corrupt anything
// consuming the scaled values.
const DEGREES_SCALE: f64 = 1_000_000.0;
const ALTITUDE_SCALE: f64 = 10.0;
const DELTA_DEGREES_SCALE: f64 = 1_000_000.0;
const DELTA_ALTITUDE_SCALE: f64 = 100.0;

fn be_u16(b: &[u8]) -> u16 {
    u16::from_be_bytes([b[0], b[1]])
}

fn be_i16(b: &[u8]) -> i16 {
    i16::from_be_bytes([b[0], b[1]])
}

fn be_u24(b: &[u8]) -> u32 {
    u32::from_be_bytes([0, b[0], b[1], b[2]])
}

// Sign-extend the 24-bit value through a shift up to the i32 sign bit.
fn be_i24(b: &[u8]) -> i32 {
    ((be_u24(b) << 8) as i32) >> 8
}

fn be_u32(b: &[u8]) -> u32 {
    u32::from_be_bytes([b[0], b[1], b[2], b[3]])
}

/// Decodes the fixed-layout navigation message.
///
/// Frames shorter than [`MIN_MESSAGE_LEN`] are rejected outright; a frame
/// with extra trailing bytes (a false boundary glued two messages together,
/// or vendor padding) still decodes the fixed offsets. The trailing
/// checksum is surfaced but not verified.
pub struct BinNavDecoder {
    rollovers: u32,
}

impl BinNavDecoder {
    /// `rollovers` is the GPS week-rollover count to apply when deriving
    /// calendar time; see [`gpstime::DEFAULT_ROLLOVER_COUNT`].
    pub fn new(rollovers: u32) -> Self {
        Self { rollovers }
    }
}

impl Default for BinNavDecoder {
    fn default() -> Self {
        Self::new(gpstime::DEFAULT_ROLLOVER_COUNT)
    }
}

impl Decoder for BinNavDecoder {
    fn decode(&mut self, frame: &Frame) -> Result<NavRecord, DecodeError> {
        let b = frame.bytes.as_slice();
        if b.len() < MIN_MESSAGE_LEN {
            return Err(DecodeError::Malformed {
                len: b.len(),
                min: MIN_MESSAGE_LEN,
            });
        }

        let raw_status = b[STATUS];
        let status = FixStatus::from_raw(raw_status);

        let time_of_week_s = be_u24(&b[TIME_OF_WEEK]);
        let week = be_u16(&b[WEEK]);

        let mut snr = [0u8; 16];
        snr.copy_from_slice(&b[SNR]);
        let mut prn = [0u8; 16];
        prn.copy_from_slice(&b[PRN]);

        Ok(NavRecord {
            status,
            raw_status,
            latitude_deg: f64::from(be_u32(&b[LATITUDE])) / DEGREES_SCALE,
            longitude_deg: f64::from(be_u32(&b[LONGITUDE])) / DEGREES_SCALE,
            position_valid: status.has_position(),
            altitude_m: f64::from(be_i24(&b[ALTITUDE])) / ALTITUDE_SCALE,
            altitude_valid: status.has_altitude(),
            delta_latitude: f64::from(be_i16(&b[DELTA_LAT])) / DELTA_DEGREES_SCALE,
            delta_longitude: f64::from(be_i16(&b[DELTA_LONG])) / DELTA_DEGREES_SCALE,
            delta_altitude_m: f64::from(be_i16(&b[DELTA_ALT])) / DELTA_ALTITUDE_SCALE,
            time_of_week_s,
            week,
            utc: gpstime::gps_to_utc(week, time_of_week_s, self.rollovers),
            satellites: b[SATELLITES],
            snr,
            prn,
            checksum: [b[CHECKSUM.start], b[CHECKSUM.start + 1]],
        })
    }

    fn id(&self) -> &'static str {
        "binnav"
    }

    fn name(&self) -> &'static str {
        "Binary Navigation"
    }
}
