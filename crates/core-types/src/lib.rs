use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod transport;
pub use transport::{SerialConfig, Transport, TransportError};

use std::fmt;

/// Represents the direction of data flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Rx, // Received from device
    Tx, // Sent to device
}

/// A raw chunk of logical data (one marker-delimited message).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// The raw bytes comprising this frame.
    pub bytes: Vec<u8>,
    /// Timestamp in microseconds (relative to session start or epoch).
    pub timestamp_us: u64,
    /// Direction of the frame.
    pub channel: Channel,
}

impl Frame {
    pub fn new_rx(bytes: Vec<u8>, timestamp_us: u64) -> Self {
        Self {
            bytes,
            timestamp_us,
            channel: Channel::Rx,
        }
    }

    pub fn new_tx(bytes: Vec<u8>, timestamp_us: u64) -> Self {
        Self {
            bytes,
            timestamp_us,
            channel: Channel::Tx,
        }
    }
}

/// Quality of the positioning solution reported by the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixStatus {
    /// No usable fix; position and altitude fields carry stale data.
    Unlocked,
    /// Horizontal fix only.
    Fix2d,
    /// Full three-dimensional fix.
    Fix3d,
}

impl FixStatus {
    /// Map the raw status byte: 3 is a 3D fix, 2 is a 2D fix, anything
    /// else is unlocked.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            3 => FixStatus::Fix3d,
            2 => FixStatus::Fix2d,
            _ => FixStatus::Unlocked,
        }
    }

    /// Latitude/longitude are meaningful with at least a 2D fix.
    pub fn has_position(self) -> bool {
        matches!(self, FixStatus::Fix2d | FixStatus::Fix3d)
    }

    /// Altitude is meaningful only with a 3D fix.
    pub fn has_altitude(self) -> bool {
        matches!(self, FixStatus::Fix3d)
    }
}

impl fmt::Display for FixStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FixStatus::Unlocked => "unlocked",
            FixStatus::Fix2d => "2D fix",
            FixStatus::Fix3d => "3D fix",
        };
        f.write_str(s)
    }
}

/// One decoded navigation message.
///
/// Built fresh per frame and immutable afterward. Field validity is carried
/// explicitly (`position_valid`, `altitude_valid`) rather than through
/// sentinel values: the receiver keeps emitting whatever is in its position
/// registers even without a fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavRecord {
    pub status: FixStatus,
    /// Status byte as received, for diagnosing unknown values.
    pub raw_status: u8,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// True when `status` is at least a 2D fix.
    pub position_valid: bool,
    pub altitude_m: f64,
    /// True when `status` is a 3D fix.
    pub altitude_valid: bool,
    pub delta_latitude: f64,
    pub delta_longitude: f64,
    pub delta_altitude_m: f64,
    /// Seconds since the start of the current GPS week.
    pub time_of_week_s: u32,
    /// Week number as transmitted (rollover not yet applied).
    pub week: u16,
    /// Calendar time derived from `week` and `time_of_week_s`.
    pub utc: DateTime<Utc>,
    pub satellites: u8,
    /// Per-channel signal-to-noise readings, wire order preserved.
    pub snr: [u8; 16],
    /// Per-channel satellite PRN numbers, wire order preserved.
    pub prn: [u8; 16],
    /// Trailing checksum bytes as received. Surfaced for inspection, never
    /// verified against a computed value.
    pub checksum: [u8; 2],
}

/// An error decoding one framed message.
///
/// Decode failures are per-message: callers log, drop the frame, and keep
/// consuming the stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Frame too short to hold the full fixed layout. Usually a truncated
    /// tail, or a false boundary from marker bytes inside payload data.
    #[error("Malformed message: got {len} bytes, the fixed layout needs {min}. Check framing or cabling.")]
    Malformed { len: usize, min: usize },
}

/// Trait for converting Frames into structured navigation records.
pub trait Decoder: Send {
    /// Decode one frame, or reject it without producing a partial record.
    fn decode(&mut self, frame: &Frame) -> Result<NavRecord, DecodeError>;

    /// Get the unique name of this decoder (e.g., "binnav").
    fn id(&self) -> &'static str;

    /// Get a human-readable name.
    fn name(&self) -> &'static str;
}
