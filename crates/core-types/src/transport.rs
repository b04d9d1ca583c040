use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO Error: {0}")]
    Io(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Parameters for opening a serial link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/ttyUSB0` or `COM3`.
    pub path: String,
    /// Symbol rate of the link.
    pub baud_rate: u32,
    /// How long a read may block before returning an empty chunk.
    pub read_timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: "/dev/ttyUSB0".to_string(),
            baud_rate: 38_400,
            read_timeout: Duration::from_millis(100),
        }
    }
}

/// A byte-stream source (serial today; a socket would fit the same seam).
///
/// Implementations block for at most their configured timeout. An empty
/// chunk is a valid no-op, not end-of-stream; the read loop simply polls
/// again.
pub trait Transport: Send {
    /// Read whatever bytes are currently available.
    fn read_chunk(&mut self) -> Result<Vec<u8>, TransportError>;
}
