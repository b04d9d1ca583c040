//! Native serial port transport.
//!
//! A thin blocking wrapper over [`serialport`], implementing the
//! [`Transport`] seam for the read loop. There is no algorithmic content
//! here: open a device, hand back whatever bytes are waiting, map a read
//! timeout to an empty chunk.

use std::io::{self, Read};

use core_types::{SerialConfig, Transport, TransportError};
use serialport::SerialPort;

/// Blocking serial transport. Reads return within the configured timeout.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    /// Open `config.path` at `config.baud_rate` (8N1, no flow control).
    pub fn open(config: &SerialConfig) -> Result<Self, TransportError> {
        let port = serialport::new(&config.path, config.baud_rate)
            .timeout(config.read_timeout)
            .open()
            .map_err(|e| {
                TransportError::ConnectionFailed(format!(
                    "Failed to open {} at {} baud: {e}. Check the device path and permissions.",
                    config.path, config.baud_rate
                ))
            })?;
        Ok(Self { port })
    }
}

impl Transport for SerialTransport {
    fn read_chunk(&mut self) -> Result<Vec<u8>, TransportError> {
        let mut buf = [0u8; 4096];
        match self.port.read(&mut buf) {
            Ok(n) => Ok(buf[..n].to_vec()),
            // Nothing arrived within the timeout; the loop polls again.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(TransportError::Io(e.to_string())),
        }
    }
}
