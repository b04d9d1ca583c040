use crate::Framer;
use core_types::Frame;

/// Start-of-message marker for the binary navigation stream.
pub const START_MARKER: [u8; 3] = [0xAA, 0xAA, 0xAA];

/// Buffers input and emits a frame for every span between two marker starts.
///
/// The wire format carries no length prefix and no escaping; a message
/// simply runs from one `AA AA AA` to the next. A message is therefore only
/// known to be complete once the *next* marker arrives, so the last message
/// in the buffer is always held back until more bytes come in. Marker bytes
/// occurring inside payload data produce a false boundary; the format gives
/// us no way to detect that, and downstream consumers have to tolerate the
/// occasional garbled record.
///
/// Nothing is discarded while waiting: on a stream that never contains a
/// marker the buffer grows without bound.
pub struct MarkerFramer {
    buffer: Vec<u8>,
    // Timestamp of the *first byte* currently in the buffer, so a message
    // completed across chunks keeps the timestamp of when it started arriving.
    start_timestamp_us: Option<u64>,
}

impl MarkerFramer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(1024),
            start_timestamp_us: None,
        }
    }

    /// Unconsumed bytes held for the next push: at most one partial message,
    /// or marker-less noise still waiting for a start.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    fn find_marker(&self, from: usize) -> Option<usize> {
        self.buffer[from..]
            .windows(START_MARKER.len())
            .position(|w| w == START_MARKER)
            .map(|i| i + from)
    }
}

impl Default for MarkerFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for MarkerFramer {
    fn push(&mut self, bytes: &[u8], timestamp_us: u64) -> Vec<Frame> {
        if self.buffer.is_empty() {
            self.start_timestamp_us = Some(timestamp_us);
        }
        self.buffer.extend_from_slice(bytes);

        let mut frames = Vec::new();

        let Some(mut pos) = self.find_marker(0) else {
            // No marker anywhere: everything stays buffered.
            return frames;
        };

        // Each marker start closes off the message begun at the previous
        // one. The search resumes past the marker itself so back-to-back
        // markers still delimit (empty-payload) messages correctly.
        while let Some(next) = self.find_marker(pos + START_MARKER.len()) {
            let ts = self.start_timestamp_us.unwrap_or(timestamp_us);
            frames.push(Frame::new_rx(self.buffer[pos..next].to_vec(), ts));
            pos = next;
        }

        if !frames.is_empty() {
            // Drop emitted messages (and any pre-marker noise before the
            // first one). The tail from the last marker onward is the start
            // of a message still in flight.
            self.buffer.drain(..pos);
            self.start_timestamp_us = Some(timestamp_us);
        }

        frames
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.start_timestamp_us = None;
    }

    fn name(&self) -> &'static str {
        "Marker"
    }
}
