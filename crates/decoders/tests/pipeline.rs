//! Stream-level test: marker framing feeding the binary navigation decoder,
//! with chunk boundaries falling wherever they like.

use core_types::{DecodeError, Decoder, FixStatus, NavRecord};
use decoders::binnav::{BinNavDecoder, MIN_MESSAGE_LEN};
use framing::{Framer, MarkerFramer, START_MARKER};

fn message(status: u8, week: u16) -> Vec<u8> {
    let mut m = vec![0u8; MIN_MESSAGE_LEN];
    m[0..3].copy_from_slice(&START_MARKER);
    m[4] = status;
    m[25..27].copy_from_slice(&week.to_be_bytes());
    m
}

#[test]
fn test_stream_decodes_across_arbitrary_chunks() {
    let mut stream = Vec::new();
    stream.extend_from_slice(&message(3, 100));
    stream.extend_from_slice(&message(2, 101));
    stream.extend_from_slice(&message(0, 102));
    stream.extend_from_slice(&START_MARKER); // closes the last message

    let mut framer = MarkerFramer::new();
    let mut decoder = BinNavDecoder::new(2);
    let mut records: Vec<NavRecord> = Vec::new();

    // Seven-byte chunks land mid-message and mid-marker alike.
    for chunk in stream.chunks(7) {
        for frame in framer.push(chunk, 1000) {
            records.push(decoder.decode(&frame).expect("stream is well-formed"));
        }
    }

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].status, FixStatus::Fix3d);
    assert_eq!(records[0].week, 100);
    assert_eq!(records[1].status, FixStatus::Fix2d);
    assert_eq!(records[1].week, 101);
    assert_eq!(records[2].status, FixStatus::Unlocked);
    assert_eq!(records[2].week, 102);
}

#[test]
fn test_truncated_message_skipped_stream_continues() {
    // A message cut short by a spurious marker must not take the rest of
    // the stream down with it.
    let mut stream = Vec::new();
    stream.extend_from_slice(&message(3, 200));
    stream.extend_from_slice(&START_MARKER);
    stream.extend_from_slice(&[0x11; 20]); // truncated runt
    stream.extend_from_slice(&message(3, 201));
    stream.extend_from_slice(&START_MARKER);

    let mut framer = MarkerFramer::new();
    let mut decoder = BinNavDecoder::new(2);
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for chunk in stream.chunks(16) {
        for frame in framer.push(chunk, 1000) {
            match decoder.decode(&frame) {
                Ok(record) => records.push(record),
                Err(e) => errors.push(e),
            }
        }
    }

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].week, 200);
    assert_eq!(records[1].week, 201);
    assert_eq!(errors, vec![DecodeError::Malformed { len: 23, min: 62 }]);
}
