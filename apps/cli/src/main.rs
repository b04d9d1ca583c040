//! navterm: read marker-framed binary navigation telemetry from a serial
//! link and pretty-print each decoded message.
//!
//! Single-threaded pipeline: poll the transport, feed the chunk to the
//! framer, decode each complete frame, render. A message that fails to
//! decode is logged and skipped; the stream keeps going.

mod args;
mod render;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use core_types::{Decoder, SerialConfig, Transport, TransportError};
use decoders::BinNavDecoder;
use framing::{Framer, MarkerFramer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args = args::Args::parse();
    let config = SerialConfig {
        path: args.port,
        baud_rate: args.baud,
        read_timeout: Duration::from_millis(100),
    };

    if let Err(e) = run(&config, args.rollovers) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn run(config: &SerialConfig, rollovers: u32) -> Result<(), TransportError> {
    let mut transport = transport_native::SerialTransport::open(config)?;
    info!(
        "Listening on {} at {} baud (rollover count {rollovers})",
        config.path, config.baud_rate
    );

    let mut framer = MarkerFramer::new();
    let mut decoder = BinNavDecoder::new(rollovers);

    loop {
        let chunk = transport.read_chunk()?;
        if chunk.is_empty() {
            // Read timeout with nothing pending.
            continue;
        }

        for frame in framer.push(&chunk, timestamp_us()) {
            match decoder.decode(&frame) {
                Ok(record) => print!("{}", render::render(&frame, &record)),
                // Bad message, good stream: drop it and keep consuming.
                Err(e) => warn!("Skipping message: {e}"),
            }
        }
    }
}

fn timestamp_us() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
