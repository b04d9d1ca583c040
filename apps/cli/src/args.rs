//! Command-line arguments.

use clap::Parser;
use decoders::gpstime;

#[derive(Parser, Debug)]
#[command(author, version, about = "Serial inspector for binary GPS navigation telemetry", long_about = None)]
pub struct Args {
    /// Serial device to listen on (e.g. /dev/ttyUSB0 or COM3).
    #[arg(short, long, default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Baud rate of the link.
    #[arg(short, long, default_value_t = 38_400)]
    pub baud: u32,

    /// GPS week-rollover count applied when deriving calendar time.
    /// Two since April 2019; bump after the ~2038 rollover.
    #[arg(long, default_value_t = gpstime::DEFAULT_ROLLOVER_COUNT)]
    pub rollovers: u32,
}
