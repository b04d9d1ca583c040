pub mod binnav;
pub mod gpstime;

pub use binnav::BinNavDecoder;
pub use core_types::Decoder;
