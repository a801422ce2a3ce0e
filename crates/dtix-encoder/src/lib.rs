#![warn(clippy::pedantic)]

pub mod error;
pub mod encoder;

pub use encoder::{AccountTrailer, EncodedEvent, EventEncoder, EventTimings};
pub use error::EncodeError;
