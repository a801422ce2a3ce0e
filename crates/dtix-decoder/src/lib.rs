#![warn(clippy::pedantic)]

pub mod error;
pub mod record;
pub mod decoder;

pub use decoder::{EventDecoder, decode_event};
pub use error::DecodeError;
pub use record::{DecodedEvent, PartialEvent};
