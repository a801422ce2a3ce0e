#![warn(clippy::pedantic)]

pub mod error;
pub mod limits;
pub mod layout;
pub mod pubkey;
pub mod enums;
pub mod fields;
pub mod vector;
pub mod mapping;
pub mod event;

pub use enums::{EventStatus, PricingStrategyType, WireEnum};
pub use error::{ErrorKind, TypeError};
pub use event::EventRecord;
pub use limits::DecodeLimits;
pub use mapping::TicketAreaMapping;
pub use pubkey::Pubkey;
