#![warn(clippy::pedantic)]

pub mod cursor;
pub mod diagnostic;
pub mod error;
pub mod writer;

pub use cursor::Cursor;
pub use diagnostic::Diagnostic;
pub use error::WireError;
