//! Contact record formats for qrcard.

pub mod rfc;
