//! qrcard command-line front end.
//!
//! Reads a contact document, encodes it as a vCard and writes the `.vcf`
//! file that a QR code or download button would offer.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
