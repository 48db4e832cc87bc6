//! vCard 3.0 encoding (RFC 2426) for contact QR codes.
//!
//! This module turns a [`ContactData`] collected from a contact form into the
//! line-oriented vCard text that is embedded in a QR code or offered as a
//! `.vcf` download.
//!
//! ## Usage
//!
//! ```rust
//! use qrcard_rfc::rfc::vcard::{ContactData, encode};
//!
//! let contact = ContactData::new("Jane", "Doe").with_email("jane@example.com", "work");
//!
//! let record = encode(&contact);
//! assert_eq!(
//!     record.as_str(),
//!     "BEGIN:VCARD\nVERSION:3.0\nN:Doe;Jane;;;\nFN:Jane Doe\nEMAIL;TYPE=WORK:jane@example.com\nEND:VCARD"
//! );
//! ```
//!
//! ## Output Shape
//!
//! Property order is fixed: `N`, `FN`, `ORG`, `TITLE`, every `EMAIL`, every
//! `TEL`, `ADR`, `URL`, `NOTE`. Empty fields produce no line, except `N` and
//! `FN` which are always written.
//!
//! By default values are written verbatim with `\n` separators. Use
//! [`encode_with`] and [`EncodeOptions::strict`] for escaped, folded, CRLF
//! output.
//!
//! ## Submodules
//!
//! - [`core`] - Input and output types (`ContactData`, `EncodedRecord`, etc.)
//! - [`build`] - Encoding functions and options

pub mod build;
pub mod core;


// Re-export commonly used types
pub use build::{EncodeOptions, encode, encode_with};
pub use self::core::{ContactData, EncodedRecord, PostalAddress, ScanDensity, TypedValue};
