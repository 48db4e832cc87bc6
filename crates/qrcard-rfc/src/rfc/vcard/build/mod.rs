//! vCard encoding.
//!
//! ## Usage
//!
//! ```rust
//! use qrcard_rfc::rfc::vcard::{ContactData, EncodeOptions, encode_with};
//!
//! let contact = ContactData::new("Jane", "Doe").with_notes("Met at RustConf; says hi");
//!
//! let record = encode_with(&contact, EncodeOptions::strict());
//! assert!(record.as_str().contains("NOTE:Met at RustConf\\; says hi\r\n"));
//! ```
//!
//! ## Features
//!
//! - Fixed property order with empty fields omitted
//! - Optional text escaping per RFC 2426/6350
//! - Optional line folding at 75 octets (UTF-8 safe)
//! - LF or CRLF line endings

mod encoder;
mod escape;
mod fold;
mod options;

pub use encoder::{encode, encode_with};
pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use options::EncodeOptions;
