//! Core vCard types.

mod contact;
mod property;
mod record;

pub use contact::{ContactData, PostalAddress, TypedValue};
pub use property::{names, params};
pub use record::{EncodedRecord, ScanDensity};
