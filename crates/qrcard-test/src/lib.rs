//! qrcard - integration test support.
//!
//! Re-exports the workspace crates so integration tests can reach every
//! layer through one dependency.

pub use qrcard_app as app;
pub use qrcard_core::{constants, util};
pub use qrcard_rfc::rfc;
