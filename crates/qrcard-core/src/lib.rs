//! Shared building blocks for the qrcard workspace.
//!
//! Configuration loading, error types, export constants and the small
//! encoding-policy enums that both the encoder and the app agree on.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod util;
