//! Presence checks on raw input.

use crate::error::{CoreError, CoreResult};

/// Rejects a document that holds nothing but whitespace.
///
/// ## Errors
/// Returns `CoreError::InvalidInput` naming `what` when the document is blank.
pub fn require_non_blank<'a>(document: &'a str, what: &str) -> CoreResult<&'a str> {
    if document.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{what} is empty")));
    }
    Ok(document)
}
