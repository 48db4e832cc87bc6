//! Export filename derivation.
//!
//! ## Summary
//! Builds the suggested filename for a downloaded record from the contact's
//! first and last name. Names are kept as entered except for characters that
//! would break out of a single path component, and overly long names are cut.

use crate::constants::{MAX_NAME_PART_BYTES, VCF_SUFFIX};

/// Replace path separators and control characters with hyphens, then cap the
/// result at [`MAX_NAME_PART_BYTES`] on a character boundary.
///
/// Examples:
/// - "Jane" -> "Jane"
/// - "a/b" -> "a-b"
/// - ".." -> "--"
#[must_use]
pub fn sanitize_component(part: &str) -> String {
    let mut sanitized = String::with_capacity(part.len().min(MAX_NAME_PART_BYTES));
    for c in part.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() {
            '-'
        } else {
            c
        };
        if sanitized.len() + c.len_utf8() > MAX_NAME_PART_BYTES {
            break;
        }
        sanitized.push(c);
    }

    // A bare dot segment would still resolve to a directory
    if sanitized.chars().all(|c| c == '.') && !sanitized.is_empty() {
        "-".repeat(sanitized.len())
    } else {
        sanitized
    }
}

/// Filename offered for the record download: `<first>_<last>.vcf`.
#[must_use]
pub fn vcf_filename(first_name: &str, last_name: &str) -> String {
    format!(
        "{}_{}{VCF_SUFFIX}",
        sanitize_component(first_name),
        sanitize_component(last_name)
    )
}
