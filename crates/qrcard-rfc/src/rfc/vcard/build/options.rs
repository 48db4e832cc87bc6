//! Encoding policy.

use qrcard_core::config::EncodingConfig;
use qrcard_core::types::{Escaping, LineEnding};

/// Controls how field values and line breaks are written.
///
/// The default writes values verbatim, joined with `\n`, without folding.
/// That output is what QR scanners and phone contact importers are given by
/// the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub escaping: Escaping,
    pub line_ending: LineEnding,
    /// Fold content lines longer than 75 octets.
    pub fold_lines: bool,
}

impl EncodeOptions {
    /// Escaped, folded, CRLF-terminated output.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            escaping: Escaping::Rfc,
            line_ending: LineEnding::CrLf,
            fold_lines: true,
        }
    }
}

impl From<&EncodingConfig> for EncodeOptions {
    fn from(config: &EncodingConfig) -> Self {
        Self {
            escaping: config.escaping,
            line_ending: config.line_ending,
            fold_lines: config.fold_lines,
        }
    }
}
