//! Encoded record output.

use std::fmt;

/// The encoded vCard text, ready for a QR widget or a `.vcf` file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedRecord {
    text: String,
    content_lines: usize,
}

/// Whether a payload is likely to scan reliably once rendered as a QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDensity {
    /// At or below the threshold.
    Comfortable,
    /// Above the threshold; scanners may struggle.
    Dense,
}

impl EncodedRecord {
    pub(crate) fn new(text: String, content_lines: usize) -> Self {
        Self {
            text,
            content_lines,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of content lines, `BEGIN` and `END` included.
    ///
    /// Folded continuations are not counted separately.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content_lines
    }

    /// Length in UTF-8 octets, i.e. the size of the written file.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Length in UTF-16 code units.
    ///
    /// This is the unit the scan-density threshold is measured in.
    #[must_use]
    pub fn utf16_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    /// Returns whether the payload is longer than `threshold`.
    #[must_use]
    pub fn exceeds(&self, threshold: usize) -> bool {
        self.utf16_len() > threshold
    }

    #[must_use]
    pub fn density(&self, threshold: usize) -> ScanDensity {
        if self.exceeds(threshold) {
            ScanDensity::Dense
        } else {
            ScanDensity::Comfortable
        }
    }
}

impl AsRef<str> for EncodedRecord {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<EncodedRecord> for String {
    fn from(record: EncodedRecord) -> Self {
        record.text
    }
}

impl fmt::Display for EncodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
