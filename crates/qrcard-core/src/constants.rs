/// Media type offered for downloaded records.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";

pub const VCF_EXTENSION: &str = "vcf";
pub const VCF_SUFFIX: &str = const_str::concat!(".", VCF_EXTENSION);

/// Longest name part, in bytes, kept in an export filename.
///
/// Two parts plus `_` and the suffix stay well under the 255-byte limit most
/// filesystems put on a single path component.
pub const MAX_NAME_PART_BYTES: usize = 100;

/// Payload length above which a QR code is likely too dense to scan reliably.
pub const DEFAULT_SCAN_THRESHOLD: usize = 2000;
