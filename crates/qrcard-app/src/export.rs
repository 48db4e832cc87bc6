//! Contact loading and `.vcf` export.

use std::path::PathBuf;

use qrcard_core::constants::VCARD_MEDIA_TYPE;
use qrcard_core::util::filename::vcf_filename;
use qrcard_core::util::input::require_non_blank;
use qrcard_rfc::rfc::vcard::{ContactData, EncodeOptions, EncodedRecord, ScanDensity, encode_with};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::cli::ContactSource;
use crate::config::Settings;
use crate::error::AppResult;

/// Result of writing a record to disk.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub record: EncodedRecord,
    pub density: ScanDensity,
}

/// ## Summary
/// Parses a contact document as produced by the contact form.
///
/// ## Errors
/// Returns an error if the document is blank or is not valid contact JSON.
pub fn parse_contact(document: &str) -> AppResult<ContactData> {
    let document = require_non_blank(document, "contact document")?;
    Ok(serde_json::from_str(document)?)
}

/// ## Summary
/// Reads and parses the contact document from a file or stdin.
///
/// ## Errors
/// Returns an error if reading fails or the document cannot be parsed.
pub async fn read_contact(source: &ContactSource) -> AppResult<ContactData> {
    let document = match source {
        ContactSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
        ContactSource::File(path) => tokio::fs::read_to_string(path).await?,
    };

    tracing::debug!(source = ?source, bytes = document.len(), "Read contact document");

    parse_contact(&document)
}

/// ## Summary
/// Encodes a contact and logs a warning if the payload is too dense to scan.
#[must_use]
pub fn encode_contact(
    contact: &ContactData,
    options: EncodeOptions,
    scan_threshold: usize,
) -> (EncodedRecord, ScanDensity) {
    let record = encode_with(contact, options);
    let density = record.density(scan_threshold);

    if density == ScanDensity::Dense {
        tracing::warn!(
            length = record.utf16_len(),
            threshold = scan_threshold,
            "Record may be too dense to scan reliably as a QR code"
        );
    }

    (record, density)
}

/// ## Summary
/// Encodes a contact and writes it to `<output.directory>/<first>_<last>.vcf`.
///
/// ## Errors
/// Returns an error if the output directory cannot be created or the file
/// cannot be written.
#[tracing::instrument(skip_all, fields(directory = %settings.output.directory))]
pub async fn export_contact(
    contact: &ContactData,
    settings: &Settings,
    options: EncodeOptions,
) -> AppResult<ExportOutcome> {
    let (record, density) = encode_contact(contact, options, settings.qr.scan_threshold);

    let directory = PathBuf::from(&settings.output.directory);
    tokio::fs::create_dir_all(&directory).await?;

    let path = directory.join(vcf_filename(&contact.first_name, &contact.last_name));
    tokio::fs::write(&path, record.as_str()).await?;

    tracing::info!(
        path = %path.display(),
        media_type = VCARD_MEDIA_TYPE,
        bytes = record.byte_len(),
        lines = record.line_count(),
        "Wrote vCard"
    );

    Ok(ExportOutcome {
        path,
        record,
        density,
    })
}

/// ## Summary
/// Encodes a contact and writes the record to stdout.
///
/// ## Errors
/// Returns an error if writing to stdout fails.
pub async fn print_contact(
    contact: &ContactData,
    settings: &Settings,
    options: EncodeOptions,
) -> AppResult<EncodedRecord> {
    let (record, _density) = encode_contact(contact, options, settings.qr.scan_threshold);

    let mut stdout = tokio::io::stdout();
    stdout.write_all(record.as_str().as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(record)
}
