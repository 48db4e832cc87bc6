//! Tests for the encoder as seen from a form document.

use qrcard_test::app::export::parse_contact;
use qrcard_test::constants::DEFAULT_SCAN_THRESHOLD;
use qrcard_test::rfc::vcard::{ContactData, EncodeOptions, ScanDensity, encode, encode_with};

use super::helpers::*;

#[test_log::test]
fn form_document_encodes_exactly() {
    let contact = parse_contact(FORM_DOCUMENT).expect("valid document");
    assert_eq!(encode(&contact).as_str(), FORM_RECORD);
}

#[test]
fn partial_document_encodes_missing_fields_as_empty() {
    let contact = parse_contact(r#"{"lastName":"Doe"}"#).expect("valid document");
    assert_eq!(
        encode(&contact).as_str(),
        "BEGIN:VCARD\nVERSION:3.0\nN:Doe;;;;\nFN: Doe\nEND:VCARD"
    );
}

#[test]
fn strict_output_differs_only_in_separators_for_plain_values() {
    let contact = parse_contact(FORM_DOCUMENT).expect("valid document");
    let strict = encode_with(&contact, EncodeOptions::strict());

    // No value needs escaping and no line exceeds 75 octets
    assert_eq!(strict.as_str(), FORM_RECORD.replace('\n', "\r\n"));
}

#[test]
fn record_length_reported_for_scan_threshold() {
    let contact = parse_contact(FORM_DOCUMENT).expect("valid document");
    let record = encode(&contact);

    assert_eq!(record.utf16_len(), FORM_RECORD.len());
    assert_eq!(record.density(DEFAULT_SCAN_THRESHOLD), ScanDensity::Comfortable);

    let long_note = "n".repeat(DEFAULT_SCAN_THRESHOLD);
    let dense = encode(&ContactData::new("Jane", "Doe").with_notes(long_note));
    assert_eq!(dense.density(DEFAULT_SCAN_THRESHOLD), ScanDensity::Dense);
}

#[test]
fn concurrent_encoding_is_consistent() {
    let contact = parse_contact(FORM_DOCUMENT).expect("valid document");

    let records: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| encode(&contact).into_string()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("encoder thread"))
            .collect()
    });

    assert!(records.iter().all(|r| r == FORM_RECORD));
}
