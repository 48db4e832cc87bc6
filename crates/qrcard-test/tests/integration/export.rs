//! Tests for writing `.vcf` files.

use qrcard_test::app::export::{export_contact, parse_contact};
use qrcard_test::constants::MAX_NAME_PART_BYTES;
use qrcard_test::util::filename::vcf_filename;
use qrcard_test::rfc::vcard::{ContactData, EncodeOptions, ScanDensity};

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn export_form_document_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(dir.path());
    let contact = parse_contact(FORM_DOCUMENT).expect("valid document");

    let outcome = export_contact(&contact, &settings, EncodeOptions::default())
        .await
        .expect("export should succeed");

    assert_eq!(outcome.path, dir.path().join("Jane_Doe.vcf"));
    assert_eq!(outcome.density, ScanDensity::Comfortable);

    let written = tokio::fs::read_to_string(&outcome.path)
        .await
        .expect("file written");
    assert_eq!(written, FORM_RECORD);
}

#[test_log::test(tokio::test)]
async fn export_overwrites_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(dir.path());

    let first = ContactData::new("Jane", "Doe").with_title("Engineer");
    let second = ContactData::new("Jane", "Doe").with_title("Manager");

    export_contact(&first, &settings, EncodeOptions::default())
        .await
        .expect("first export");
    let outcome = export_contact(&second, &settings, EncodeOptions::default())
        .await
        .expect("second export");

    let written = tokio::fs::read_to_string(&outcome.path)
        .await
        .expect("file written");
    assert!(written.contains("TITLE:Manager"));
    assert!(!written.contains("TITLE:Engineer"));
}

#[test_log::test(tokio::test)]
async fn export_keeps_file_inside_output_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(dir.path());
    let contact = ContactData::new("../../etc", "passwd");

    let outcome = export_contact(&contact, &settings, EncodeOptions::default())
        .await
        .expect("export should succeed");

    assert_eq!(outcome.path.parent(), Some(dir.path()));
    assert_eq!(
        outcome.path.file_name().and_then(|n| n.to_str()),
        Some(vcf_filename("../../etc", "passwd").as_str())
    );
}

#[test_log::test(tokio::test)]
async fn export_long_name_writes_capped_filename() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = settings_in(dir.path());
    let document = format!(r#"{{"firstName":"{}","lastName":"Doe"}}"#, "a".repeat(300));
    let contact = parse_contact(&document).expect("valid document");

    let outcome = export_contact(&contact, &settings, EncodeOptions::default())
        .await
        .expect("export should succeed");

    let file_name = outcome
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .expect("utf-8 file name");
    assert_eq!(file_name, format!("{}_Doe.vcf", "a".repeat(MAX_NAME_PART_BYTES)));

    let written = tokio::fs::read_to_string(&outcome.path)
        .await
        .expect("file written");
    assert!(written.contains(&format!("\nN:Doe;{};;;\n", "a".repeat(300))));
}

#[test_log::test(tokio::test)]
async fn export_dense_record_still_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut settings = settings_in(dir.path());
    settings.qr.scan_threshold = 50;

    let outcome = export_contact(
        &ContactData::new("Jane", "Doe").with_notes("a fairly long note that pushes past fifty"),
        &settings,
        EncodeOptions::default(),
    )
    .await
    .expect("export should succeed");

    assert_eq!(outcome.density, ScanDensity::Dense);
    assert!(outcome.path.exists());
}
