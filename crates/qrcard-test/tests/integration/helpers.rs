//! Shared helpers for integration tests.

use std::path::Path;

use qrcard_test::app::config::Settings;

/// A contact document as the form would submit it.
pub const FORM_DOCUMENT: &str = r#"{
    "firstName": "Jane",
    "lastName": "Doe",
    "organization": "Example Corp",
    "title": "Engineer",
    "emails": [
        {"value": "jane@example.com", "type": "work"},
        {"value": "", "type": "home"}
    ],
    "phones": [
        {"value": "+1 555 0100", "type": "cell"}
    ],
    "address": {
        "street": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "postalCode": "62701",
        "country": "USA"
    },
    "website": "https://example.com",
    "notes": "Met at the conference"
}"#;

pub const FORM_RECORD: &str = "\
BEGIN:VCARD\n\
VERSION:3.0\n\
N:Doe;Jane;;;\n\
FN:Jane Doe\n\
ORG:Example Corp\n\
TITLE:Engineer\n\
EMAIL;TYPE=WORK:jane@example.com\n\
TEL;TYPE=CELL:+1 555 0100\n\
ADR;TYPE=HOME:;;1 Main St;Springfield;IL;62701;USA\n\
URL:https://example.com\n\
NOTE:Met at the conference\n\
END:VCARD";

/// Default settings writing into `dir`.
pub fn settings_in(dir: &Path) -> Settings {
    let mut settings = Settings::defaults().expect("defaults should deserialize");
    settings.output.directory = dir.to_string_lossy().into_owned();
    settings
}
