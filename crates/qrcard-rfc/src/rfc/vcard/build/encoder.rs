//! Contact to vCard encoding.

use std::borrow::Cow;

use qrcard_core::types::Escaping;

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use super::options::EncodeOptions;
use crate::rfc::vcard::core::{ContactData, EncodedRecord, names, params};

/// Encodes a contact as a vCard 3.0 record with the default options.
///
/// ## Summary
/// Never fails: every field is optional and any string is accepted.
/// Equivalent to `encode_with(contact, EncodeOptions::default())`.
#[must_use]
pub fn encode(contact: &ContactData) -> EncodedRecord {
    encode_with(contact, EncodeOptions::default())
}

/// Encodes a contact as a vCard 3.0 record.
///
/// ## Summary
/// Writes `N` and `FN` unconditionally, then `ORG`, `TITLE`, each `EMAIL`,
/// each `TEL`, `ADR`, `URL` and `NOTE` when their value is non-empty.
/// Email and phone entries with an empty value are skipped along with their
/// label. An address is written when any of its components is non-empty.
#[must_use]
pub fn encode_with(contact: &ContactData, options: EncodeOptions) -> EncodedRecord {
    let mut writer = RecordWriter::new(options);

    writer.push_literal(names::BEGIN, params::VCARD);
    writer.push_literal(names::VERSION, params::VERSION_3);

    // family;given;additional;prefixes;suffixes
    writer.push_structured(
        names::N,
        None,
        &[contact.last_name.as_str(), contact.first_name.as_str(), "", "", ""],
    );
    writer.push_text(
        names::FN,
        None,
        &format!("{} {}", contact.first_name, contact.last_name),
    );

    if !contact.organization.is_empty() {
        writer.push_text(names::ORG, None, &contact.organization);
    }
    if !contact.title.is_empty() {
        writer.push_text(names::TITLE, None, &contact.title);
    }

    for email in contact.emails.iter().filter(|e| !e.value.is_empty()) {
        writer.push_text(names::EMAIL, Some(email.kind.as_str()), &email.value);
    }
    for phone in contact.phones.iter().filter(|p| !p.value.is_empty()) {
        writer.push_text(names::TEL, Some(phone.kind.as_str()), &phone.value);
    }

    if !contact.address.is_empty() {
        let [street, city, state, postal_code, country] = contact.address.components();
        // POBox;Extended;Street;Locality;Region;PostalCode;Country
        writer.push_structured(
            names::ADR,
            Some(params::HOME),
            &["", "", street, city, state, postal_code, country],
        );
    }

    if !contact.website.is_empty() {
        writer.push_uri(names::URL, &contact.website);
    }
    if !contact.notes.is_empty() {
        writer.push_text(names::NOTE, None, &contact.notes);
    }

    writer.push_literal(names::END, params::VCARD);

    writer.finish()
}

/// Accumulates content lines and applies the escaping and folding policy.
struct RecordWriter {
    options: EncodeOptions,
    lines: Vec<String>,
}

impl RecordWriter {
    fn new(options: EncodeOptions) -> Self {
        Self {
            options,
            lines: Vec::with_capacity(16),
        }
    }

    fn value<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match self.options.escaping {
            Escaping::Verbatim => Cow::Borrowed(raw),
            Escaping::Rfc => escape_text(raw),
        }
    }

    /// Writes `NAME[;TYPE=<KIND>]:` into a fresh line buffer.
    fn start_line(&self, name: &str, kind: Option<&str>) -> String {
        let mut line = String::from(name);

        if let Some(kind) = kind {
            let upper = kind.to_uppercase();
            line.push(';');
            line.push_str(params::TYPE);
            line.push('=');

            match self.options.escaping {
                Escaping::Verbatim => line.push_str(&upper),
                Escaping::Rfc => line.push_str(&escape_param_value(&upper)),
            }
        }

        line.push(':');
        line
    }

    fn push_literal(&mut self, name: &str, value: &str) {
        self.lines.push(format!("{name}:{value}"));
    }

    fn push_text(&mut self, name: &str, kind: Option<&str>, value: &str) {
        let mut line = self.start_line(name, kind);
        line.push_str(&self.value(value));
        self.lines.push(line);
    }

    /// URIs are not escaped.
    fn push_uri(&mut self, name: &str, value: &str) {
        let mut line = self.start_line(name, None);
        line.push_str(value);
        self.lines.push(line);
    }

    fn push_structured(&mut self, name: &str, kind: Option<&str>, components: &[&str]) {
        let mut line = self.start_line(name, kind);
        for (i, component) in components.iter().enumerate() {
            if i > 0 {
                line.push(';');
            }
            line.push_str(&self.value(component));
        }
        self.lines.push(line);
    }

    fn finish(self) -> EncodedRecord {
        let separator = self.options.line_ending.as_str();
        let content_lines = self.lines.len();

        let text = if self.options.fold_lines {
            self.lines
                .iter()
                .map(|line| fold_line(line, self.options.line_ending))
                .collect::<Vec<_>>()
                .join(separator)
        } else {
            self.lines.join(separator)
        };

        tracing::trace!(
            content_lines,
            bytes = text.len(),
            escaping = %self.options.escaping,
            "Encoded vCard record"
        );

        EncodedRecord::new(text, content_lines)
    }
}
