//! Contact form data.
//!
//! Field names serialize in camelCase so documents produced by the form
//! (`firstName`, `postalCode`, ...) deserialize directly. Missing fields are
//! treated as empty.

use serde::{Deserialize, Serialize};

/// All fields a contact form collects.
///
/// Every field is optional; an empty string or list simply produces no
/// output line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactData {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
    pub title: String,
    /// Email addresses in display order.
    pub emails: Vec<TypedValue>,
    /// Phone numbers in display order.
    pub phones: Vec<TypedValue>,
    pub address: PostalAddress,
    pub website: String,
    pub notes: String,
}

impl ContactData {
    /// Creates a contact with just a first and last name.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Appends an email entry.
    #[must_use]
    pub fn with_email(mut self, value: impl Into<String>, kind: impl Into<String>) -> Self {
        self.emails.push(TypedValue::new(value, kind));
        self
    }

    /// Appends a phone entry.
    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>, kind: impl Into<String>) -> Self {
        self.phones.push(TypedValue::new(value, kind));
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: PostalAddress) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A value with a free-form label, such as an email tagged "work".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypedValue {
    pub value: String,
    /// Free-form label; not restricted to the registered TYPE values.
    #[serde(rename = "type")]
    pub kind: String,
}

impl TypedValue {
    #[must_use]
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: kind.into(),
        }
    }
}

/// Postal address as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Components in ADR position order: street, city, state, postal code, country.
    #[must_use]
    pub fn components(&self) -> [&str; 5] {
        [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
    }
}
