//! Contact model representing one entry in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A persisted contact.
///
/// `id` is assigned by the store and is immutable; the remaining fields are
/// replaced wholesale by an update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Store-assigned identifier
    pub id: ContactId,

    /// Display name, unique across the book and used as the URL lookup key
    pub name: String,

    /// Email address
    pub email: String,

    /// Mobile phone number
    pub phone: String,
}

impl Contact {
    /// Build a contact from an id and a field set.
    pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
        }
    }

    /// Replace the mutable fields, keeping the id.
    pub fn apply(&mut self, fields: ContactFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
    }

    /// The mutable fields of this contact.
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// The user-editable part of a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
