//! Record collection shared by the store implementations.

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactFields};

/// An ordered collection of contacts with the store's write rules.
#[derive(Debug, Clone, Default)]
pub(crate) struct ContactCollection {
    contacts: Vec<Contact>,
}

impl ContactCollection {
    pub(crate) fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub(crate) fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub(crate) fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    pub(crate) fn insert(&mut self, fields: ContactFields) -> StoreResult<Contact> {
        if self.find_by_name(&fields.name).is_some() {
            return Err(StoreError::DuplicateName(fields.name));
        }

        let contact = Contact::from_fields(ContactId::generate(), fields);
        self.contacts.push(contact.clone());
        Ok(contact)
    }

    pub(crate) fn update_by_id(
        &mut self,
        id: ContactId,
        fields: ContactFields,
    ) -> StoreResult<Contact> {
        if self
            .contacts
            .iter()
            .any(|c| c.name == fields.name && c.id != id)
        {
            return Err(StoreError::DuplicateName(fields.name));
        }

        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contact.apply(fields);
        Ok(contact.clone())
    }

    pub(crate) fn delete_by_name(&mut self, name: &str) -> bool {
        match self.contacts.iter().position(|c| c.name == name) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }
}
