use async_trait::async_trait;
use contact_book::domain::ContactId;
use contact_book::error::{StoreError, StoreResult};
use contact_book::models::{Contact, ContactFields};
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data, tracks method calls for verification,
/// and can be switched into a failing mode to simulate an unavailable store.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Add a contact to the mock repository, returning it with its id.
    pub fn add_contact(&self, name: &str, email: &str, phone: &str) -> Contact {
        let contact = Contact::from_fields(
            ContactId::generate(),
            ContactFields::new(name, email, phone),
        );
        self.contacts.lock().unwrap().push(contact.clone());
        contact
    }

    /// Snapshot of every stored contact.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with an I/O error.
    pub fn fail_all_calls(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mock store unavailable",
            )));
        }
        Ok(())
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;
        Ok(self.contacts())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_name")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        self.track_call("insert")?;

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.iter().any(|c| c.name == fields.name) {
            return Err(StoreError::DuplicateName(fields.name));
        }

        let contact = Contact::from_fields(ContactId::generate(), fields);
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update_by_id(&self, id: ContactId, fields: ContactFields) -> StoreResult<Contact> {
        self.track_call("update_by_id")?;

        let mut contacts = self.contacts.lock().unwrap();
        if contacts.iter().any(|c| c.name == fields.name && c.id != id) {
            return Err(StoreError::DuplicateName(fields.name));
        }

        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        contact.apply(fields);
        Ok(contact.clone())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        self.track_call("delete_by_name")?;

        let mut contacts = self.contacts.lock().unwrap();
        match contacts.iter().position(|c| c.name == name) {
            Some(index) => {
                contacts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
