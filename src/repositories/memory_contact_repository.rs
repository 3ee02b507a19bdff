use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use crate::repositories::collection::ContactCollection;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Contact repository that keeps every record in process memory.
///
/// Records are lost when the process exits. Writes are serialized by the
/// lock, so the name-uniqueness check and the write happen atomically.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<ContactCollection>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(ContactCollection::from_contacts(contacts)),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.as_slice().to_vec())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        Ok(self.contacts.read().await.find_by_name(name).cloned())
    }

    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        self.contacts.write().await.insert(fields)
    }

    async fn update_by_id(&self, id: ContactId, fields: ContactFields) -> StoreResult<Contact> {
        self.contacts.write().await.update_by_id(id, fields)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        Ok(self.contacts.write().await.delete_by_name(name))
    }
}
