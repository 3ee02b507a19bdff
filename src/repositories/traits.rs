use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (in-memory, file-backed, mock).
///
/// Implementations enforce name uniqueness themselves: `insert` and
/// `update_by_id` fail with `StoreError::DuplicateName` when another record
/// already owns the name, checked atomically with the write.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact. Order is unspecified.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve the first contact whose name matches exactly.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Create a new contact, assigning its id.
    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact>;

    /// Replace the name, email, and phone of the contact with `id`.
    async fn update_by_id(&self, id: ContactId, fields: ContactFields) -> StoreResult<Contact>;

    /// Remove the first contact whose name matches exactly.
    ///
    /// Returns whether a contact was removed.
    async fn delete_by_name(&self, name: &str) -> StoreResult<bool>;
}
