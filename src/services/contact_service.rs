//! Contact service layer.
//!
//! Business logic for listing, creating, editing, and deleting contacts.

use crate::domain::{ContactId, PhoneRegion};
use crate::error::{ServiceError, ServiceResult, StoreError, StoreResult};
use crate::models::{Contact, ContactFields};
use crate::repositories::ContactRepository;
use crate::services::validator::{ContactValidator, FieldError, NameRule};
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts in the book.
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>>;

    /// Look a contact up by its exact name.
    async fn find_contact(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Validate and create a new contact.
    async fn create_contact(&self, fields: ContactFields) -> ServiceResult<Contact>;

    /// Validate and replace the fields of the contact with `id`.
    ///
    /// `old_name` is the name the record had when the edit form was
    /// rendered; keeping it is not treated as a duplicate.
    async fn update_contact(
        &self,
        id: ContactId,
        old_name: &str,
        fields: ContactFields,
    ) -> ServiceResult<Contact>;

    /// Delete the contact named `name`. Deleting a missing name is a no-op.
    ///
    /// Returns whether a contact was removed.
    async fn delete_contact(&self, name: &str) -> StoreResult<bool>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    validator: ContactValidator,
}

impl ContactServiceImpl {
    /// Create a new contact service over `repository`.
    pub fn new(repository: Arc<dyn ContactRepository>, region: PhoneRegion) -> Self {
        let validator = ContactValidator::new(repository.clone(), region);
        Self {
            repository,
            validator,
        }
    }

    /// A store-level duplicate means another request claimed the name
    /// between our check and our write; report it like the pre-check would.
    fn map_write_error(err: StoreError) -> ServiceError {
        match err {
            StoreError::DuplicateName(name) => {
                ServiceError::Validation(FieldError::DuplicateName(name).into())
            }
            other => ServiceError::Store(other),
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        self.repository.find_all().await
    }

    async fn find_contact(&self, name: &str) -> StoreResult<Option<Contact>> {
        tracing::debug!(name = %name, "Looking up contact");
        self.repository.find_by_name(name).await
    }

    async fn create_contact(&self, fields: ContactFields) -> ServiceResult<Contact> {
        let errors = self.validator.validate(&fields, NameRule::Create).await?;
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let contact = self
            .repository
            .insert(fields)
            .await
            .map_err(Self::map_write_error)?;

        tracing::info!(id = %contact.id, name = %contact.name, "Contact created");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: ContactId,
        old_name: &str,
        fields: ContactFields,
    ) -> ServiceResult<Contact> {
        let errors = self
            .validator
            .validate(&fields, NameRule::Update { old_name })
            .await?;
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let contact = self
            .repository
            .update_by_id(id, fields)
            .await
            .map_err(Self::map_write_error)?;

        tracing::info!(id = %contact.id, name = %contact.name, "Contact updated");
        Ok(contact)
    }

    async fn delete_contact(&self, name: &str) -> StoreResult<bool> {
        let removed = self.repository.delete_by_name(name).await?;
        if removed {
            tracing::info!(name = %name, "Contact deleted");
        } else {
            tracing::debug!(name = %name, "Delete requested for unknown contact");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryContactRepository;

    fn service() -> ContactServiceImpl {
        ContactServiceImpl::new(
            Arc::new(InMemoryContactRepository::new()),
            PhoneRegion::Indonesia,
        )
    }

    fn aceng() -> ContactFields {
        ContactFields::new("Aceng", "aceng@gmail.com", "081234567890")
    }

    #[tokio::test]
    async fn test_create_then_list_contains_contact_once() {
        let service = service();
        service.create_contact(aceng()).await.unwrap();

        let all = service.list_contacts().await.unwrap();
        assert_eq!(all.iter().filter(|c| c.name == "Aceng").count(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_leaves_store_unchanged() {
        let service = service();
        let original = service.create_contact(aceng()).await.unwrap();

        let result = service
            .create_contact(ContactFields::new("Aceng", "other@gmail.com", "081298765432"))
            .await;
        match result {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.any(|e| matches!(e, FieldError::DuplicateName(_))));
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        assert_eq!(service.list_contacts().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn test_update_with_unknown_id_is_not_found() {
        let service = service();
        let result = service
            .update_contact(ContactId::generate(), "Aceng", aceng())
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Store(StoreError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_renames_contact() {
        let service = service();
        let created = service.create_contact(aceng()).await.unwrap();

        let updated = service
            .update_contact(
                created.id,
                "Aceng",
                ContactFields::new("Aceng Fikri", "aceng@gmail.com", "081234567890"),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert!(service.find_contact("Aceng").await.unwrap().is_none());
        assert!(service.find_contact("Aceng Fikri").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_store_duplicate_maps_to_validation_error() {
        let err = ContactServiceImpl::map_write_error(StoreError::DuplicateName("Aceng".into()));
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = ContactServiceImpl::map_write_error(StoreError::NotFound("x".into()));
        assert!(matches!(err, ServiceError::Store(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_contact_is_noop() {
        let service = service();
        service.create_contact(aceng()).await.unwrap();

        assert!(!service.delete_contact("Nobody").await.unwrap());
        assert_eq!(service.list_contacts().await.unwrap().len(), 1);
    }
}
