use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, ContactFields};
use crate::repositories::collection::ContactCollection;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Contact repository persisted as a JSON array on disk.
///
/// The whole collection is held in memory and the file is rewritten after
/// every mutation (written to a sibling temp file, then renamed over the
/// original). A mutation is only applied in memory once the file write has
/// succeeded, so a failed write leaves both copies unchanged.
#[derive(Debug)]
pub struct JsonFileContactRepository {
    path: PathBuf,
    contacts: RwLock<ContactCollection>,
}

impl JsonFileContactRepository {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let contacts = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<Contact>>(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            count = contacts.len(),
            "Opened contact file store"
        );

        Ok(Self {
            path,
            contacts: RwLock::new(ContactCollection::from_contacts(contacts)),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, collection: &ContactCollection) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(collection.as_slice())?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(path = %self.path.display(), "Contact file store written");
        Ok(())
    }

    /// Apply `op` to a copy of the collection, persist it, then commit.
    async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut ContactCollection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut guard = self.contacts.write().await;
        let mut next = guard.clone();
        let result = op(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(result)
    }
}

#[async_trait]
impl ContactRepository for JsonFileContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.as_slice().to_vec())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        Ok(self.contacts.read().await.find_by_name(name).cloned())
    }

    async fn insert(&self, fields: ContactFields) -> StoreResult<Contact> {
        self.mutate(|c| c.insert(fields)).await
    }

    async fn update_by_id(&self, id: ContactId, fields: ContactFields) -> StoreResult<Contact> {
        self.mutate(|c| c.update_by_id(id, fields)).await
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        let removed = {
            let contacts = self.contacts.read().await;
            contacts.find_by_name(name).is_some()
        };
        if !removed {
            return Ok(false);
        }
        self.mutate(|c| Ok(c.delete_by_name(name))).await
    }
}
