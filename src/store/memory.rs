//! In-memory document store backend
//!
//! Insertion-ordered, UUID-keyed. Stands in for an external document
//! database behind the same gateway trait.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::person::{validate, PersonDocument};

use super::{PersonStore, StoreError, StoreResult};

/// In-memory backend for [`PersonStore`].
///
/// Concurrent writers serialize on the lock; overlapping updates to the
/// same record are last-write-wins.
pub struct MemoryStore {
    documents: RwLock<Vec<PersonDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Parses a client-supplied identifier into a store id.
    fn parse_id(id: &str) -> StoreResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| StoreError::InvalidId)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<PersonDocument>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Unknown("lock poisoned".to_string()))?;
        Ok(documents.clone())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<PersonDocument>> {
        let id = Self::parse_id(id)?;
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::Unknown("lock poisoned".to_string()))?;
        Ok(documents.iter().find(|d| d.id == id).cloned())
    }

    async fn create(&self, name: &str, number: &str) -> StoreResult<PersonDocument> {
        validate(name, number)?;

        let document = PersonDocument {
            id: Uuid::new_v4(),
            name: name.to_string(),
            number: number.to_string(),
            revision: 0,
        };

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unknown("lock poisoned".to_string()))?;
        documents.push(document.clone());

        Ok(document)
    }

    async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> StoreResult<Option<PersonDocument>> {
        let id = Self::parse_id(id)?;
        validate(name, number)?;

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unknown("lock poisoned".to_string()))?;

        let Some(document) = documents.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };

        document.name = name.to_string();
        document.number = number.to_string();
        document.revision += 1;

        Ok(Some(document.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        let id = Self::parse_id(id)?;
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::Unknown("lock poisoned".to_string()))?;
        documents.retain(|d| d.id != id);
        Ok(())
    }
}
