//! In-memory implementation of DataService for development and tests

use crate::core::{DataService, Entity, RecordId};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory data service
///
/// Keeps records in a `Vec` so listing preserves insertion order; lookups are
/// linear scans. Clones share the same underlying collection.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryDataService<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::resource_name_singular(),
                entity.id()
            ));
        }

        records.push(entity.clone());
        Ok(entity)
    }

    async fn get(&self, id: &RecordId) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn update(&self, id: &RecordId, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::resource_name_singular(), id))?;

        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::resource_name_singular(), id))?;

        records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Entity for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn resource_name_singular() -> &'static str {
            "note"
        }

        fn display_name() -> &'static str {
            "Note"
        }

        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: RecordId::new(id),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = InMemoryDataService::new();
        service.create(note("1", "hello")).await.unwrap();

        let found = service.get(&RecordId::new("1")).await.unwrap();
        assert_eq!(found, Some(note("1", "hello")));
        assert_eq!(service.get(&RecordId::new("2")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_rejected() {
        let service = InMemoryDataService::new();
        service.create(note("1", "a")).await.unwrap();
        assert!(service.create(note("1", "b")).await.is_err());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let service = InMemoryDataService::new();
        for id in ["c", "a", "b"] {
            service.create(note(id, id)).await.unwrap();
        }
        let ids: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.id.to_string())
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let service = InMemoryDataService::new();
        service.create(note("1", "a")).await.unwrap();
        service.create(note("2", "b")).await.unwrap();

        service
            .update(&RecordId::new("1"), note("1", "changed"))
            .await
            .unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all, vec![note("1", "changed"), note("2", "b")]);
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let service: InMemoryDataService<Note> = InMemoryDataService::new();
        assert!(service.update(&RecordId::new("9"), note("9", "x")).await.is_err());
    }

    #[tokio::test]
    async fn test_delete() {
        let service = InMemoryDataService::new();
        service.create(note("1", "a")).await.unwrap();
        service.delete(&RecordId::new("1")).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
        assert!(service.delete(&RecordId::new("1")).await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let service = InMemoryDataService::new();
        let other = service.clone();
        service.create(note("1", "a")).await.unwrap();
        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
