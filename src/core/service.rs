//! Storage trait used by the resource managers

use crate::core::entity::{Entity, RecordId};
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for storing records of one resource type
///
/// Managers depend on this trait only, so the in-memory default can be
/// replaced by a persistent backend without touching validation rules.
/// `list` returns records in insertion order.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Append a new record
    async fn create(&self, entity: T) -> Result<T>;

    /// Get a record by ID
    async fn get(&self, id: &RecordId) -> Result<Option<T>>;

    /// List all records
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing record in place
    async fn update(&self, id: &RecordId, entity: T) -> Result<T>;

    /// Remove a record
    async fn delete(&self, id: &RecordId) -> Result<()>;
}
