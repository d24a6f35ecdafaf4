//! Identifier generation
//!
//! Record identifiers come from an [`IdGenerator`]. The service only needs
//! identifiers to be unique within a collection, so the scheme is pluggable.

use crate::core::entity::{Entity, RecordId};
use crate::core::service::DataService;
use anyhow::{Result, anyhow};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Number of fresh identifiers tried before giving up on a collision
const MAX_ID_ATTEMPTS: usize = 16;

/// Supplier of new record identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> RecordId;
}

/// Random 32-character hex identifiers (UUID v4, simple form)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Monotonic decimal identifiers starting at a given value
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> RecordId {
        RecordId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

/// Draw an identifier that no record in `store` currently uses.
///
/// Seeded records keep the identifiers they were loaded with, so a generator
/// may hand out one that is already taken.
pub async fn fresh_id<T: Entity>(
    ids: &dyn IdGenerator,
    store: &dyn DataService<T>,
) -> Result<RecordId> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = ids.next_id();
        if store.get(&id).await?.is_none() {
            return Ok(id);
        }
        tracing::debug!(%id, entity = T::resource_name_singular(), "generated id already in use");
    }
    Err(anyhow!(
        "could not allocate a free {} id after {} attempts",
        T::resource_name_singular(),
        MAX_ID_ATTEMPTS
    ))
}
