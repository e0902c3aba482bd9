//! `gauchorecords-store` — the persistence gateway.
//!
//! One generic CRUD contract, [`RecordStore`], shared by every entity, with
//! an in-memory implementation (tests/dev) and a Postgres implementation.
//! The gateway is the sole owner of primary-key assignment.

use async_trait::async_trait;
use thiserror::Error;

use gauchorecords_core::{Entity, RecordId};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRecordStore;
pub use postgres::{ensure_schema, PgRecord, PgRecordStore};

/// Persistence gateway operation error.
///
/// Endpoints do not catch these to retry or transform them; they propagate
/// to the HTTP layer as a 5xx.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(#[from] sqlx::Error),

    #[error("storage internal error: {0}")]
    Internal(String),
}

/// Per-entity CRUD surface.
///
/// - `save` assigns an id when the record carries none (not idempotent);
///   with an id present it upserts (idempotent).
/// - `find_by_id` never errors for a missing row; it returns `None`.
/// - `find_all` order is unspecified but stable within a single call.
/// - `delete_by_id` / `exists_by_id` exist for the administrative
///   update/delete surface outside the read/create endpoints.
#[async_trait]
pub trait RecordStore<E: Entity>: Send + Sync {
    async fn save(&self, record: E) -> Result<E, StoreError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<E>, StoreError>;

    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    async fn delete_by_id(&self, id: RecordId) -> Result<(), StoreError>;

    async fn exists_by_id(&self, id: RecordId) -> Result<bool, StoreError>;
}
