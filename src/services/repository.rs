use crate::models::payment::PaymentDetail;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keyed store of payment details: upsert-by-id, get-by-id. The backing
/// store can be swapped (in-memory map, embedded KV store, external service)
/// without touching the gateway; the error channel exists for the
/// network-backed implementations.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Stores or overwrites the record keyed by `detail.id`.
    async fn upsert(&self, detail: PaymentDetail) -> Result<(), StorageError>;

    async fn get(&self, id: Uuid) -> Result<Option<PaymentDetail>, StorageError>;
}

#[async_trait]
impl<R: PaymentRepository + ?Sized> PaymentRepository for Arc<R> {
    async fn upsert(&self, detail: PaymentDetail) -> Result<(), StorageError> {
        (**self).upsert(detail).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<PaymentDetail>, StorageError> {
        (**self).get(id).await
    }
}

/// Last-write-wins per id; each stored record is fully formed or absent,
/// never partially written.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    details: DashMap<Uuid, PaymentDetail>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentRepository for InMemoryRepository {
    async fn upsert(&self, detail: PaymentDetail) -> Result<(), StorageError> {
        self.details.insert(detail.id, detail);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<PaymentDetail>, StorageError> {
        Ok(self.details.get(&id).map(|entry| entry.clone()))
    }
}
