use crate::model::{CarId, CarRecord};
use crate::store::StoreError;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Record store holding the authoritative car inventory
#[async_trait::async_trait]
pub trait CarStore: Send + Sync {
    /// Snapshot of every stored car, ordered by id
    async fn fetch_all(&self) -> StoreResult<Vec<CarRecord>>;
    /// Insert a new car and return its assigned id (the record's own id is ignored)
    async fn insert(&self, car: CarRecord) -> StoreResult<CarId>;
    /// Replace the car with the record's id; `StoreError::NotFound` if there is none
    async fn update(&self, car: CarRecord) -> StoreResult<bool>;
}
