use thiserror::Error;

use crate::model::CarId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Car with id {0} not found")]
    NotFound(CarId),

    #[error("No car ids left to assign")]
    IdsExhausted,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
