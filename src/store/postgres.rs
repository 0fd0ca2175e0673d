use sqlx::{postgres::PgPoolOptions, postgres::PgRow, PgPool, Row};

use crate::model::{CarId, CarRecord};
use crate::store::traits::{CarStore, StoreResult};
use crate::store::StoreError;

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run the embedded database migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn car_from_row(row: &PgRow) -> CarRecord {
    CarRecord {
        id: row.get("id"),
        make: row.get("make"),
        model: row.get("model"),
        year: row.get("year"),
        country_manufactured: row.get("country_manufactured"),
        colour: row.get("colour"),
        price: row.get("price"),
    }
}

#[async_trait::async_trait]
impl CarStore for PostgresStore {
    async fn fetch_all(&self) -> StoreResult<Vec<CarRecord>> {
        let rows = sqlx::query(
            "SELECT id, make, model, year, country_manufactured, colour, price FROM cars ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(car_from_row).collect())
    }

    async fn insert(&self, car: CarRecord) -> StoreResult<CarId> {
        let row = sqlx::query(
            r#"
            INSERT INTO cars (make, model, year, country_manufactured, colour, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.country_manufactured)
        .bind(&car.colour)
        .bind(car.price)
        .fetch_one(&self.pool)
        .await?;

        let id: CarId = row.get("id");
        log::debug!("Inserted car {} into postgres", id);
        Ok(id)
    }

    async fn update(&self, car: CarRecord) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE cars SET
                make = $2,
                model = $3,
                year = $4,
                country_manufactured = $5,
                colour = $6,
                price = $7,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(car.id)
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.country_manufactured)
        .bind(&car.colour)
        .bind(car.price)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(car.id));
        }

        log::debug!("Updated car {} in postgres", car.id);
        Ok(true)
    }
}
