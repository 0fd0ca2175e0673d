use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::model::{CarId, CarRecord};
use crate::store::traits::{CarStore, StoreResult};
use crate::store::StoreError;

#[derive(Debug)]
struct Inventory {
    cars: BTreeMap<CarId, CarRecord>,
    /// None once every id up to `CarId::MAX` is taken
    next_id: Option<CarId>,
}

/// In-process car store. Ids are handed out sequentially starting at 1.
#[derive(Debug)]
pub struct MemoryStore {
    inventory: RwLock<Inventory>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inventory: RwLock::new(Inventory {
                cars: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Store pre-populated with records that keep their own ids
    pub fn with_cars(cars: impl IntoIterator<Item = CarRecord>) -> Self {
        let cars: BTreeMap<CarId, CarRecord> = cars.into_iter().map(|car| (car.id, car)).collect();
        let next_id = cars.keys().next_back().map_or(Some(1), |id| id.checked_add(1));

        Self {
            inventory: RwLock::new(Inventory { cars, next_id }),
        }
    }

    pub fn len(&self) -> usize {
        self.inventory.read().cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CarStore for MemoryStore {
    async fn fetch_all(&self) -> StoreResult<Vec<CarRecord>> {
        Ok(self.inventory.read().cars.values().cloned().collect())
    }

    async fn insert(&self, mut car: CarRecord) -> StoreResult<CarId> {
        let mut inventory = self.inventory.write();
        let id = inventory.next_id.ok_or(StoreError::IdsExhausted)?;
        inventory.next_id = id.checked_add(1);

        car.id = id;
        inventory.cars.insert(id, car);
        log::debug!("Inserted car {} into memory store", id);

        Ok(id)
    }

    async fn update(&self, car: CarRecord) -> StoreResult<bool> {
        let mut inventory = self.inventory.write();
        let Some(existing) = inventory.cars.get_mut(&car.id) else {
            return Err(StoreError::NotFound(car.id));
        };

        log::debug!("Updated car {} in memory store", car.id);
        *existing = car;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn car(id: CarId, make: &str) -> CarRecord {
        CarRecord {
            id,
            make: make.to_string(),
            model: "Model".to_string(),
            year: 2015,
            country_manufactured: "Germany".to_string(),
            colour: "Black".to_string(),
            price: dec!(12000),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.insert(car(0, "Audi")).await.unwrap();
        let second = store.insert(car(99, "BMW")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);

        let cars = store.fetch_all().await.unwrap();
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[1].id, 2);
        assert_eq!(cars[1].make, "BMW");
    }

    #[tokio::test]
    async fn test_with_cars_continues_after_highest_id() {
        let store = MemoryStore::with_cars(vec![car(12, "Make"), car(4, "Other")]);

        let id = store.insert(car(0, "New")).await.unwrap();
        assert_eq!(id, 13);

        let ids: Vec<CarId> = store.fetch_all().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4, 12, 13]);
    }

    #[tokio::test]
    async fn test_insert_after_last_id_is_exhausted() {
        let store = MemoryStore::with_cars(vec![car(CarId::MAX - 1, "Last")]);

        assert_eq!(store.insert(car(0, "Fits")).await.unwrap(), CarId::MAX);

        let result = store.insert(car(0, "Overflow")).await;
        assert!(matches!(result, Err(StoreError::IdsExhausted)));
        assert_eq!(store.len(), 2);

        let full = MemoryStore::with_cars(vec![car(CarId::MAX, "Max")]);
        assert!(matches!(full.insert(car(0, "Overflow")).await, Err(StoreError::IdsExhausted)));
    }

    #[tokio::test]
    async fn test_update_replaces_existing_record() {
        let store = MemoryStore::with_cars(vec![car(7, "Volvo")]);

        let mut changed = car(7, "Volvo");
        changed.colour = "Silver".to_string();
        changed.price = dec!(11500.99);

        assert!(store.update(changed).await.unwrap());

        let cars = store.fetch_all().await.unwrap();
        assert_eq!(cars[0].colour, "Silver");
        assert_eq!(cars[0].price, dec!(11500.99));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = MemoryStore::new();

        let result = store.update(car(42, "Ghost")).await;
        assert!(matches!(result, Err(StoreError::NotFound(42))));
        assert!(store.is_empty());
    }
}
