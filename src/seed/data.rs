use rust_decimal::Decimal;

use crate::model::CarRecord;
use crate::store::traits::{CarStore, StoreResult};

/// Helper function to create a car record; the store assigns the id
fn create_sample_car(
    make: &str,
    model: &str,
    year: i32,
    country_manufactured: &str,
    colour: &str,
    price_cents: i64,
) -> CarRecord {
    CarRecord {
        id: 0,
        make: make.to_string(),
        model: model.to_string(),
        year,
        country_manufactured: country_manufactured.to_string(),
        colour: colour.to_string(),
        price: Decimal::new(price_cents, 2),
    }
}

/// Sample dealership inventory, mixing cars from before and after 2000
pub fn sample_inventory() -> Vec<CarRecord> {
    vec![
        create_sample_car("Toyota", "Corolla", 2019, "Japan", "White", 1_850_000),
        create_sample_car("Ford", "Mustang", 1998, "USA", "Red", 2_200_000),
        create_sample_car("Volkswagen", "Golf", 2015, "Germany", "Grey", 1_125_050),
        create_sample_car("Holden", "Commodore", 2000, "Australia", "Blue", 650_000),
        create_sample_car("BMW", "X5", 2021, "Germany", "Black", 8_999_900),
        create_sample_car("Mazda", "MX-5", 2020, "Japan", "Soul Red", 3_640_000),
    ]
}

/// Insert the sample inventory into `store`, returning how many cars were added
pub async fn load_seed_data<S: CarStore>(store: &S) -> StoreResult<usize> {
    let cars = sample_inventory();
    let count = cars.len();

    for car in cars {
        let id = store.insert(car).await?;
        log::debug!("Seeded car {}", id);
    }

    log::info!("Seeded {} cars", count);
    Ok(count)
}
