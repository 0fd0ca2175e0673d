use std::sync::Arc;

use crate::logic::discount::calculate_discount;
use crate::logic::mapping::{map_listing, map_outcome};
use crate::model::{ApiResult, CarId, CarLineItem, CarRecord, DiscountResult, Outcome};
use crate::store::traits::CarStore;

/// Trace-level diagnostics sink handed to the service
pub trait Tracer: Send + Sync {
    fn trace(&self, message: &str);
}

/// Forwards trace messages to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, message: &str) {
        log::trace!("{}", message);
    }
}

/// Car inventory operations on top of a record store
pub struct CarService<S> {
    store: Arc<S>,
    tracer: Arc<dyn Tracer>,
}

impl<S: CarStore> CarService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_tracer(store, Arc::new(LogTracer))
    }

    pub fn with_tracer(store: Arc<S>, tracer: Arc<dyn Tracer>) -> Self {
        Self { store, tracer }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn get_cars(&self) -> Outcome<Vec<CarLineItem>> {
        self.tracer.trace("Starting Get Cars..");
        let cars = self.store.fetch_all().await;
        self.tracer.trace("Completed Get Cars..");

        match map_listing(cars) {
            Outcome::Success(records) => {
                Outcome::Success(records.into_iter().map(CarLineItem::from).collect())
            }
            Outcome::Fail(message) => Outcome::Fail(message),
            Outcome::NoContent => Outcome::NoContent,
        }
    }

    pub async fn add_car(&self, car: CarLineItem) -> ApiResult<CarId> {
        self.tracer.trace("Adding car..");
        map_outcome(self.store.insert(CarRecord::from(car)).await)
    }

    /// Callers must reject non-positive ids before calling this
    pub async fn update_car(&self, car: CarLineItem) -> ApiResult<bool> {
        self.tracer.trace(&format!("Updating car {}..", car.id));
        map_outcome(self.store.update(CarRecord::from(car)).await)
    }

    pub async fn calculate_discount(&self, cars: &[CarLineItem]) -> Outcome<DiscountResult> {
        if cars.is_empty() {
            return Outcome::NoContent;
        }

        self.tracer
            .trace(&format!("Calculating discount for {} cars..", cars.len()));
        match self.store.fetch_all().await {
            Ok(stored) => calculate_discount(cars, &stored),
            Err(e) => Outcome::fail(e.to_string()),
        }
    }
}
