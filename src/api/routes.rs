use axum::{
    routing::{get, post, put},
    Router,
};

use crate::api::handlers::{self, AppState};
use crate::api::docs;
use crate::store::traits::CarStore;

pub fn create_router<S: CarStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API Documentation
        .route("/docs", get(docs::get_api_docs))
        .route("/docs/openapi.json", get(docs::get_openapi_spec))
        // Car inventory
        .route("/api/cars", get(handlers::get_cars::<S>))
        .route("/api/cars", post(handlers::add_car::<S>))
        .route("/api/cars", put(handlers::update_car::<S>))
        // Discount calculation
        .route("/api/cars/discount", post(handlers::calculate_discount::<S>))
}
