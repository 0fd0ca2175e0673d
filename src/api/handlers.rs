use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::extractor::CarJson;
use crate::logic::CarService;
use crate::model::{ApiResult, CarId, CarLineItem, DiscountResult, Outcome};
use crate::store::traits::CarStore;

pub type AppState<S> = Arc<CarService<S>>;

pub const MISSING_ID_MESSAGE: &str = "Id is a mandatory field for update";

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

type EnvelopeResponse<T> = Result<Json<ApiResult<T>>, (StatusCode, Json<ApiResult<T>>)>;

// 200 for success, 400 for fail
fn envelope_response<T>(envelope: ApiResult<T>) -> EnvelopeResponse<T> {
    if envelope.is_success() {
        Ok(Json(envelope))
    } else {
        Err((StatusCode::BAD_REQUEST, Json(envelope)))
    }
}

pub async fn get_cars<S: CarStore>(State(service): State<AppState<S>>) -> Response {
    log::info!("GET /api/cars called");

    match service.get_cars().await {
        Outcome::Success(cars) => Json(ApiResult::success(cars)).into_response(),
        Outcome::NoContent => StatusCode::NO_CONTENT.into_response(),
        Outcome::Fail(message) => {
            log::error!("Failed to fetch cars: {}", message.as_deref().unwrap_or("unknown error"));
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResult::<Vec<CarLineItem>>::fail(message)),
            )
                .into_response()
        }
    }
}

pub async fn add_car<S: CarStore>(
    State(service): State<AppState<S>>,
    CarJson(car): CarJson<CarLineItem>,
) -> EnvelopeResponse<CarId> {
    envelope_response(service.add_car(car).await)
}

pub async fn update_car<S: CarStore>(
    State(service): State<AppState<S>>,
    CarJson(car): CarJson<CarLineItem>,
) -> Response {
    if car.id <= 0 {
        log::warn!("Rejected update without id");
        return (StatusCode::BAD_REQUEST, MISSING_ID_MESSAGE).into_response();
    }

    envelope_response(service.update_car(car).await).into_response()
}

pub async fn calculate_discount<S: CarStore>(
    State(service): State<AppState<S>>,
    CarJson(cars): CarJson<Option<Vec<CarLineItem>>>,
) -> Response {
    let cars = cars.unwrap_or_default();

    match service.calculate_discount(&cars).await.into_envelope() {
        Some(envelope) => envelope_response::<DiscountResult>(envelope).into_response(),
        None => {
            log::warn!("Rejected discount request without cars");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}
