use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;

use crate::model::{ApiResult, CarLineItem};

/// Request bodies that carry required fields beyond what deserialization checks
pub trait Validate {
    /// One message per violated field; empty when the body is valid
    fn validation_errors(&self) -> Vec<String>;
}

impl Validate for CarLineItem {
    fn validation_errors(&self) -> Vec<String> {
        self.blank_fields()
            .into_iter()
            .map(|field| format!("{} is required", field))
            .collect()
    }
}

impl Validate for Vec<CarLineItem> {
    fn validation_errors(&self) -> Vec<String> {
        self.iter()
            .enumerate()
            .flat_map(|(index, car)| {
                car.blank_fields()
                    .into_iter()
                    .map(move |field| format!("[{}].{} is required", index, field))
            })
            .collect()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validation_errors(&self) -> Vec<String> {
        self.as_ref().map_or_else(Vec::new, Validate::validation_errors)
    }
}

/// JSON body extractor that answers malformed or incomplete car payloads
/// with a `fail` envelope instead of axum's plain-text rejection.
///
/// - Syntax errors, missing fields and wrong types: 400
/// - Missing `Content-Type: application/json`: 415
/// - Blank required text fields: 400 listing each field
#[derive(Debug, Clone)]
pub struct CarJson<T>(pub T);

pub type BodyRejection = (StatusCode, Json<ApiResult<()>>);

#[async_trait]
impl<T, S> FromRequest<S> for CarJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        let errors = body.validation_errors();
        if !errors.is_empty() {
            log::warn!("Rejected request body: {}", errors.join("; "));
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ApiResult::fail(Some(errors.join("; ")))),
            ));
        }

        Ok(CarJson(body))
    }
}

fn reject_body(rejection: JsonRejection) -> BodyRejection {
    let status = match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };

    log::warn!("Rejected request body: {}", rejection.body_text());
    (status, Json(ApiResult::fail(Some(rejection.body_text()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn car(make: &str, colour: &str) -> CarLineItem {
        CarLineItem {
            id: 1,
            make: make.to_string(),
            model: "Model".to_string(),
            year: 2012,
            country_manufactured: "Italy".to_string(),
            colour: colour.to_string(),
            price: dec!(15000),
        }
    }

    #[test]
    fn test_complete_car_has_no_errors() {
        assert!(car("Fiat", "Red").validation_errors().is_empty());
    }

    #[test]
    fn test_blank_fields_are_reported_per_field() {
        assert_eq!(
            car("", "").validation_errors(),
            vec!["make is required".to_string(), "colour is required".to_string()]
        );
    }

    #[test]
    fn test_batch_errors_carry_the_item_index() {
        let batch = vec![car("Fiat", "Red"), car("Fiat", "  ")];
        assert_eq!(batch.validation_errors(), vec!["[1].colour is required".to_string()]);
    }

    #[test]
    fn test_absent_batch_has_no_errors() {
        let absent: Option<Vec<CarLineItem>> = None;
        assert!(absent.validation_errors().is_empty());

        let present = Some(vec![car("", "Red")]);
        assert_eq!(present.validation_errors(), vec!["[0].make is required".to_string()]);
    }
}
