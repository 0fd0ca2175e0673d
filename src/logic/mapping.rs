use std::fmt::Display;

use crate::model::{ApiResult, Outcome};

/// Wrap a store outcome in an envelope: errors become `fail` carrying the
/// error text, values become `success`.
pub fn map_outcome<T, E: Display>(outcome: Result<T, E>) -> ApiResult<T> {
    match outcome {
        Ok(data) => ApiResult::success(data),
        Err(e) => ApiResult::fail(Some(e.to_string())),
    }
}

/// Like [`map_outcome`] for collection reads, where an empty collection means
/// there is nothing to return.
pub fn map_listing<T, E: Display>(outcome: Result<Vec<T>, E>) -> Outcome<Vec<T>> {
    match outcome {
        Ok(items) if items.is_empty() => Outcome::NoContent,
        Ok(items) => Outcome::Success(items),
        Err(e) => Outcome::fail(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultStatus;
    use crate::store::StoreError;

    #[test]
    fn test_failed_insert_maps_to_fail() {
        let envelope = map_outcome::<i32, _>(Err(StoreError::NotFound(9)));

        assert_eq!(envelope.status, ResultStatus::Fail);
        assert_eq!(envelope.message.as_deref(), Some("Car with id 9 not found"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_successful_insert_carries_new_id() {
        let envelope = map_outcome::<_, StoreError>(Ok(10));

        assert_eq!(envelope.status, ResultStatus::Success);
        assert_eq!(envelope.data, Some(10));
    }

    #[test]
    fn test_update_ack_maps_like_insert() {
        let ok = map_outcome::<_, StoreError>(Ok(true));
        assert_eq!(ok.data, Some(true));

        let failed = map_outcome::<bool, _>(Err("connection reset"));
        assert_eq!(failed.status, ResultStatus::Fail);
        assert_eq!(failed.message.as_deref(), Some("connection reset"));
    }

    #[test]
    fn test_empty_listing_is_no_content() {
        assert_eq!(map_listing::<i32, StoreError>(Ok(vec![])), Outcome::NoContent);
        assert_eq!(map_listing::<_, StoreError>(Ok(vec![1, 2])), Outcome::Success(vec![1, 2]));
        assert_eq!(
            map_listing::<i32, _>(Err("pool timed out")),
            Outcome::fail("pool timed out")
        );
    }
}
