use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Fail,
}

/// Uniform success/fail wrapper returned by every car operation.
///
/// A `Fail` envelope never carries data; use [`ApiResult::fail`] to build one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub status: ResultStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: ResultStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn fail(message: Option<String>) -> Self {
        Self {
            status: ResultStatus::Fail,
            message,
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResultStatus::Success
    }
}

/// Three-way result of an operation that may have nothing to return.
///
/// `NoContent` means there was nothing to act on (an empty inventory, an
/// empty discount batch). It is deliberately not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    NoContent,
    Fail(Option<String>),
    Success(T),
}

impl<T> Outcome<T> {
    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Fail(Some(message.into()))
    }

    /// Envelope for the outcome; `None` for `NoContent`.
    pub fn into_envelope(self) -> Option<ApiResult<T>> {
        match self {
            Outcome::NoContent => None,
            Outcome::Fail(message) => Some(ApiResult::fail(message)),
            Outcome::Success(data) => Some(ApiResult::success(data)),
        }
    }
}
