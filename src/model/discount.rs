use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount computed for a batch of cars. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResult {
    /// Percentage points, additive and uncapped
    pub discount_rate: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price_after_discount: Decimal,
}
