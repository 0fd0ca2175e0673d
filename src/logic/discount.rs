//! Discount rule for a batch of cars, reconciled against the stored inventory.
//!
//! Submitted prices are checked against the authoritative records before any
//! discount is granted: a single unknown id, a price mismatch or an id held
//! by several stored records invalidates the whole batch.

use itertools::Itertools;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::model::{CarId, CarLineItem, CarRecord, DiscountResult, Outcome};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid Input Details";
pub const TOTAL_OUT_OF_RANGE_MESSAGE: &str = "Price total out of range";

/// Totals strictly above this earn the high-value bonus
const HIGH_VALUE_TOTAL: i64 = 10_000;
const HIGH_VALUE_BONUS: u32 = 5;
/// Batches with strictly more cars than this earn the multi-car bonus
const MULTI_CAR_COUNT: usize = 2;
const MULTI_CAR_BONUS: u32 = 3;
/// Any car from this year or earlier forfeits the modern-fleet bonus
const LAST_VINTAGE_YEAR: i32 = 2000;
const MODERN_FLEET_BONUS: u32 = 10;

/// Compute the discount for `submitted` cars against the `authoritative` snapshot.
///
/// Returns `NoContent` for an empty batch, `Fail` when the batch does not
/// reconcile, and the computed discount otherwise.
pub fn calculate_discount(
    submitted: &[CarLineItem],
    authoritative: &[CarRecord],
) -> Outcome<DiscountResult> {
    if submitted.is_empty() {
        return Outcome::NoContent;
    }

    let total = match reconciled_total(submitted, authoritative) {
        Ok(total) => total,
        Err(message) => return Outcome::fail(message),
    };

    let discount_rate = discount_rate(total, submitted);

    let discount_amount = percentage_of(total, discount_rate);
    let price_after_discount = discount_amount.and_then(|amount| total.checked_sub(amount));

    match (discount_amount, price_after_discount) {
        (Some(discount_amount), Some(price_after_discount)) => Outcome::Success(DiscountResult {
            discount_rate,
            discount_amount,
            price_after_discount,
        }),
        _ => Outcome::fail(TOTAL_OUT_OF_RANGE_MESSAGE),
    }
}

/// Sum of the submitted prices, provided every car matches a stored record
/// by id and price.
fn reconciled_total(
    submitted: &[CarLineItem],
    authoritative: &[CarRecord],
) -> Result<Decimal, &'static str> {
    let stored_prices: HashMap<CarId, Vec<Decimal>> = authoritative
        .iter()
        .map(|record| (record.id, record.price))
        .into_group_map();

    submitted.iter().try_fold(Decimal::ZERO, |total, car| {
        match stored_prices.get(&car.id).map(Vec::as_slice) {
            Some([price]) if *price == car.price => {
                total.checked_add(*price).ok_or(TOTAL_OUT_OF_RANGE_MESSAGE)
            }
            _ => {
                log::debug!("Car {} does not match the stored inventory", car.id);
                Err(INVALID_INPUT_MESSAGE)
            }
        }
    })
}

fn discount_rate(total: Decimal, submitted: &[CarLineItem]) -> u32 {
    let mut rate = 0;

    if total > Decimal::from(HIGH_VALUE_TOTAL) {
        rate += HIGH_VALUE_BONUS;
    }

    if submitted.len() > MULTI_CAR_COUNT {
        rate += MULTI_CAR_BONUS;
    }

    if !submitted.iter().any(|car| car.year <= LAST_VINTAGE_YEAR) {
        rate += MODERN_FLEET_BONUS;
    }

    rate
}

fn percentage_of(amount: Decimal, rate: u32) -> Option<Decimal> {
    amount
        .checked_mul(Decimal::from(rate))?
        .checked_div(Decimal::ONE_HUNDRED)
}
