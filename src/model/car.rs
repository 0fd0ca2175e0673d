use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type CarId = i32;

/// A car as submitted by a caller for create, update and discount requests.
///
/// `id` is 0 (or omitted) for new cars and must be positive for updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarLineItem {
    #[serde(default)]
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub country_manufactured: String,
    pub colour: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// The stored, authoritative version of a car. Owned by the record store.
#[derive(Debug, Clone, PartialEq)]
pub struct CarRecord {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub country_manufactured: String,
    pub colour: String,
    pub price: Decimal,
}

impl CarLineItem {
    /// Names of required text fields that are empty or whitespace only.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("make", &self.make),
            ("model", &self.model),
            ("countryManufactured", &self.country_manufactured),
            ("colour", &self.colour),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl From<CarLineItem> for CarRecord {
    fn from(item: CarLineItem) -> Self {
        Self {
            id: item.id,
            make: item.make,
            model: item.model,
            year: item.year,
            country_manufactured: item.country_manufactured,
            colour: item.colour,
            price: item.price,
        }
    }
}

impl From<CarRecord> for CarLineItem {
    fn from(record: CarRecord) -> Self {
        Self {
            id: record.id,
            make: record.make,
            model: record.model,
            year: record.year,
            country_manufactured: record.country_manufactured,
            colour: record.colour,
            price: record.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_item_accepts_camel_case_and_missing_id() {
        let json = r#"{
            "make": "Toyota",
            "model": "Corolla",
            "year": 2019,
            "countryManufactured": "Japan",
            "colour": "White",
            "price": 18500.50
        }"#;

        let item: CarLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 0);
        assert_eq!(item.country_manufactured, "Japan");
        assert_eq!(item.price, dec!(18500.50));
    }

    #[test]
    fn test_line_item_price_keeps_exact_digits() {
        let item = CarLineItem {
            id: 3,
            make: "Mazda".to_string(),
            model: "MX-5".to_string(),
            year: 2020,
            country_manufactured: "Japan".to_string(),
            colour: "Red".to_string(),
            price: dec!(0.10),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"].to_string(), "0.10");
        assert_eq!(value["countryManufactured"], "Japan");
    }

    #[test]
    fn test_line_item_missing_required_field_is_rejected() {
        let json = r#"{"id": 1, "make": "Ford", "year": 2001, "countryManufactured": "USA", "colour": "Blue", "price": 1}"#;
        assert!(serde_json::from_str::<CarLineItem>(json).is_err());
    }

    #[test]
    fn test_blank_fields_lists_each_empty_text_field() {
        let item = CarLineItem {
            id: 0,
            make: " ".to_string(),
            model: "Golf".to_string(),
            year: 2015,
            country_manufactured: String::new(),
            colour: "Grey".to_string(),
            price: dec!(9000),
        };

        assert_eq!(item.blank_fields(), vec!["make", "countryManufactured"]);
    }

    #[test]
    fn test_record_conversion_is_field_for_field() {
        let item = CarLineItem {
            id: 12,
            make: "Make".to_string(),
            model: "Model".to_string(),
            year: 2010,
            country_manufactured: "CountryManufactured".to_string(),
            colour: "Colour".to_string(),
            price: dec!(1000),
        };

        let record = CarRecord::from(item.clone());
        assert_eq!(record.id, 12);
        assert_eq!(record.price, dec!(1000));
        assert_eq!(CarLineItem::from(record), item);
    }
}
