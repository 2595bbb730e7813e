// src/domain/listing.rs

use rust_decimal::Decimal;
use serde::Serialize;

/// Street address of a listing. Every part is free text and takes part in
/// keyword matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub city: String,
    pub district: String,
    pub road: String,
    pub number: String,
}

/// One immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub condo_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub address: Address,
}

impl Listing {
    pub fn new(condo_name: &str, price: impl Into<Decimal>, address: Address) -> Self {
        Self {
            condo_name: condo_name.to_string(),
            price: price.into(),
            address,
        }
    }

    /// The text fields a keyword is matched against, name first.
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            self.condo_name.as_str(),
            self.address.city.as_str(),
            self.address.district.as_str(),
            self.address.road.as_str(),
            self.address.number.as_str(),
        ]
    }
}

impl Address {
    pub fn new(city: &str, district: &str, road: &str, number: &str) -> Self {
        Self {
            city: city.to_string(),
            district: district.to_string(),
            road: road.to_string(),
            number: number.to_string(),
        }
    }
}
