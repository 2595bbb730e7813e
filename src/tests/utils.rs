use crate::domain::{validate, Address, Catalog, Listing, PropertyQuery, ValidatedQuery};
use astra::{Body, Response};
use rust_decimal::Decimal;
use std::io::Read;

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

pub fn query(keyword: Option<&str>, min: Option<i64>, max: Option<i64>) -> PropertyQuery {
    PropertyQuery {
        keyword: keyword.map(str::to_string),
        min_price: min.map(dec),
        max_price: max.map(dec),
    }
}

/// Validates a query the test expects to be accepted.
pub fn validated(q: PropertyQuery) -> ValidatedQuery {
    validate(q).unwrap_or_else(|errors| panic!("query unexpectedly rejected: {errors:?}"))
}

pub fn names(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.condo_name.clone()).collect()
}

/// A small catalog with ASCII text, a zero price and a fractional price.
pub fn ascii_catalog() -> Catalog {
    Catalog::new(vec![
        Listing::new("Harbor View Tower", 0i64, Address::new("Taipei City", "Nangang", "Jingmao 2nd Rd", "188")),
        Listing::new(
            "Riverside Loft",
            Decimal::new(1_500_050, 2),
            Address::new("New Taipei", "Banqiao", "Wenhua Rd", "7A"),
        ),
        Listing::new("Garden Court", 42_000i64, Address::new("Taichung", "West", "Harbor Rd", "12")),
    ])
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("Failed to read response body");
    body
}

pub fn read_json(resp: Response) -> serde_json::Value {
    let body = read_body(resp);
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("body is not JSON ({e}): {body}"))
}

pub fn empty_body() -> Body {
    Body::empty()
}
