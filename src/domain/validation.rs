// src/domain/validation.rs

use crate::domain::query::PropertyQuery;
use rust_decimal::Decimal;
use serde::Serialize;

pub const MIN_PRICE_FIELD: &str = "minPrice";
pub const MAX_PRICE_FIELD: &str = "maxPrice";

/// A field-tagged rejection of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// A query that has passed every rule. Only `validate` builds one, so the
/// filter engine never sees an unchecked query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery(PropertyQuery);

impl ValidatedQuery {
    pub fn query(&self) -> &PropertyQuery {
        &self.0
    }
}

type Rule = fn(&PropertyQuery) -> Option<ValidationError>;

/// Evaluated in this order, every time. The order is also the order of the
/// reported errors.
const RULES: [Rule; 3] = [
    min_price_not_negative,
    max_price_not_negative,
    max_price_not_below_min_price,
];

fn min_price_not_negative(q: &PropertyQuery) -> Option<ValidationError> {
    match q.min_price {
        Some(min) if min < Decimal::ZERO => Some(ValidationError {
            field: MIN_PRICE_FIELD,
            message: "MinPrice must be greater than or equal to 0.".into(),
        }),
        _ => None,
    }
}

fn max_price_not_negative(q: &PropertyQuery) -> Option<ValidationError> {
    match q.max_price {
        Some(max) if max < Decimal::ZERO => Some(ValidationError {
            field: MAX_PRICE_FIELD,
            message: "MaxPrice must be greater than or equal to 0.".into(),
        }),
        _ => None,
    }
}

fn max_price_not_below_min_price(q: &PropertyQuery) -> Option<ValidationError> {
    match (q.min_price, q.max_price) {
        (Some(min), Some(max)) if max < min => Some(ValidationError {
            field: MAX_PRICE_FIELD,
            message: "MaxPrice must be greater than or equal to MinPrice.".into(),
        }),
        _ => None,
    }
}

/// Runs all rules against `query`. On success the query is passed through
/// untouched; otherwise every failure is returned.
pub fn validate(query: PropertyQuery) -> Result<ValidatedQuery, Vec<ValidationError>> {
    let errors: Vec<ValidationError> = RULES.iter().filter_map(|rule| rule(&query)).collect();

    if errors.is_empty() {
        Ok(ValidatedQuery(query))
    } else {
        Err(errors)
    }
}
