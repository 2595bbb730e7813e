// src/request.rs
//
// Turns raw HTTP input into a `PropertyQuery`. Only decoding happens here;
// the domain rules live in `domain::validation`.

use crate::domain::query::parse_exact_price;
use crate::domain::validation::{MAX_PRICE_FIELD, MIN_PRICE_FIELD};
use crate::domain::{PropertyQuery, ValidationError};
use crate::errors::ServerError;
use astra::Request;
use rust_decimal::Decimal;
use std::io::Read;

const KEYWORD_FIELD: &str = "keyword";

/// Builds the query for a search request.
///
/// The query string is always read. A JSON body is read as well when the
/// request declares `application/json`; query string values win over body
/// values for the same field.
pub fn read_property_query(req: &mut Request) -> Result<PropertyQuery, ServerError> {
    let from_url = parse_query_string(req.uri().query().unwrap_or(""))?;

    if !has_json_body(req) {
        return Ok(from_url);
    }

    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read body: {e}")))?;

    Ok(from_url.or(parse_json_body(&body)?))
}

/// Decodes `keyword`, `minPrice` and `maxPrice` from a URL query string.
///
/// Empty values count as absent. The first occurrence of a key wins.
pub fn parse_query_string(query: &str) -> Result<PropertyQuery, ServerError> {
    let mut keyword = None;
    let mut min_raw = None;
    let mut max_raw = None;

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let slot = match &*key {
            KEYWORD_FIELD => &mut keyword,
            MIN_PRICE_FIELD => &mut min_raw,
            MAX_PRICE_FIELD => &mut max_raw,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let mut errors = Vec::new();
    let min_price = parse_price(MIN_PRICE_FIELD, min_raw.as_deref(), &mut errors);
    let max_price = parse_price(MAX_PRICE_FIELD, max_raw.as_deref(), &mut errors);

    if !errors.is_empty() {
        return Err(ServerError::Validation(errors));
    }

    Ok(PropertyQuery {
        keyword,
        min_price,
        max_price,
    })
}

/// Decodes a JSON object body. An empty body is an empty query.
pub fn parse_json_body(body: &[u8]) -> Result<PropertyQuery, ServerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PropertyQuery::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))
}

fn parse_price(
    field: &'static str,
    raw: Option<&str>,
    errors: &mut Vec<ValidationError>,
) -> Option<Decimal> {
    let raw = raw?;

    match parse_exact_price(raw) {
        Some(value) => Some(value),
        None => {
            errors.push(ValidationError {
                field,
                message: format!("The value '{raw}' is not valid for {field}."),
            });
            None
        }
    }
}

fn has_json_body(req: &Request) -> bool {
    req.headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<mime::Mime>().ok())
        .map(|m| m.essence_str() == mime::APPLICATION_JSON.essence_str())
        .unwrap_or(false)
}
