// src/domain/query.rs

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The three optional search parameters of a single request.
///
/// Price bounds stay `Option` all the way down: a bound of `Some(0)` is an
/// active filter, `None` is no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, deserialize_with = "exact_price")]
    pub min_price: Option<Decimal>,
    #[serde(default, deserialize_with = "exact_price")]
    pub max_price: Option<Decimal>,
}

impl PropertyQuery {
    /// Keyword to filter on, if one was given and is not blank.
    pub fn active_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }

    /// Field-wise merge where values already set on `self` win.
    pub fn or(self, fallback: PropertyQuery) -> PropertyQuery {
        PropertyQuery {
            keyword: self.keyword.or(fallback.keyword),
            min_price: self.min_price.or(fallback.min_price),
            max_price: self.max_price.or(fallback.max_price),
        }
    }
}

/// Parses a plain decimal price. Values that do not fit a `Decimal` without
/// rounding are refused, so a tiny negative bound can never become zero.
pub fn parse_exact_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str_exact(raw.trim()).ok()
}

/// JSON numbers and numeric strings both go through `parse_exact_price`.
/// `null` and `""` count as absent.
fn exact_price<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(D::Error::custom(format!("expected a price, got {other}")));
        }
    };

    parse_exact_price(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("the value '{raw}' is not a valid price")))
}
