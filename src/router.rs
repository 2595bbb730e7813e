use crate::domain::{search, validate, Catalog, ValidatedQuery};
use crate::errors::ServerError;
use crate::request::read_property_query;
use crate::responses::{html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;
use serde_json::json;

pub fn handle(mut req: Request, catalog: &Catalog) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page(catalog)),
        ("GET", "/health") => json_response(&json!({
            "status": "ok",
            "listings": catalog.len(),
        })),
        ("GET", "/api/properties") | ("POST", "/api/properties") => {
            search_properties(&mut req, catalog)
        }
        (_, "/" | "/health" | "/api/properties") => Err(ServerError::MethodNotAllowed),
        _ => Err(ServerError::NotFound),
    }
}

/// Decode, validate, then filter. Validation failures short-circuit before
/// the catalog is touched.
fn search_properties(req: &mut Request, catalog: &Catalog) -> ResultResp {
    let query = read_property_query(req)?;
    tracing::debug!(?query, "search query");

    let validated: ValidatedQuery = validate(query).map_err(|errors| {
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        tracing::warn!(?fields, "search query rejected");
        ServerError::Validation(errors)
    })?;

    let results = search(catalog, &validated);
    tracing::info!(count = results.len(), "search complete");

    json_response(&results)
}
