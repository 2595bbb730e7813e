// src/domain/search.rs

use crate::domain::catalog::Catalog;
use crate::domain::listing::Listing;
use crate::domain::validation::ValidatedQuery;

/// Returns the listings matching `query`, in catalog order.
///
/// Each active stage (keyword, minimum price, maximum price) must hold for a
/// listing to be kept. A stage is active only when its field is present, so
/// a bound of zero still filters.
pub fn search<'a>(catalog: &'a Catalog, query: &ValidatedQuery) -> Vec<&'a Listing> {
    let query = query.query();
    let keyword = query.active_keyword().map(str::to_lowercase);

    catalog
        .listings()
        .iter()
        .filter(|listing| match &keyword {
            Some(k) => matches_keyword(listing, k),
            None => true,
        })
        .filter(|listing| query.min_price.map_or(true, |min| listing.price >= min))
        .filter(|listing| query.max_price.map_or(true, |max| listing.price <= max))
        .collect()
}

/// `folded_keyword` must already be lowercase.
fn matches_keyword(listing: &Listing, folded_keyword: &str) -> bool {
    listing
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(folded_keyword))
}
