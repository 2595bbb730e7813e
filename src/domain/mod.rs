pub mod catalog;
pub mod listing;
pub mod query;
pub mod search;
pub mod validation;

pub use catalog::Catalog;
pub use listing::{Address, Listing};
pub use query::PropertyQuery;
pub use search::search;
pub use validation::{validate, ValidatedQuery, ValidationError};
