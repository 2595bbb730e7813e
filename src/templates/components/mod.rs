pub mod card;
pub mod listing_table;

pub use card::card;
pub use listing_table::listing_table;
