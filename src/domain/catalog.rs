// src/domain/catalog.rs

use crate::domain::{Address, Listing};

/// Fixed, ordered set of listings searched by every request.
///
/// Built once before the server starts and then only ever borrowed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// The office buildings the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Listing::new(
                "廣達科技大樓",
                3_000_000_000i64,
                Address::new("台北市", "內湖區", "基湖路", "30號"),
            ),
            Listing::new(
                "松智路101號辦公室",
                2_500_000_000i64,
                Address::new("台北市", "信義區", "松智路", "101號"),
            ),
            Listing::new(
                "富邦南港大樓",
                3_500_000_000i64,
                Address::new("台北市", "南港區", "經貿二路", "188號"),
            ),
            Listing::new(
                "微風台北車站",
                5_000_000_000i64,
                Address::new("台北市", "中正區", "忠孝西路一段", "49號"),
            ),
            Listing::new(
                "三創數位生活園區",
                2_000_000_000i64,
                Address::new("台北市", "南港區", "市民大道六段", "133號"),
            ),
        ])
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
