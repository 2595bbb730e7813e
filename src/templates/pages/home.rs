// templates/pages/home.rs

use crate::domain::Catalog;
use crate::templates::{
    components::{card, listing_table},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(catalog: &Catalog) -> Markup {
    desktop_layout(
        "Condo Search",
        html! {
            h1 { "Condo Search" }

            (card("Searching", None, html! {
                p {
                    "Send " code { "POST /api/properties" } " (or GET) with any of "
                    code { "keyword" } ", " code { "minPrice" } " and " code { "maxPrice" }
                    " in the query string, or as a JSON body."
                }
                p {
                    "Example: "
                    code { "/api/properties?keyword=南港&minPrice=3000000000&maxPrice=5000000000" }
                }
            }))

            (card("Catalog", Some(catalog.len()), listing_table(catalog.listings())))
        },
    )
}
