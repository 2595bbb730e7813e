use crate::domain::Listing;
use maud::{html, Markup};

/// Renders listings as a table, one row per listing, in the given order.
pub fn listing_table(listings: &[Listing]) -> Markup {
    html! {
        @if listings.is_empty() {
            p class="empty" { "No listings." }
        } @else {
            table class="listings" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Price" }
                        th { "City" }
                        th { "District" }
                        th { "Road" }
                        th { "Number" }
                    }
                }
                tbody {
                    @for listing in listings {
                        tr {
                            td { (listing.condo_name) }
                            td { (listing.price.to_string()) }
                            td { (listing.address.city) }
                            td { (listing.address.district) }
                            td { (listing.address.road) }
                            td { (listing.address.number) }
                        }
                    }
                }
            }
        }
    }
}
