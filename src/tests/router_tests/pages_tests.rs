use crate::domain::Catalog;
use crate::router::handle;
use crate::tests::utils::{read_body, read_json};
use astra::Body;
use http::{Method, Request};

#[test]
fn home_page_lists_the_catalog() {
    let catalog = Catalog::seeded();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &catalog).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_body(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("/api/properties"));
    for listing in catalog.listings() {
        assert!(body.contains(&listing.condo_name), "missing {}", listing.condo_name);
    }
}

#[test]
fn health_reports_catalog_size() {
    let catalog = Catalog::seeded();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &catalog).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = read_json(resp);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["listings"], 5);
}
