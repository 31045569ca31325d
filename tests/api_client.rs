//! HTTP client integration tests over the mock transport.

mod common;

use admarkt::{HttpMethod, ListingFilters, MarketError};
use common::{wire_listing, wire_user, Harness};
use serde_json::json;

#[tokio::test]
async fn test_single_listing_404_is_absence_not_error() {
    let harness = Harness::new();
    // No route stubbed: the mock answers 404.
    let result = harness.api.listing(7).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_404_is_still_an_error() {
    let harness = Harness::new();
    // 404-as-absence is special-cased for the single fetch only.
    let result = harness.api.listings(&ListingFilters::default()).await;
    assert!(matches!(
        result.unwrap_err(),
        MarketError::Http { status: 404, .. }
    ));
}

#[tokio::test]
async fn test_create_without_credential_fails_locally() {
    let harness = Harness::new();
    let ad = admarkt::NewListing {
        title: "Sofa".to_string(),
        description: "Three seats".to_string(),
        price: Some(50.0),
        category_id: 2,
        city_id: 1,
        image_urls: vec![],
    };

    let result = harness.api.create_listing(&ad).await;

    assert!(matches!(result.unwrap_err(), MarketError::AuthRequired));
    // Fail-fast means no network call was issued at all.
    assert_eq!(harness.http.request_count(), 0);
}

#[tokio::test]
async fn test_error_message_extracted_from_json_body() {
    let harness = Harness::new();
    harness.http.stub_json(
        HttpMethod::Get,
        "/api/cities",
        500,
        json!({ "message": "database is on fire" }),
    );

    let err = harness.api.cities().await.unwrap_err();
    match err {
        MarketError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database is on fire");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generic_error_message_when_body_is_not_json() {
    let harness = Harness::new();
    harness
        .http
        .stub_raw(HttpMethod::Get, "/api/categories", 502, b"<html>".to_vec());

    let err = harness.api.categories().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 502");
}

#[tokio::test]
async fn test_filters_become_query_parameters() {
    let harness = Harness::new();
    harness
        .http
        .stub_json(HttpMethod::Get, "/api/ads", 200, json!([]));

    let filters = ListingFilters {
        city: Some("Berlin".to_string()),
        category: Some("housing".to_string()),
        search: None,
        featured_only: false,
    };
    harness.api.listings(&filters).await.unwrap();

    let requests = harness.http.requests_to("/api/ads");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.contains("city=Berlin&category=housing"));
}

#[tokio::test]
async fn test_all_sentinel_and_featured_flag() {
    let harness = Harness::new();
    harness
        .http
        .stub_json(HttpMethod::Get, "/api/ads", 200, json!([]));

    let filters = ListingFilters {
        city: Some("all".to_string()),
        category: Some("all".to_string()),
        search: None,
        featured_only: true,
    };
    harness.api.listings(&filters).await.unwrap();

    let url = &harness.http.requests_to("/api/ads")[0].url;
    assert!(!url.contains("city="));
    assert!(!url.contains("category="));
    assert!(url.contains("featured=true"));
}

#[tokio::test]
async fn test_bearer_header_attached_when_credential_present() {
    let harness = Harness::signed_in();
    harness
        .http
        .stub_json(HttpMethod::Get, "/api/users/me/ads", 200, json!([]));

    harness.api.my_listings().await.unwrap();

    let requests = harness.http.requests_to("/api/users/me/ads");
    assert_eq!(requests[0].bearer.as_deref(), Some("stored-token"));
}

#[tokio::test]
async fn test_missing_credential_is_not_prechecked_on_reads() {
    let harness = Harness::new();
    harness.http.stub_json(
        HttpMethod::Get,
        "/api/users/me/ads",
        401,
        json!({ "message": "Unauthorized" }),
    );

    // The call goes out without a token; the server's rejection surfaces.
    let err = harness.api.my_listings().await.unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized");
    assert_eq!(harness.http.requests_to("/api/users/me/ads").len(), 1);
}

#[tokio::test]
async fn test_wire_payload_is_normalized_before_decoding() {
    let harness = Harness::new();
    harness
        .http
        .stub_json(HttpMethod::Get, "/api/ads/7", 200, wire_listing(7, "Sofa", Some(50.0)));

    let listing = harness.api.listing(7).await.unwrap().unwrap();

    assert_eq!(listing.title, "Sofa");
    assert!(!listing.is_featured);
    assert_eq!(listing.image_url, "https://img.test/7.jpg");
    assert_eq!(listing.user.full_name, "Sam Seller");
    assert_eq!(listing.city.name, "Berlin");
}

#[tokio::test]
async fn test_create_surfaces_raw_server_text() {
    let harness = Harness::signed_in();
    harness
        .http
        .stub_raw(HttpMethod::Post, "/api/ads", 422, b"title is required".to_vec());

    let ad = admarkt::NewListing {
        title: String::new(),
        description: String::new(),
        price: None,
        category_id: 2,
        city_id: 1,
        image_urls: vec![],
    };
    let err = harness.api.create_listing(&ad).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to create ad: 422 - title is required"
    );
}

#[tokio::test]
async fn test_delete_accepts_204() {
    let harness = Harness::signed_in();
    harness
        .http
        .stub_raw(HttpMethod::Delete, "/api/ads/7", 204, Vec::new());

    assert!(harness.api.delete_listing(7).await.is_ok());
}

#[tokio::test]
async fn test_sync_user_posts_token_and_normalizes() {
    let harness = Harness::new();
    harness.http.stub_json(
        HttpMethod::Post,
        "/api/auth/sync",
        200,
        wire_user("u1", "Ada Lovelace", "https://img.test/ada.png"),
    );

    let user = harness.api.sync_user("id-token").await.unwrap();

    assert_eq!(user.id, "u1");
    assert_eq!(user.full_name, "Ada Lovelace");

    let requests = harness.http.requests_to("/api/auth/sync");
    assert_eq!(requests[0].body, Some(json!({ "token": "id-token" })));
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_network_error() {
    let harness = Harness::new();
    harness.http.set_fail_requests(true);

    let err = harness.api.cities().await.unwrap_err();
    assert!(matches!(err, MarketError::Network(_)));
}
