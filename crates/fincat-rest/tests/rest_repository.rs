//! Mock service tests for the REST repository.
//!
//! These tests use wiremock to simulate the product backend and exercise the
//! repository's behavior without requiring network access or a real service.

use chrono::NaiveDate;
use fincat_core::{CatalogUrl, Product, ProductId, ProductRepository};
use fincat_rest::RestRepository;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a catalog URL from a mock server.
fn mock_catalog_url(server: &MockServer) -> CatalogUrl {
    // For tests, we need to allow HTTP localhost
    CatalogUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

/// Helper to build the wire representation of a product.
fn product_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "description": "A financial product used in tests",
        "logo": "https://assets.example.com/logo.png",
        "date_release": "2025-06-01",
        "date_revision": "2026-06-01"
    })
}

/// Helper to build the domain-side counterpart of [`product_json`].
fn product(id: &str, name: &str) -> Product {
    Product::new(
        ProductId::new(id).unwrap(),
        name,
        "A financial product used in tests",
        "https://assets.example.com/logo.png",
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    )
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_list_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                product_json("trj-crd", "Tarjeta de credito"),
                product_json("cta-aho", "Cuenta de ahorros")
            ]
        })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let products = repository.list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id.as_str(), "trj-crd");
    assert_eq!(
        products[1].release_date,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    );
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let products = repository.list().await.unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_accepts_timestamp_dates() {
    let server = MockServer::start().await;

    let mut wire = product_json("trj-crd", "Tarjeta de credito");
    wire["date_release"] = json!("2025-06-01T00:00:00.000Z");
    wire["date_revision"] = json!("2026-06-01T00:00:00.000Z");

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [wire] })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let products = repository.list().await.unwrap();

    assert_eq!(
        products[0].release_date,
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    );
}

#[tokio::test]
async fn test_get_product_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products/trj-crd"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_json("trj-crd", "Tarjeta de credito")),
        )
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let id = ProductId::new("trj-crd").unwrap();
    let found = repository.get_by_id(&id).await.unwrap();

    assert_eq!(found.name, "Tarjeta de credito");
    assert_eq!(
        found.revision_date,
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    );
}

#[tokio::test]
async fn test_get_missing_product() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products/unknown-id"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let id = ProductId::new("unknown-id").unwrap();
    let err = repository.get_by_id(&id).await.unwrap_err();

    assert_eq!(err.message(), "The requested product was not found.");
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_create_product() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bp/products"))
        .and(body_json(product_json("trj-crd", "Tarjeta de credito")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": product_json("trj-crd", "Tarjeta de credito")
        })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let created = repository
        .create(&product("trj-crd", "Tarjeta de credito"))
        .await
        .unwrap();

    assert_eq!(created.id.as_str(), "trj-crd");
}

#[tokio::test]
async fn test_create_surfaces_service_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Duplicate product identifier"
        })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let err = repository
        .create(&product("trj-crd", "Tarjeta de credito"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Duplicate product identifier");
}

#[tokio::test]
async fn test_create_rejected_without_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let err = repository
        .create(&product("trj-crd", "Tarjeta de credito"))
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "The product data was rejected by the service."
    );
}

#[tokio::test]
async fn test_update_product() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/bp/products/trj-crd"))
        .and(body_json(product_json("trj-crd", "Tarjeta renovada")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": product_json("trj-crd", "Tarjeta renovada")
        })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let id = ProductId::new("trj-crd").unwrap();
    let updated = repository
        .update(&id, &product("trj-crd", "Tarjeta renovada"))
        .await
        .unwrap();

    assert_eq!(updated.name, "Tarjeta renovada");
}

#[tokio::test]
async fn test_delete_product() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/bp/products/trj-crd"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let id = ProductId::new("trj-crd").unwrap();

    assert!(repository.delete(&id).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_product() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/bp/products/unknown-id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Product not found in catalog"
        })))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let id = ProductId::new("unknown-id").unwrap();
    let err = repository.delete(&id).await.unwrap_err();

    assert_eq!(err.message(), "Product not found in catalog");
}

// ============================================================================
// Verification Tests
// ============================================================================

#[tokio::test]
async fn test_verify_existing_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products/verification/trj-crd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));

    assert!(repository.verify_id_exists("trj-crd").await.unwrap());
}

#[tokio::test]
async fn test_verify_available_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products/verification/nuevo-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(false)))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));

    assert!(!repository.verify_id_exists("nuevo-id").await.unwrap());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let err = repository.list().await.unwrap_err();

    // Should fall back to the status-based message
    assert!(err.message().contains("500"), "got: {}", err.message());
}

#[tokio::test]
async fn test_empty_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let err = repository.list().await.unwrap_err();

    assert!(err.message().contains("503"), "got: {}", err.message());
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bp/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let repository = RestRepository::new(mock_catalog_url(&server));
    let err = repository.list().await.unwrap_err();

    assert!(
        err.message().contains("unreadable response"),
        "got: {}",
        err.message()
    );
}
