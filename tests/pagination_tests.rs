//! Integration tests for paginated list operations.
//!
//! Orders and products follow `X-WP-TotalPages`, brands and variations
//! read until an empty page, attribute definitions come back in one
//! response.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use woocommerce_api::rest::resources::{
    Order, OrderListParams, Product, ProductAttributeDef, ProductAttributeDefListParams,
    ProductBrand, ProductVariation,
};
use woocommerce_api::rest::{Context, RestResource};
use woocommerce_api::{ResourceError, RestClient, RestError, WooCommerceConfig};

fn client_for(server: &MockServer) -> RestClient {
    let config = WooCommerceConfig::new(&server.uri(), "ck_test", "cs_test").unwrap();
    RestClient::new(&config).unwrap()
}

fn records(first_id: i64, count: i64) -> Value {
    Value::Array((first_id..first_id + count).map(|id| json!({"id": id})).collect())
}

fn page(body: Value, total_pages: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("X-WP-TotalPages", total_pages)
}

async fn received_queries(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.query().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// X-WP-TotalPages
// ============================================================================

#[tokio::test]
async fn test_pinned_page_sends_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(page(records(11, 10), "5"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = OrderListParams {
        page: Some(2),
        per_page: Some(10),
        ..Default::default()
    };

    let orders = Order::all(&client, Some(params)).await.unwrap();

    assert_eq!(orders.len(), 10);
    assert_eq!(orders[0].id, Some(11));
    assert_eq!(client.api_call_count(), 1);
    assert_eq!(received_queries(&server).await, vec!["page=2&per_page=10"]);
}

#[tokio::test]
async fn test_unpinned_listing_follows_total_pages() {
    let server = MockServer::start().await;

    for (number, first_id) in [("1", 1), ("2", 3), ("3", 5)] {
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v2/orders"))
            .and(query_param("page", number))
            .respond_with(page(records(first_id, 2), "3"))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let orders = Order::all(&client, None).await.unwrap();

    let ids: Vec<i64> = orders.iter().filter_map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(client.api_call_count(), 3);
}

#[tokio::test]
async fn test_listing_keeps_plugin_product_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products"))
        .respond_with(page(
            json!([
                {"id": 1, "type": "simple", "stock_status": "instock"},
                {"id": 2, "type": "subscription", "stock_status": "preorder"}
            ]),
            "1",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = Product::all(&client, None).await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].product_type.as_deref(), Some("subscription"));
    assert_eq!(products[1].stock_status.as_deref(), Some("preorder"));
}

#[tokio::test]
async fn test_single_page_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products"))
        .and(query_param("page", "1"))
        .respond_with(page(records(1, 3), "1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let products = Product::all(&client, None).await.unwrap();

    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_empty_collection_with_zero_total_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .respond_with(page(json!([]), "0"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let orders = Order::all(&client, None).await.unwrap();

    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_missing_total_pages_header_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records(1, 2)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::all(&client, None).await.unwrap_err();

    match error {
        ResourceError::PaginationHeader { header, reason } => {
            assert_eq!(header, "X-WP-TotalPages");
            assert_eq!(reason, "header missing");
        }
        other => panic!("expected PaginationHeader error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_numeric_total_pages_header_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .respond_with(page(records(1, 2), "many"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::all(&client, None).await.unwrap_err();

    assert!(matches!(error, ResourceError::PaginationHeader { .. }));
    assert!(error.to_string().starts_with("Error while retrieving X-WP-TotalPages header"));
    assert!(error.to_string().contains("'many'"));
}

#[tokio::test]
async fn test_failure_mid_listing_discards_fetched_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .and(query_param("page", "1"))
        .respond_with(page(records(1, 2), "3"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "internal_server_error",
            "message": "There has been a critical error on this website.",
            "data": {"status": 500}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::all(&client, None).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::Rest(RestError::Api { status: 500, .. })
    ));
    assert_eq!(client.api_call_count(), 2);
}

#[tokio::test]
async fn test_undecodable_page_reports_field_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/orders"))
        .respond_with(page(json!([{"id": 1}, {"id": 2, "total": [1]}]), "1"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::all(&client, None).await.unwrap_err();

    match error {
        ResourceError::Decode { resource, path, .. } => {
            assert_eq!(resource, "Order");
            assert_eq!(path, "[1].total");
        }
        other => panic!("expected Decode error, got {other:?}"),
    }
}

// ============================================================================
// Until Empty Page
// ============================================================================

#[tokio::test]
async fn test_brands_read_until_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products/brands"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Acme", "slug": "acme", "count": 4},
            {"id": 2, "name": "Globex", "slug": "globex", "count": 0}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products/brands"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let brands = ProductBrand::all(&client, None).await.unwrap();

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[0].name.as_deref(), Some("Acme"));
    assert_eq!(brands[0].count, Some(4));
    assert_eq!(client.api_call_count(), 2);
}

#[tokio::test]
async fn test_variations_read_until_empty_page() {
    let server = MockServer::start().await;

    for (number, body) in [
        ("1", records(731, 2)),
        ("2", records(733, 1)),
        ("3", json!([])),
    ] {
        Mock::given(method("GET"))
            .and(path("/wp-json/wc/v2/products/22/variations"))
            .and(query_param("per_page", "100"))
            .and(query_param("page", number))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let variations = ProductVariation::all_for_product(&client, 22, None)
        .await
        .unwrap();

    let ids: Vec<i64> = variations.iter().filter_map(|v| v.id).collect();
    assert_eq!(ids, vec![731, 732, 733]);
}

#[tokio::test]
async fn test_until_empty_page_ignores_total_pages_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products/brands"))
        .and(query_param("page", "1"))
        .respond_with(page(records(1, 1), "1"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products/brands"))
        .and(query_param("page", "2"))
        .respond_with(page(json!([]), "1"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let brands = ProductBrand::all(&client, None).await.unwrap();

    assert_eq!(brands.len(), 1);
    assert_eq!(client.api_call_count(), 2);
}

// ============================================================================
// Unpaginated
// ============================================================================

#[tokio::test]
async fn test_attribute_definitions_use_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v2/products/attributes"))
        .and(query_param("context", "view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Color", "slug": "pa_color", "type": "select", "order_by": "menu_order", "has_archives": true},
            {"id": 2, "name": "Size", "slug": "pa_size", "type": "select", "order_by": "menu_order", "has_archives": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = ProductAttributeDefListParams {
        context: Some(Context::View),
    };
    let attributes = ProductAttributeDef::all(&client, Some(params)).await.unwrap();

    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].attribute_type.as_deref(), Some("select"));
    assert_eq!(received_queries(&server).await, vec!["context=view"]);
}
