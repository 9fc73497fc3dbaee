mod common;

// crates.io
use httpmock::prelude::*;
// self
use crate::common::*;
use groupvan_client::{
	client::CatalogListRequest,
	error::{ApiError, Error},
	serde_json::json,
};

#[tokio::test]
async fn get_catalog_returns_parsed_body_unchanged() {
	let server = MockServer::start_async().await;
	let key_pair = test_key_pair();
	let client = build_test_client(&key_pair, &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalogs/catalog_123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"catalog_123\",\"name\":\"Test Catalog\"}");
		})
		.await;
	let catalog = client
		.get_catalog("catalog_123")
		.await
		.expect("Fetch-by-id against a 200 response should succeed.");

	assert_eq!(catalog, json!({ "id": "catalog_123", "name": "Test Catalog" }));

	mock.assert_async().await;
}

#[tokio::test]
async fn get_catalog_maps_not_found_to_api_error() {
	let server = MockServer::start_async().await;
	let key_pair = test_key_pair();
	let client = build_test_client(&key_pair, &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalogs/invalid_catalog");
			then.status(404).body("Catalog not found");
		})
		.await;
	let err = client
		.get_catalog("invalid_catalog")
		.await
		.expect_err("A 404 response must surface as an API error.");
	let message = err.to_string();

	assert!(message.contains("404"), "Message should carry the status code: {message}");
	assert!(
		message.contains("Failed to get catalog"),
		"Message should carry the operation context: {message}",
	);
	assert!(matches!(
		err,
		Error::Api(ApiError::Status { status: 404, .. })
	));

	mock.assert_async().await;
}

#[tokio::test]
async fn list_catalogs_forwards_pagination_exactly() {
	let server = MockServer::start_async().await;
	let key_pair = test_key_pair();
	let client = build_test_client(&key_pair, &server.base_url());
	let body = json!({
		"items": [
			{ "id": "catalog_1", "name": "Catalog 1" },
			{ "id": "catalog_2", "name": "Catalog 2" },
		],
		"total": 2,
	});
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/catalogs")
				.query_param("limit", "10")
				.query_param("offset", "0");
			then.status(200).header("content-type", "application/json").body(body.to_string());
		})
		.await;
	let listing = client
		.list_catalogs(CatalogListRequest::new())
		.await
		.expect("Listing against a 200 response should succeed.");

	assert_eq!(listing, body);
	assert_eq!(listing["items"].as_array().map(Vec::len), Some(2));
	assert_eq!(listing["total"], 2);

	mock.assert_async().await;
}

#[tokio::test]
async fn list_catalogs_forwards_custom_pagination() {
	let server = MockServer::start_async().await;
	let key_pair = test_key_pair();
	let client = build_test_client(&key_pair, &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/catalogs")
				.query_param("limit", "5")
				.query_param("offset", "20");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"items\":[],\"total\":0}");
		})
		.await;
	let listing = client
		.list_catalogs(CatalogListRequest::new().with_limit(5).with_offset(20))
		.await
		.expect("Listing with custom pagination should succeed.");

	assert_eq!(listing, json!({ "items": [], "total": 0 }));

	mock.assert_async().await;
}

#[tokio::test]
async fn list_catalogs_maps_server_failure_to_api_error() {
	let server = MockServer::start_async().await;
	let key_pair = test_key_pair();
	let client = build_test_client(&key_pair, &server.base_url());
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalogs");
			then.status(500).body("upstream exploded");
		})
		.await;
	let err = client
		.list_catalogs(CatalogListRequest::new())
		.await
		.expect_err("A 500 response must surface as an API error.");
	let message = err.to_string();

	assert!(message.contains("500"));
	assert!(message.contains("Failed to list catalogs"));
	assert!(message.contains("upstream exploded"));

	mock.assert_async().await;
}
