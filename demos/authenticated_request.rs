//! Demonstrates the full client flow: generate a demo key pair, mint an RS256
//! token, inspect and verify it, then call both catalog operations against a
//! mock V3 API.
//!
//! The in-process verification below is illustrative only; in production the
//! private key stays with the caller and GroupVAN verifies tokens using the
//! registered public key.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use groupvan_client::{
	auth::{self, DeveloperId, KeyId},
	client::{CatalogListRequest, Client},
	serde_json::json,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let key_pair = auth::generate_key_pair(2_048)?;
	let client = Client::new(
		DeveloperId::new("dev_abc123")?,
		KeyId::new("key_xyz789")?,
		&key_pair.private_key,
	)?;
	let token = client.signer().sign()?;

	println!("Token header: {:?}", auth::decode_header(&token)?);
	println!("Token claims: {:?}", auth::decode_claims_unverified(&token)?);

	let verified = auth::verify(&token, &key_pair.public_key)?;

	println!("Verified issuer: {}.", verified.iss);

	let server = MockServer::start_async().await;
	let get_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalogs/catalog_123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"catalog_123\",\"name\":\"Test Catalog\"}");
		})
		.await;
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/catalogs");
			then.status(200).header("content-type", "application/json").body(
				json!({ "items": [{ "id": "catalog_123", "name": "Test Catalog" }], "total": 1 })
					.to_string(),
			);
		})
		.await;
	let client = client.with_base_url(server.base_url())?;
	let listing = client.list_catalogs(CatalogListRequest::new().with_limit(5)).await?;

	println!("Found {} catalog(s).", listing["total"]);

	let catalog = client.get_catalog("catalog_123").await?;

	println!("Catalog name: {}.", catalog["name"]);

	get_mock.assert_async().await;
	list_mock.assert_async().await;

	Ok(())
}
