//! Authenticated request dispatcher and catalog convenience operations.

// crates.io
use reqwest::{
	Method,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::{DeveloperId, KeyId, PrivateKeyPem, TokenSigner},
	error::{ApiError, ConfigError, TransportError},
	http::{ApiHttpClient, ApiResponse},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Default production base URL of the V3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.groupvan.com/v3";

/// Pagination parameters for [`Client::list_catalogs`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogListRequest {
	/// Maximum number of catalogs to return.
	pub limit: u32,
	/// Pagination offset.
	pub offset: u32,
}
impl CatalogListRequest {
	/// Creates a request with the default page (limit 10, offset 0).
	pub fn new() -> Self {
		Self { limit: 10, offset: 0 }
	}

	/// Overrides the page size.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;

		self
	}

	/// Overrides the pagination offset.
	pub fn with_offset(mut self, offset: u32) -> Self {
		self.offset = offset;

		self
	}
}
impl Default for CatalogListRequest {
	fn default() -> Self {
		Self::new()
	}
}

/// Stateless V3 API client that mints a fresh bearer token for every request.
///
/// Each call is an independent send: no token reuse, no caching, no retries.
/// The client is cheaply cloneable and safe to share across tasks since the
/// underlying reqwest client and signer carry no per-call state.
#[derive(Clone)]
pub struct Client {
	/// HTTP client wrapper used for every outbound request.
	pub http_client: ApiHttpClient,
	signer: TokenSigner,
	base_url: String,
}
impl Client {
	/// Creates a client for [`DEFAULT_BASE_URL`] with a default reqwest transport.
	pub fn new(
		developer_id: DeveloperId,
		key_id: KeyId,
		private_key: &PrivateKeyPem,
	) -> Result<Self> {
		Self::with_http_client(developer_id, key_id, private_key, ApiHttpClient::default())
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		developer_id: DeveloperId,
		key_id: KeyId,
		private_key: &PrivateKeyPem,
		http_client: ApiHttpClient,
	) -> Result<Self> {
		let signer = TokenSigner::new(developer_id, key_id, private_key)?;

		Ok(Self { http_client, signer, base_url: DEFAULT_BASE_URL.into() })
	}

	/// Overrides the base URL (alternate deployments, mock servers in tests).
	///
	/// Trailing slashes are trimmed so endpoint paths concatenate cleanly.
	pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
		let trimmed = base_url.as_ref().trim_end_matches('/');

		Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl { source: e })?;

		self.base_url = trimmed.into();

		Ok(self)
	}

	/// Returns the signer used to mint request tokens.
	pub fn signer(&self) -> &TokenSigner {
		&self.signer
	}

	/// Returns the normalized base URL.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Sends one authenticated request and returns the raw response unmodified.
	///
	/// A fresh default-lifetime token is minted per call and attached as
	/// `Authorization: Bearer <token>` next to a JSON content type. The path
	/// fragment is concatenated onto the base URL. Transport failures
	/// propagate as [`TransportError`] without interpretation; non-2xx
	/// statuses are returned to the caller as ordinary responses.
	pub async fn request(
		&self,
		method: Method,
		path: &str,
		body: Option<&Value>,
		query: &[(&str, String)],
	) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Dispatch;

		let span = CallSpan::new(KIND, "request");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.dispatch(method, path, body, query)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn dispatch(
		&self,
		method: Method,
		path: &str,
		body: Option<&Value>,
		query: &[(&str, String)],
	) -> Result<ApiResponse> {
		let token = self.signer.sign()?;
		let url = Url::parse(&format!("{}{path}", self.base_url))
			.map_err(|e| ConfigError::InvalidEndpoint { path: path.into(), source: e })?;
		let mut request = self
			.http_client
			.request(method, url)
			.header(AUTHORIZATION, format!("Bearer {token}"))
			.header(CONTENT_TYPE, "application/json");

		if !query.is_empty() {
			request = request.query(query);
		}
		if let Some(json) = body {
			request = request.json(json);
		}

		let response = request.send().await.map_err(TransportError::from)?;
		let status = response.status().as_u16();
		let bytes = response.bytes().await.map_err(TransportError::from)?;

		Ok(ApiResponse::new(status, bytes.to_vec()))
	}

	/// Fetches a single catalog by identifier via `GET /catalogs/{id}`.
	///
	/// 2xx bodies are parsed as JSON and returned unchanged; any other status
	/// becomes an [`ApiError::Status`] carrying the code and body text.
	pub async fn get_catalog(&self, catalog_id: &str) -> Result<Value> {
		const KIND: CallKind = CallKind::GetCatalog;

		let span = CallSpan::new(KIND, "get_catalog");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.request(Method::GET, &format!("/catalogs/{catalog_id}"), None, &[])
					.await?;

				expect_json(response, "Failed to get catalog")
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Lists catalogs via `GET /catalogs`, forwarding pagination exactly as supplied.
	pub async fn list_catalogs(&self, request: CatalogListRequest) -> Result<Value> {
		const KIND: CallKind = CallKind::ListCatalogs;

		let span = CallSpan::new(KIND, "list_catalogs");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let query =
					[("limit", request.limit.to_string()), ("offset", request.offset.to_string())];
				let response = self.request(Method::GET, "/catalogs", None, &query).await?;

				expect_json(response, "Failed to list catalogs")
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url)
			.field("developer_id", self.signer.developer_id())
			.field("key_id", self.signer.key_id())
			.finish()
	}
}

fn expect_json(response: ApiResponse, context: &'static str) -> Result<Value> {
	if !response.is_success() {
		return Err(ApiError::Status {
			context,
			status: response.status,
			body: response.text(),
		}
		.into());
	}

	Ok(response.json()?)
}
