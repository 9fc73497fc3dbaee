//! Transport wrapper and the raw response surface returned by the dispatcher.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, error::ApiError};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The client applies no timeout or retry policy of its own; whatever defaults
/// the wrapped [`ReqwestClient`] carries apply to every dispatched request.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ApiHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ApiHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ApiHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ApiHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Raw response returned unmodified by the request dispatcher.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	body: Vec<u8>,
}
impl ApiResponse {
	/// Builds a response from a status code and body bytes.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Returns the raw body bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.body
	}

	/// Returns the body as text, replacing invalid UTF-8 sequences.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Parses the body as JSON, reporting the failing path on malformed payloads.
	pub fn json<T>(&self) -> Result<T, ApiError>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| ApiError::ResponseParse { source: e, status: self.status })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::Value;
	// self
	use super::*;

	#[test]
	fn success_covers_the_2xx_range() {
		assert!(ApiResponse::new(200, b"".to_vec()).is_success());
		assert!(ApiResponse::new(299, b"".to_vec()).is_success());
		assert!(!ApiResponse::new(199, b"".to_vec()).is_success());
		assert!(!ApiResponse::new(404, b"".to_vec()).is_success());
	}

	#[test]
	fn json_parses_and_reports_malformed_bodies() {
		let ok = ApiResponse::new(200, br#"{"id":"catalog_123"}"#.to_vec());
		let value: Value = ok.json().expect("Valid JSON body should parse.");

		assert_eq!(value["id"], "catalog_123");

		let bad = ApiResponse::new(200, b"not json".to_vec());
		let err = bad.json::<Value>().expect_err("Malformed body must be reported.");

		assert!(matches!(err, ApiError::ResponseParse { status: 200, .. }));
	}

	#[test]
	fn text_is_lossy() {
		let response = ApiResponse::new(500, vec![b'o', b'k', 0xFF]);

		assert!(response.text().starts_with("ok"));
	}
}
