//! GroupVAN V3 API client SDK. Mints RS256-signed JWTs and dispatches
//! bearer-authenticated requests against the V3 API.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
#[cfg(feature = "reqwest")] pub mod client;
pub mod error;
pub mod http;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{self, DeveloperId, KeyId, KeyPair},
		client::Client,
	};

	/// Developer identifier shared by test fixtures.
	pub const TEST_DEVELOPER_ID: &str = "test_dev_123";
	/// Signing-key identifier shared by test fixtures.
	pub const TEST_KEY_ID: &str = "test_key_456";

	/// Generates a 2048-bit RSA key pair for test fixtures.
	pub fn test_key_pair() -> KeyPair {
		auth::generate_key_pair(2_048).expect("Failed to generate test RSA key pair.")
	}

	/// Builds a client with the fixture credentials, pointed at `base_url`.
	pub fn build_test_client(key_pair: &KeyPair, base_url: &str) -> Client {
		Client::new(
			DeveloperId::new(TEST_DEVELOPER_ID)
				.expect("Test developer identifier should be valid."),
			KeyId::new(TEST_KEY_ID).expect("Test key identifier should be valid."),
			&key_pair.private_key,
		)
		.expect("Failed to build test client.")
		.with_base_url(base_url)
		.expect("Test base URL should be valid.")
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, tokio as _};
