//! Shared fixtures for integration tests.

// self
use groupvan_client::{
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
		DeveloperId::new(TEST_DEVELOPER_ID).expect("Test developer identifier should be valid."),
		KeyId::new(TEST_KEY_ID).expect("Test key identifier should be valid."),
		&key_pair.private_key,
	)
	.expect("Failed to build test client.")
	.with_base_url(base_url)
	.expect("Test base URL should be valid.")
}
