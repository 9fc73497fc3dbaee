//! Wire-format constants and serde models for the GV-JWT-V1 token contract.

// self
use crate::{
	_prelude::*,
	auth::{DeveloperId, KeyId},
};

/// Fixed audience identifier carried in the `aud` claim of every token.
pub const AUDIENCE: &str = "groupvan";
/// Fixed protocol-version tag carried in the `gv-ver` header field.
pub const TOKEN_VERSION: &str = "GV-JWT-V1";
/// Declared signing algorithm name.
pub const ALGORITHM: &str = "RS256";
/// Token lifetime applied when the caller does not supply one.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::seconds(300);

/// JOSE header of a compact token, fields in wire order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TokenHeader {
	/// Declared signing algorithm; always [`ALGORITHM`].
	pub alg: String,
	/// Protocol-version tag; always [`TOKEN_VERSION`].
	#[serde(rename = "gv-ver")]
	pub gv_ver: String,
	/// Signing-key identifier, repeated from the claims.
	pub kid: KeyId,
}
impl TokenHeader {
	/// Builds the fixed RS256 header for a signing key.
	pub fn new(kid: KeyId) -> Self {
		Self { alg: ALGORITHM.into(), gv_ver: TOKEN_VERSION.into(), kid }
	}
}

/// Claim set of a compact token, fields in wire order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TokenClaims {
	/// Audience identifier; always [`AUDIENCE`].
	pub aud: String,
	/// Developer identifier of the caller.
	pub iss: DeveloperId,
	/// Signing-key identifier.
	pub kid: KeyId,
	/// Expiry instant in unix seconds; `iat` plus the requested lifetime.
	pub exp: i64,
	/// Issuance instant in floored unix seconds.
	pub iat: i64,
}
impl TokenClaims {
	/// Assembles the claim set for an issuance instant and lifetime.
	pub fn at(iss: DeveloperId, kid: KeyId, issued_at: OffsetDateTime, lifetime: Duration) -> Self {
		let iat = issued_at.unix_timestamp();

		Self { aud: AUDIENCE.into(), iss, kid, exp: iat + lifetime.whole_seconds(), iat }
	}

	/// Returns the lifetime encoded in the claims.
	pub fn lifetime(&self) -> Duration {
		Duration::seconds(self.exp - self.iat)
	}
}
