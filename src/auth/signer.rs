//! RS256 token builder plus the verification half of the GV-JWT-V1 contract.

// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, crypto};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::{
		AUDIENCE, DEFAULT_TOKEN_LIFETIME, DeveloperId, KeyId, PrivateKeyPem, TokenClaims,
		TokenHeader,
	},
	error::TokenError,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Mints compact RS256 tokens for one developer/key pair.
///
/// The private key is parsed once at construction; every `sign*` call reads
/// the clock and produces a fresh token, so instances carry no per-call state
/// and are safe to share across tasks.
#[derive(Clone)]
pub struct TokenSigner {
	developer_id: DeveloperId,
	key_id: KeyId,
	encoding_key: EncodingKey,
}
impl TokenSigner {
	/// Creates a signer from a PKCS#8 or PKCS#1 PEM private key.
	///
	/// Malformed key material or material incompatible with RS256 fails here
	/// rather than at signing time.
	pub fn new(
		developer_id: DeveloperId,
		key_id: KeyId,
		private_key: &PrivateKeyPem,
	) -> Result<Self, TokenError> {
		let encoding_key = EncodingKey::from_rsa_pem(private_key.expose().as_bytes())
			.map_err(|e| TokenError::InvalidKey { source: e })?;

		Ok(Self { developer_id, key_id, encoding_key })
	}

	/// Returns the developer identifier stamped into `iss`.
	pub fn developer_id(&self) -> &DeveloperId {
		&self.developer_id
	}

	/// Returns the signing-key identifier stamped into `kid`.
	pub fn key_id(&self) -> &KeyId {
		&self.key_id
	}

	/// Mints a token with the default 300-second lifetime.
	pub fn sign(&self) -> Result<String, TokenError> {
		self.sign_with_lifetime(DEFAULT_TOKEN_LIFETIME)
	}

	/// Mints a token expiring `lifetime` after the current instant.
	///
	/// The claims carry whole unix seconds only, so sub-second components of
	/// `lifetime` are discarded and lifetimes shorter than one second are
	/// rejected with [`TokenError::LifetimeTooShort`].
	pub fn sign_with_lifetime(&self, lifetime: Duration) -> Result<String, TokenError> {
		const KIND: CallKind = CallKind::MintToken;

		let _span = CallSpan::new(KIND, "sign").entered();

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = self.sign_at(OffsetDateTime::now_utc(), lifetime);

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	fn sign_at(&self, issued_at: OffsetDateTime, lifetime: Duration) -> Result<String, TokenError> {
		// Claims carry whole seconds; anything shorter would mint `exp == iat`.
		if lifetime.whole_seconds() < 1 {
			return Err(TokenError::LifetimeTooShort);
		}

		let header = TokenHeader::new(self.key_id.clone());
		let claims =
			TokenClaims::at(self.developer_id.clone(), self.key_id.clone(), issued_at, lifetime);
		let signing_input = format!(
			"{}.{}",
			URL_SAFE_NO_PAD.encode(serde_json::to_vec(&header)?),
			URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?),
		);
		let signature = crypto::sign(signing_input.as_bytes(), &self.encoding_key, Algorithm::RS256)
			.map_err(|e| TokenError::Signing { source: e })?;

		Ok(format!("{signing_input}.{signature}"))
	}
}
impl Debug for TokenSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenSigner")
			.field("developer_id", &self.developer_id)
			.field("key_id", &self.key_id)
			.field("encoding_key", &"<redacted>")
			.finish()
	}
}

/// Verifies a compact token against an SPKI PEM public key.
///
/// Enforces the RS256 algorithm, the fixed `groupvan` audience, and the `exp`
/// claim, returning the parsed claims on success. This is the server-side
/// half of the contract; verifiers hold only the public key.
pub fn verify(token: &str, public_key_pem: &str) -> Result<TokenClaims, TokenError> {
	let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
		.map_err(|e| TokenError::InvalidKey { source: e })?;
	let mut validation = Validation::new(Algorithm::RS256);

	validation.set_audience(&[AUDIENCE]);

	let data = jsonwebtoken::decode::<TokenClaims>(token, &decoding_key, &validation)
		.map_err(|e| TokenError::Verification { source: e })?;

	Ok(data.claims)
}

/// Decodes the header segment without verifying the signature (debugging aid).
pub fn decode_header(token: &str) -> Result<TokenHeader, TokenError> {
	decode_segment(token, 0)
}

/// Decodes the claims segment without verifying the signature (debugging aid).
///
/// Never trust claims obtained this way; use [`verify`] before acting on them.
pub fn decode_claims_unverified(token: &str) -> Result<TokenClaims, TokenError> {
	decode_segment(token, 1)
}

fn decode_segment<T>(token: &str, index: usize) -> Result<T, TokenError>
where
	T: DeserializeOwned,
{
	let mut segments = token.split('.');

	if segments.clone().count() != 3 {
		return Err(TokenError::Malformed);
	}

	let segment = segments.nth(index).ok_or(TokenError::Malformed)?;
	let raw = URL_SAFE_NO_PAD.decode(segment).map_err(|_| TokenError::Malformed)?;

	Ok(serde_json::from_slice(&raw)?)
}
