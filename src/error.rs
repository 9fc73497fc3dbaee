//! Client-level error types shared across token minting, transport, and API operations.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Key material or signing failure raised by the token builder.
	#[error(transparent)]
	Token(#[from] TokenError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// V3 API rejected a convenience operation or returned an unusable body.
	#[error(transparent)]
	Api(#[from] ApiError),
}

/// Key material, signing, and verification failures.
#[derive(Debug, ThisError)]
pub enum TokenError {
	/// Private key PEM is malformed or incompatible with RS256.
	#[error("Private key is not a valid RS256 signing key.")]
	InvalidKey {
		/// Underlying key parsing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// Signature computation failed.
	#[error("Token signature could not be produced.")]
	Signing {
		/// Underlying signing failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
	/// Header or claims segment is not valid JSON.
	#[error("Token segment is not valid JSON.")]
	Json(#[from] serde_json::Error),
	/// Token is not a three-segment compact JWS.
	#[error("Token is not a valid compact JWS.")]
	Malformed,
	/// Requested lifetime was shorter than one whole second.
	#[error("Token lifetime must be at least one second.")]
	LifetimeTooShort,
	/// RSA key generation failed.
	#[error("RSA key pair could not be generated.")]
	KeyGeneration {
		/// Underlying RSA failure.
		#[source]
		source: rsa::Error,
	},
	/// Generated key could not be encoded as PEM.
	#[error("RSA key could not be encoded as PEM.")]
	KeyEncoding {
		/// Underlying PKCS#8/SPKI encoding failure.
		#[source]
		source: rsa::pkcs8::Error,
	},
	/// Token failed signature or claim verification.
	#[error("Token failed verification.")]
	Verification {
		/// Underlying verification failure.
		#[source]
		source: jsonwebtoken::errors::Error,
	},
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL override cannot be parsed.
	#[error("Base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint path does not form a valid request URL with the base URL.
	#[error("Endpoint path `{path}` does not form a valid request URL.")]
	InvalidEndpoint {
		/// Path fragment supplied by the caller.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Transport-level failures, propagated unmodified.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the V3 API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures surfaced by the catalog convenience operations.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// V3 API answered with a non-2xx status.
	#[error("{context}: {status} - {body}")]
	Status {
		/// Operation label prefixed to the message.
		context: &'static str,
		/// HTTP status code returned by the V3 API.
		status: u16,
		/// Response body text.
		body: String,
	},
	/// A 2xx response carried a body that is not valid JSON.
	#[error("Response body is not valid JSON.")]
	ResponseParse {
		/// Structured parsing failure naming the failing path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the malformed response.
		status: u16,
	},
}
