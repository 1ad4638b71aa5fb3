//! Client-level error types shared across credentials, transport, and endpoint operations.

// self
use crate::{_prelude::*, auth::IdentifierError};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Credential generation failure.
	#[error(transparent)]
	Credential(#[from] CredentialError),
	/// Network failure while reaching the service.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// The remote service rejected the bearer token (HTTP 401).
	#[error("Remote service rejected the supplied authorization.")]
	Unauthorized,
	/// The remote service rejected the request parameters (HTTP 400).
	#[error("Remote service rejected the request: {message}.")]
	BadRequest {
		/// Message extracted from the error envelope.
		message: String,
	},
	/// The remote service rate limit was reached (HTTP 429); callers own any backoff.
	#[error("Remote service rate limit reached: {message}.")]
	RateLimited {
		/// Message extracted from the error envelope.
		message: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Any other non-success response.
	#[error("Remote service returned HTTP {status}: {message}.")]
	Remote {
		/// HTTP status code.
		status: u16,
		/// Message extracted from the error envelope.
		message: String,
		/// Details extracted from the error envelope.
		details: Vec<serde_json::Value>,
	},
	/// Travel-time estimation needs at least one destination; never sent to the service.
	#[error("At least one destination is required.")]
	EmptyDestinations,
	/// The response body did not match the expected shape.
	#[error("Response from the {endpoint} endpoint does not match the expected shape.")]
	Decode {
		/// Endpoint path that produced the body.
		endpoint: &'static str,
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot carry endpoint path segments.
	#[error("Base URL `{url}` cannot be used as an API root.")]
	InvalidBaseUrl {
		/// Offending base URL.
		url: String,
	},
}

/// Failures raised while producing a signed credential.
#[derive(Debug, ThisError)]
pub enum CredentialError {
	/// The private key is not a PEM-encoded PKCS#8 P-256 key.
	#[error("Signing key is invalid: {reason}.")]
	InvalidKey {
		/// Why the key was rejected.
		reason: String,
	},
	/// Key or team identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] IdentifierError),
	/// Claims or header could not be serialized.
	#[error("Credential claims could not be serialized.")]
	Claims(#[from] serde_json::Error),
	/// The signing primitive failed.
	#[error("ES256 signing failed.")]
	Signing,
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the {endpoint} endpoint.")]
	Network {
		/// Endpoint path being called.
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error raised against `endpoint`.
	pub fn network(
		endpoint: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}
