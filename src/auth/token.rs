//! Service access tokens minted by the remote `token` endpoint.

pub mod secret;

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Short-lived bearer token returned by the token endpoint.
///
/// Tokens are replaced wholesale on renewal and never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
	/// Bearer value attached to every authenticated request.
	#[serde(rename = "accessToken")]
	pub token: TokenSecret,
	/// Lifetime granted by the service, in seconds.
	#[serde(rename = "expiresInSeconds", default)]
	pub ttl_seconds: i64,
}
impl AccessToken {
	/// Lifetime granted by the service.
	pub fn ttl(&self) -> Duration {
		Duration::seconds(self.ttl_seconds)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn decodes_token_endpoint_payload() {
		let token: AccessToken = serde_json::from_str(
			"{\"accessToken\":\"thisis.thejwt.token\",\"expiresInSeconds\":1800}",
		)
		.expect("Token payload should decode.");

		assert_eq!(token.token.expose(), "thisis.thejwt.token");
		assert_eq!(token.ttl(), Duration::minutes(30));
	}
}
