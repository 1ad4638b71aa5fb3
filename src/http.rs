//! Transport primitives for authenticated GET requests.
//!
//! The module exposes [`MapsHttpClient`] alongside [`HttpGet`] and [`HttpReply`] so downstream
//! crates can plug in custom HTTP stacks. Implementations only move bytes: they attach the bearer
//! header, report the status code, the body, and any `Retry-After` hint, and leave status
//! classification to [`crate::transport`].

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{HeaderMap, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, auth::TokenSecret};

/// Boxed future returned by [`MapsHttpClient::get`].
pub type HttpFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpReply, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of issuing bearer-authenticated GET requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can back many clients,
/// and the returned future must be `Send` so client futures can hop executors. Dropping the
/// future must abort the in-flight request.
pub trait MapsHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` as an HTTP GET with `Authorization: Bearer <bearer>`.
	///
	/// Non-success statuses are not errors at this layer; they are reported through
	/// [`HttpReply::status`].
	fn get(&self, request: HttpGet) -> HttpFuture<'_, Self::TransportError>;
}

/// Fully resolved GET request.
#[derive(Clone, Debug)]
pub struct HttpGet {
	/// Absolute URL including the encoded query.
	pub url: Url,
	/// Bearer token for the `Authorization` header.
	pub bearer: TokenSecret,
}

/// Raw HTTP response captured by a transport.
#[derive(Clone, Debug, Default)]
pub struct HttpReply {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl MapsHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn get(&self, request: HttpGet) -> HttpFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let response =
				self.0.get(request.url).bearer_auth(request.bearer.expose()).send().await?;
			let status = response.status().as_u16();
			let retry_after = parse_retry_after(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(HttpReply { status, body, retry_after })
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use reqwest::header::HeaderValue;
	// self
	use super::*;

	fn headers(value: &'static str) -> HeaderMap {
		let mut headers = HeaderMap::new();

		headers.insert(RETRY_AFTER, HeaderValue::from_static(value));

		headers
	}

	#[test]
	fn retry_after_accepts_delta_seconds() {
		assert_eq!(parse_retry_after(&headers("30")), Some(Duration::seconds(30)));
		assert_eq!(parse_retry_after(&headers(" 5 ")), Some(Duration::seconds(5)));
	}

	#[test]
	fn retry_after_ignores_past_dates_and_garbage() {
		assert_eq!(parse_retry_after(&headers("Wed, 21 Oct 2015 07:28:00 GMT")), None);
		assert_eq!(parse_retry_after(&headers("soon")), None);
		assert_eq!(parse_retry_after(&HeaderMap::new()), None);
	}
}
