//! Endpoint routing, response classification, and typed decoding.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	error::{ConfigError, TransportError},
	http::{HttpGet, HttpReply, MapsHttpClient},
	options::QueryParams,
};

/// Default API root of the Apple Maps Server API.
pub const DEFAULT_BASE_URL: &str = "https://maps-api.apple.com/v1";

/// Remote endpoints exposed by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
	/// Access-token exchange, authenticated with the signing credential.
	Token,
	/// Address to coordinates.
	Geocode,
	/// Coordinates to addresses.
	ReverseGeocode,
	/// Place search.
	Search,
	/// Search completions.
	SearchAutocomplete,
	/// Travel-time estimates.
	Etas,
	/// Turn-by-turn directions.
	Directions,
}
impl Endpoint {
	/// Returns the path segment appended to the base URL; also used as a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Endpoint::Token => "token",
			Endpoint::Geocode => "geocode",
			Endpoint::ReverseGeocode => "reverseGeocode",
			Endpoint::Search => "search",
			Endpoint::SearchAutocomplete => "searchAutocomplete",
			Endpoint::Etas => "etas",
			Endpoint::Directions => "directions",
		}
	}
}
impl Display for Endpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Error body returned by the service for failed requests.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
	/// Error description.
	pub error: ErrorDetail,
}
impl ErrorEnvelope {
	/// Decodes an envelope, degrading to an empty one when the body is malformed.
	pub fn from_body(body: &[u8]) -> Self {
		serde_json::from_slice(body).unwrap_or_default()
	}
}

/// Message and details inside an [`ErrorEnvelope`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
	/// Human-readable message.
	pub message: String,
	/// Free-form details.
	pub details: Vec<serde_json::Value>,
}

/// Issues GET requests against the configured API root and classifies the replies.
#[derive(Debug)]
pub struct Transport<C>
where
	C: ?Sized + MapsHttpClient,
{
	http_client: Arc<C>,
	base_url: Url,
}
impl<C> Transport<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Creates a transport rooted at `base_url`.
	pub fn new(http_client: impl Into<Arc<C>>, base_url: Url) -> Result<Self> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::InvalidBaseUrl { url: base_url.into() }.into());
		}

		Ok(Self { http_client: http_client.into(), base_url })
	}

	/// API root requests are resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves the absolute URL for `endpoint` with `params` encoded into the query.
	pub fn url(&self, endpoint: Endpoint, params: Option<&QueryParams>) -> Url {
		let mut url = self.base_url.clone();

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(endpoint.as_str());
		}
		if let Some(params) = params.filter(|params| !params.is_empty()) {
			url.query_pairs_mut().extend_pairs(params.iter());
		}

		url
	}

	/// Performs the GET and returns the body of a successful (HTTP 200) reply.
	pub async fn request(
		&self,
		bearer: TokenSecret,
		endpoint: Endpoint,
		params: Option<&QueryParams>,
	) -> Result<Vec<u8>> {
		let request = HttpGet { url: self.url(endpoint, params), bearer };
		let reply = self
			.http_client
			.get(request)
			.await
			.map_err(|e| TransportError::network(endpoint.as_str(), e))?;

		classify(reply)
	}
}

/// Maps a raw reply onto the body or the matching [`Error`] variant.
pub fn classify(reply: HttpReply) -> Result<Vec<u8>> {
	match reply.status {
		200 => Ok(reply.body),
		401 => Err(Error::Unauthorized),
		400 => Err(Error::BadRequest { message: ErrorEnvelope::from_body(&reply.body).error.message }),
		429 => Err(Error::RateLimited {
			message: ErrorEnvelope::from_body(&reply.body).error.message,
			retry_after: reply.retry_after,
		}),
		status => {
			let ErrorDetail { message, details } = ErrorEnvelope::from_body(&reply.body).error;

			Err(Error::Remote { status, message, details })
		},
	}
}

/// Decodes a successful body into `T`, reporting the JSON path on mismatch.
pub fn decode<T>(endpoint: Endpoint, body: &[u8]) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { endpoint: endpoint.as_str(), source })
}
