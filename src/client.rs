//! Maps client facade: construction, access-token renewal, and the shared request executor.

mod directions;
mod geocode;
mod search;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenCache, TokenLookup, TokenSecret},
	error::ConfigError,
	http::MapsHttpClient,
	obs::{self, RequestSpan},
	options::{QueryParams, RequestOption},
	transport::{self, DEFAULT_BASE_URL, Endpoint, Transport},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestMapsClient = MapsClient<ReqwestHttpClient>;

/// Typed client for the Maps Server API.
///
/// The client owns the HTTP transport and the token cache. Every endpoint call first asks the
/// cache for a valid access token; when the cached token is missing or within
/// [`RENEWAL_LEAD_TIME`](crate::auth::RENEWAL_LEAD_TIME) of its renewal instant, the client
/// exchanges the signing credential at the `token` endpoint. Renewal is lazy and single-flight:
/// concurrent callers wait on one in-flight exchange instead of each hitting the endpoint, and a
/// cancelled or failed exchange leaves the cache untouched.
pub struct MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	transport: Transport<C>,
	tokens: TokenCache,
	renewal_guard: AsyncMutex<()>,
}
impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Creates a client against the default API root with the caller-provided transport.
	pub fn with_http_client(
		http_client: impl Into<Arc<C>>,
		credential: impl Into<TokenSecret>,
	) -> Result<Self> {
		MapsClientBuilder::new(credential).build_with(http_client)
	}

	/// API root requests are resolved against.
	pub fn base_url(&self) -> &Url {
		self.transport.base_url()
	}

	/// Replaces the signing credential and forces the next call to mint a new access token.
	///
	/// Use this to rotate a credential before it expires. A renewal already in flight under the
	/// previous credential is discarded rather than cached.
	pub fn set_credential(&self, credential: impl Into<TokenSecret>) {
		self.tokens.set_credential(credential.into(), OffsetDateTime::now_utc());

		obs::record_credential_rotation();
	}

	/// Returns a valid access token, renewing it first when required.
	pub async fn access_token(&self) -> Result<TokenSecret> {
		self.access_token_with(OffsetDateTime::now_utc).await
	}

	pub(crate) async fn access_token_with<F>(&self, now: F) -> Result<TokenSecret>
	where
		F: Fn() -> OffsetDateTime,
	{
		if let TokenLookup::Fresh(token) = self.tokens.lookup(now()) {
			return Ok(token);
		}

		let _singleflight = self.renewal_guard.lock().await;
		let (credential, generation) = match self.tokens.lookup(now()) {
			TokenLookup::Fresh(token) => return Ok(token),
			TokenLookup::Stale { credential, generation } => (credential, generation),
		};
		let token = self.renew(credential).await?;
		let secret = token.token.clone();

		// Not cached if the credential was replaced mid-exchange.
		self.tokens.commit(generation, token, now());

		Ok(secret)
	}

	async fn renew(&self, credential: TokenSecret) -> Result<AccessToken> {
		const ENDPOINT: Endpoint = Endpoint::Token;

		let span = RequestSpan::new(ENDPOINT, "renew");
		let result = span
			.instrument(async move {
				let body = self.transport.request(credential, ENDPOINT, None).await?;

				transport::decode::<AccessToken>(ENDPOINT, &body)
			})
			.await;

		span.finish(&result);

		result
	}

	/// Performs an authenticated GET against `endpoint` and decodes the body into `T`.
	pub(crate) async fn exec<T>(
		&self,
		endpoint: Endpoint,
		mut params: QueryParams,
		options: &[RequestOption],
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let span = RequestSpan::new(endpoint, "exec");

		params.apply(options);

		let result = span
			.instrument(async {
				let token = self.access_token().await?;
				let body = self.transport.request(token, endpoint, Some(&params)).await?;

				transport::decode::<T>(endpoint, &body)
			})
			.await;

		span.finish(&result);

		result
	}

	#[cfg(test)]
	pub(crate) fn tokens(&self) -> &TokenCache {
		&self.tokens
	}
}
#[cfg(feature = "reqwest")]
impl MapsClient<ReqwestHttpClient> {
	/// Starts a builder for a client authenticated with `credential`.
	pub fn builder(credential: impl Into<TokenSecret>) -> MapsClientBuilder {
		MapsClientBuilder::new(credential)
	}

	/// Creates a client with a default reqwest transport and API root.
	pub fn new(credential: impl Into<TokenSecret>) -> Result<Self> {
		MapsClientBuilder::new(credential).build()
	}
}
impl<C> Debug for MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MapsClient")
			.field("base_url", &self.transport.base_url().as_str())
			.field("tokens", &self.tokens)
			.finish()
	}
}

/// Builder for [`MapsClient`] values; the closed set of construction options.
#[derive(Debug)]
pub struct MapsClientBuilder {
	/// Signing credential exchanged for access tokens.
	pub credential: TokenSecret,
	/// Optional API root override (defaults to [`DEFAULT_BASE_URL`]).
	pub base_url: Option<Url>,
}
impl MapsClientBuilder {
	/// Creates a new builder seeded with the signing credential.
	pub fn new(credential: impl Into<TokenSecret>) -> Self {
		Self { credential: credential.into(), base_url: None }
	}

	/// Overrides the API root, e.g. to target a proxy or a mock server.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Consumes the builder and wires the provided transport.
	pub fn build_with<C>(self, http_client: impl Into<Arc<C>>) -> Result<MapsClient<C>>
	where
		C: ?Sized + MapsHttpClient,
	{
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(DEFAULT_BASE_URL)
				.map_err(|_| ConfigError::InvalidBaseUrl { url: DEFAULT_BASE_URL.into() })?,
		};

		Ok(MapsClient {
			transport: Transport::new(http_client, base_url)?,
			tokens: TokenCache::new(self.credential, OffsetDateTime::now_utc()),
			renewal_guard: AsyncMutex::new(()),
		})
	}

	/// Consumes the builder with a default reqwest transport.
	#[cfg(feature = "reqwest")]
	pub fn build(self) -> Result<MapsClient<ReqwestHttpClient>> {
		self.build_with(ReqwestHttpClient::default())
	}
}
