//! Access-token cache and renewal bookkeeping.
//!
//! [`TokenCache`] owns the signing credential, the cached [`AccessToken`], and the instant at
//! which that token must be renewed. It is pure state: the client decides when to contact the
//! `token` endpoint by asking [`TokenCache::lookup`], then hands the minted token back through
//! [`TokenCache::commit`]. Each credential replacement bumps a generation counter so a renewal
//! started under a stale credential is discarded instead of committed.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, TokenSecret},
};

/// Safety margin subtracted from the renewal instant so tokens are replaced before expiry.
pub const RENEWAL_LEAD_TIME: Duration = Duration::seconds(10);

/// Outcome of checking the cache at a given instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenLookup {
	/// Cached token is still usable.
	Fresh(TokenSecret),
	/// A renewal is required using the enclosed credential.
	Stale {
		/// Signing credential to present to the token endpoint.
		credential: TokenSecret,
		/// Credential generation the renewal belongs to.
		generation: u64,
	},
}

#[derive(Debug)]
struct CacheState {
	credential: TokenSecret,
	access_token: Option<AccessToken>,
	next_renewal: OffsetDateTime,
	generation: u64,
}

/// Per-client token state guarded for shared access.
#[derive(Debug)]
pub struct TokenCache(RwLock<CacheState>);
impl TokenCache {
	/// Creates a cache that is stale at `now`, forcing a fetch on first use.
	pub fn new(credential: TokenSecret, now: OffsetDateTime) -> Self {
		Self(RwLock::new(CacheState {
			credential,
			access_token: None,
			next_renewal: now,
			generation: 0,
		}))
	}

	/// Returns the cached token when fresh, or what a renewal needs otherwise.
	///
	/// The cached token stays fresh up to and including `next_renewal - RENEWAL_LEAD_TIME`.
	pub fn lookup(&self, now: OffsetDateTime) -> TokenLookup {
		let state = self.0.read();

		match &state.access_token {
			Some(token) if now <= state.next_renewal.saturating_sub(RENEWAL_LEAD_TIME) =>
				TokenLookup::Fresh(token.token.clone()),
			_ => TokenLookup::Stale {
				credential: state.credential.clone(),
				generation: state.generation,
			},
		}
	}

	/// Stores a freshly minted token fetched at `fetched_at`.
	///
	/// Returns `false` and leaves the cache untouched when the credential was replaced after the
	/// renewal began.
	pub fn commit(&self, generation: u64, token: AccessToken, fetched_at: OffsetDateTime) -> bool {
		let mut state = self.0.write();

		if state.generation != generation {
			return false;
		}

		// Lifetimes past the representable range pin the renewal instant to its bound.
		state.next_renewal = fetched_at.saturating_add(token.ttl());
		state.access_token = Some(token);

		true
	}

	/// Replaces the signing credential and forces the next lookup to renew.
	pub fn set_credential(&self, credential: TokenSecret, now: OffsetDateTime) {
		let mut state = self.0.write();

		state.credential = credential;
		state.next_renewal = now;
		state.generation = state.generation.wrapping_add(1);
	}

	/// Current signing credential.
	pub fn credential(&self) -> TokenSecret {
		self.0.read().credential.clone()
	}

	/// Currently cached access token, if one was minted.
	pub fn access_token(&self) -> Option<AccessToken> {
		self.0.read().access_token.clone()
	}

	/// Instant the cached token is scheduled for renewal (before lead time).
	pub fn next_renewal(&self) -> OffsetDateTime {
		self.0.read().next_renewal
	}
}
