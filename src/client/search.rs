//! Place search and search autocompletion.

// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{SearchAutocompleteResponse, SearchResponse},
	options::{QueryParams, RequestOption},
	transport::Endpoint,
};

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Finds places matching `query`, including the region that contains them.
	pub async fn search(&self, query: &str, options: &[RequestOption]) -> Result<SearchResponse> {
		self.exec(Endpoint::Search, QueryParams::from_iter([("q", query)]), options).await
	}

	/// Returns completion suggestions for a partially typed `query`.
	pub async fn search_autocomplete(
		&self,
		query: &str,
		options: &[RequestOption],
	) -> Result<SearchAutocompleteResponse> {
		self.exec(Endpoint::SearchAutocomplete, QueryParams::from_iter([("q", query)]), options)
			.await
	}
}
