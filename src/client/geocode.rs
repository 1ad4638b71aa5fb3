//! Forward and reverse geocoding.

// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{Location, Place, SearchResponse},
	options::{QueryParams, RequestOption},
	transport::Endpoint,
};

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Returns the places (with coordinates) matching an address query.
	pub async fn geocode(&self, query: &str, options: &[RequestOption]) -> Result<Vec<Place>> {
		let params = QueryParams::from_iter([("q", query)]);
		let response: SearchResponse = self.exec(Endpoint::Geocode, params, options).await?;

		Ok(response.results)
	}

	/// Returns the addresses present at `location`.
	pub async fn reverse_geocode(
		&self,
		location: Location,
		options: &[RequestOption],
	) -> Result<Vec<Place>> {
		let params = QueryParams::from_iter([("loc", location.to_string())]);
		let response: SearchResponse =
			self.exec(Endpoint::ReverseGeocode, params, options).await?;

		Ok(response.results)
	}
}
