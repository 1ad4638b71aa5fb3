//! Directions and travel-time estimates.

// self
use crate::{
	_prelude::*,
	client::MapsClient,
	http::MapsHttpClient,
	model::{DirectionsResponse, EtaResponse, Location, Waypoint},
	options::{QueryParams, RequestOption, join_locations},
	transport::Endpoint,
};

impl<C> MapsClient<C>
where
	C: ?Sized + MapsHttpClient,
{
	/// Returns routes between `origin` and `destination`.
	///
	/// Either end may be a free-text address or a coordinate, e.g. `"37.7857,-122.4011"`.
	pub async fn directions(
		&self,
		origin: impl Into<Waypoint>,
		destination: impl Into<Waypoint>,
		options: &[RequestOption],
	) -> Result<DirectionsResponse> {
		let params = QueryParams::from_iter([
			("origin", origin.into().to_string()),
			("destination", destination.into().to_string()),
		]);

		self.exec(Endpoint::Directions, params, options).await
	}

	/// Estimates travel time and distance from `origin` to each destination.
	///
	/// Fails with [`Error::EmptyDestinations`] before any network activity when `destinations`
	/// is empty.
	pub async fn etas(
		&self,
		origin: Location,
		destinations: &[Location],
		options: &[RequestOption],
	) -> Result<EtaResponse> {
		let destinations = join_locations(destinations).ok_or(Error::EmptyDestinations)?;
		let params = QueryParams::from_iter([
			("origin", origin.to_string()),
			("destinations", destinations),
		]);

		self.exec(Endpoint::Etas, params, options).await
	}
}
