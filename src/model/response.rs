//! Endpoint payloads for search, autocomplete, directions, and ETAs.

// self
use crate::{
	_prelude::*,
	model::{Location, MapRegion, Place, StructuredAddress},
};

/// Payload of the `search`, `geocode`, and `reverseGeocode` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchResponse {
	/// Region containing every result.
	pub display_map_region: MapRegion,
	/// Matching places.
	pub results: Vec<Place>,
}

/// Payload of the `searchAutocomplete` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchAutocompleteResponse {
	/// Completion suggestions.
	pub results: Vec<AutocompleteResult>,
}

/// A single autocomplete suggestion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutocompleteResult {
	/// Relative URL that runs the completed search.
	pub completion_url: String,
	/// Lines to display for the suggestion.
	pub display_lines: Vec<String>,
	/// Suggestion coordinate.
	pub location: Location,
	/// Suggestion address.
	pub structured_address: StructuredAddress,
}

/// Payload of the `directions` endpoint.
///
/// `routes` reference `steps` by index and `steps` reference `step_paths` by index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DirectionsResponse {
	/// Resolved destination.
	pub destination: Place,
	/// Resolved origin.
	pub origin: Place,
	/// Candidate routes.
	pub routes: Vec<Route>,
	/// Polylines for each step.
	pub step_paths: Vec<Vec<Location>>,
	/// Route steps shared by all routes.
	pub steps: Vec<Step>,
}

/// A single route between origin and destination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
	/// Route length in meters.
	pub distance_meters: i64,
	/// Expected travel time in seconds.
	pub duration_seconds: i64,
	/// Whether the route uses toll roads.
	pub has_tolls: bool,
	/// Route name.
	pub name: String,
	/// Indexes into [`DirectionsResponse::steps`].
	pub step_indexes: Vec<usize>,
	/// Mode of transportation.
	pub transport_type: String,
}

/// A single maneuver within a route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Step {
	/// Step length in meters.
	pub distance_meters: i64,
	/// Step travel time in seconds.
	pub duration_seconds: i64,
	/// Human-readable instructions.
	pub instructions: String,
	/// Index into [`DirectionsResponse::step_paths`].
	pub step_path_index: usize,
	/// Mode of transportation.
	pub transport_type: String,
}

/// Payload of the `etas` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtaResponse {
	/// One estimate per requested destination.
	pub etas: Vec<Eta>,
}

/// Travel estimate to a single destination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Eta {
	/// Destination the estimate applies to.
	pub destination: Location,
	/// Distance in meters.
	pub distance_meters: i64,
	/// Travel time in seconds under current traffic.
	pub expected_travel_time_seconds: i64,
	/// Travel time in seconds without traffic.
	pub static_travel_time_seconds: i64,
	/// Mode of transportation.
	pub transport_type: String,
}
