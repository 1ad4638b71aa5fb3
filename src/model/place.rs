//! Places and postal addresses returned by geocoding and search.

// self
use crate::{
	_prelude::*,
	model::{Location, MapRegion},
};

/// A resolved place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Place {
	/// Country name.
	pub country: String,
	/// ISO 3166-1 alpha-2 country code.
	pub country_code: String,
	/// Region suitable for displaying the place on a map.
	pub display_map_region: MapRegion,
	/// Address lines formatted for display.
	pub formatted_address_lines: Vec<String>,
	/// Place name.
	pub name: String,
	/// Place coordinate.
	pub coordinate: Location,
	/// Point-of-interest category label, e.g. `"Cafe"`; empty for plain addresses.
	pub poi_category: String,
	/// Address broken into components.
	pub structured_address: StructuredAddress,
}

/// Postal address components.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredAddress {
	/// State or province.
	pub administrative_area: String,
	/// Short code for the state or area.
	pub administrative_area_code: String,
	/// Notable areas containing the place.
	pub areas_of_interest: Vec<String>,
	/// Neighborhoods or districts.
	pub dependent_localities: Vec<String>,
	/// Street name plus house number.
	pub full_thoroughfare: String,
	/// City or town.
	pub locality: String,
	/// Postal code.
	pub post_code: String,
	/// Sub-division of the locality.
	pub sub_locality: String,
	/// House number.
	pub sub_thoroughfare: String,
	/// Street name.
	pub thoroughfare: String,
}
