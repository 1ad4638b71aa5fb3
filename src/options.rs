//! Query-parameter assembly through typed request options.
//!
//! Each [`RequestOption`] sets exactly one named parameter on a [`QueryParams`] map. Options
//! built from an empty list are no-ops rather than empty parameters, options targeting
//! different names commute, and the last option wins when a name is set twice.

// std
use std::collections::btree_map::Iter;
// crates.io
use time::{UtcOffset, format_description::well_known::Rfc3339};
// self
use crate::{
	_prelude::*,
	model::{Avoid, Category, Location, MapRegion, ResultType, TransportType},
};

/// Ordered query-parameter map sent with an endpoint request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);
impl QueryParams {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `name` to `value`, replacing any previous value.
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.0.insert(name.into(), value.into());

		self
	}

	/// Returns the value stored for `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Applies options in call order.
	pub fn apply<'a, I>(&mut self, options: I) -> &mut Self
	where
		I: IntoIterator<Item = &'a RequestOption>,
	{
		for option in options {
			option.apply(self);
		}

		self
	}

	/// Iterates parameters in name order.
	pub fn iter(&self) -> Iter<'_, String, String> {
		self.0.iter()
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameter is set.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<'a> IntoIterator for &'a QueryParams {
	type IntoIter = Iter<'a, String, String>;
	type Item = (&'a String, &'a String);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
impl<K, V> FromIterator<(K, V)> for QueryParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self(iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect())
	}
}

/// A deferred, typed mutation of [`QueryParams`].
#[derive(Clone, Debug, PartialEq)]
pub enum RequestOption {
	/// Points of interest to leave out of results (`excludePoiCategories`).
	ExcludePoiCategories(Vec<Category>),
	/// Points of interest to restrict results to (`includePoiCategories`).
	IncludePoiCategories(Vec<Category>),
	/// ISO 3166-1 alpha-2 country codes to restrict results to (`limitToCountries`).
	LimitToCountries(Vec<String>),
	/// Result kinds to include (`resultTypeFilter`).
	ResultTypeFilter(Vec<ResultType>),
	/// BCP 47 response language (`lang`); the root tag leaves the parameter unset.
	Language(String),
	/// Desired arrival instant (`arrivalDate`).
	ArrivalDate(OffsetDateTime),
	/// Desired departure instant (`departureDate`).
	DepartureDate(OffsetDateTime),
	/// Ask for alternate routes when available (`requestsAlternateRoutes`).
	RequestsAlternateRoutes,
	/// Mode of transportation (`transportType`).
	TransportType(TransportType),
	/// Hint for resolving free-text origins and destinations (`searchLocation`).
	SearchLocation(Location),
	/// Region hint for resolving free-text input (`searchRegion`).
	SearchRegion(MapRegion),
	/// Location of the user (`userLocation`).
	UserLocation(Location),
	/// Road features to avoid (`avoid`).
	Avoid(Vec<Avoid>),
}
impl RequestOption {
	/// Excludes the given point-of-interest categories.
	pub fn exclude_poi_categories(categories: impl IntoIterator<Item = Category>) -> Self {
		Self::ExcludePoiCategories(categories.into_iter().collect())
	}

	/// Restricts results to the given point-of-interest categories.
	pub fn include_poi_categories(categories: impl IntoIterator<Item = Category>) -> Self {
		Self::IncludePoiCategories(categories.into_iter().collect())
	}

	/// Restricts results to the given countries, e.g. `["US", "CA"]`.
	///
	/// With two or more countries the service returns the best results across some or all of
	/// them rather than everything matching in each.
	pub fn limit_to_countries<I>(countries: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		Self::LimitToCountries(countries.into_iter().map(Into::into).collect())
	}

	/// Restricts results to the given result kinds.
	pub fn result_type_filter(filters: impl IntoIterator<Item = ResultType>) -> Self {
		Self::ResultTypeFilter(filters.into_iter().collect())
	}

	/// Sets the response language, e.g. `en-US`.
	pub fn language(tag: impl Into<String>) -> Self {
		Self::Language(tag.into())
	}

	/// Sets the arrival instant; mutually exclusive with a departure instant on the service side.
	pub fn arrival_date(arrival: OffsetDateTime) -> Self {
		Self::ArrivalDate(arrival)
	}

	/// Sets the departure instant; the service defaults to now.
	pub fn departure_date(departure: OffsetDateTime) -> Self {
		Self::DepartureDate(departure)
	}

	/// Requests alternate routes.
	pub fn requests_alternate_routes() -> Self {
		Self::RequestsAlternateRoutes
	}

	/// Sets the mode of transportation.
	pub fn transport_type(transport_type: TransportType) -> Self {
		Self::TransportType(transport_type)
	}

	/// Sets the search location hint.
	pub fn search_location(location: Location) -> Self {
		Self::SearchLocation(location)
	}

	/// Sets the search region hint.
	pub fn search_region(region: MapRegion) -> Self {
		Self::SearchRegion(region)
	}

	/// Sets the user location.
	pub fn user_location(location: Location) -> Self {
		Self::UserLocation(location)
	}

	/// Avoids the given road features.
	pub fn avoid(avoid: impl IntoIterator<Item = Avoid>) -> Self {
		Self::Avoid(avoid.into_iter().collect())
	}

	/// Query parameter name this option writes.
	pub const fn parameter(&self) -> &'static str {
		match self {
			Self::ExcludePoiCategories(_) => "excludePoiCategories",
			Self::IncludePoiCategories(_) => "includePoiCategories",
			Self::LimitToCountries(_) => "limitToCountries",
			Self::ResultTypeFilter(_) => "resultTypeFilter",
			Self::Language(_) => "lang",
			Self::ArrivalDate(_) => "arrivalDate",
			Self::DepartureDate(_) => "departureDate",
			Self::RequestsAlternateRoutes => "requestsAlternateRoutes",
			Self::TransportType(_) => "transportType",
			Self::SearchLocation(_) => "searchLocation",
			Self::SearchRegion(_) => "searchRegion",
			Self::UserLocation(_) => "userLocation",
			Self::Avoid(_) => "avoid",
		}
	}

	/// Writes this option into `params`.
	pub fn apply(&self, params: &mut QueryParams) {
		if let Some(value) = self.value() {
			params.set(self.parameter(), value);
		}
	}

	fn value(&self) -> Option<String> {
		match self {
			Self::ExcludePoiCategories(categories) | Self::IncludePoiCategories(categories) =>
				join(categories, ','),
			Self::LimitToCountries(countries) => join(countries, ','),
			Self::ResultTypeFilter(filters) => join(filters, ','),
			Self::Language(tag) => language_tag(tag).map(ToOwned::to_owned),
			Self::ArrivalDate(instant) | Self::DepartureDate(instant) => format_instant(*instant),
			Self::RequestsAlternateRoutes => Some("true".into()),
			Self::TransportType(transport_type) => Some(transport_type.to_string()),
			Self::SearchLocation(location) | Self::UserLocation(location) =>
				Some(location.to_string()),
			Self::SearchRegion(region) => Some(region.to_string()),
			Self::Avoid(avoid) => join(avoid, ','),
		}
	}
}

/// Joins coordinates with `|`, the separator used by coordinate-list parameters.
pub(crate) fn join_locations(locations: &[Location]) -> Option<String> {
	join(locations, '|')
}

fn join<T>(values: &[T], separator: char) -> Option<String>
where
	T: Display,
{
	if values.is_empty() {
		return None;
	}

	let mut buf = String::new();

	for (idx, value) in values.iter().enumerate() {
		if idx > 0 {
			buf.push(separator);
		}

		buf.push_str(&value.to_string());
	}

	Some(buf)
}

// The root tag (empty or `und`) means no preference.
fn language_tag(tag: &str) -> Option<&str> {
	let tag = tag.trim();

	(!tag.is_empty() && !tag.eq_ignore_ascii_case("und")).then_some(tag)
}

// Whole seconds in UTC. RFC 3339 has no form for years past 9999; those are left unset.
fn format_instant(instant: OffsetDateTime) -> Option<String> {
	instant.to_offset(UtcOffset::UTC).replace_nanosecond(0).ok()?.format(&Rfc3339).ok()
}
