//! Coordinate pairs, bounding regions, and direction waypoints.
//!
//! Text forms use Rust's shortest round-tripping float formatting, which never falls back to
//! exponent notation, so `Location` text parses back to the identical bits.

// std
use std::num::ParseFloatError;
// self
use crate::_prelude::*;

/// Error returned when a coordinate string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CoordinateParseError {
	/// Wrong number of comma-separated components.
	#[error("Expected {expected} comma-separated components, found {found}.")]
	ComponentCount {
		/// Components the format requires.
		expected: usize,
		/// Components present in the input.
		found: usize,
	},
	/// A component is not a decimal number.
	#[error("Coordinate component is not a number.")]
	InvalidNumber(#[from] ParseFloatError),
}

/// Latitude/longitude pair rendered as `"lat,lon"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
	/// Latitude in degrees.
	pub latitude: f64,
	/// Longitude in degrees.
	pub longitude: f64,
}
impl Location {
	/// Creates a new coordinate.
	pub const fn new(latitude: f64, longitude: f64) -> Self {
		Self { latitude, longitude }
	}
}
impl Display for Location {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{},{}", self.latitude, self.longitude)
	}
}
impl FromStr for Location {
	type Err = CoordinateParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [latitude, longitude] = parse_components::<2>(s)?;

		Ok(Self { latitude, longitude })
	}
}

/// Bounding region rendered as `"north,east,south,west"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapRegion {
	/// Northern latitude bound.
	pub north_latitude: f64,
	/// Eastern longitude bound.
	pub east_longitude: f64,
	/// Southern latitude bound.
	pub south_latitude: f64,
	/// Western longitude bound.
	pub west_longitude: f64,
}
impl MapRegion {
	/// Creates a region from its four bounds.
	pub const fn new(
		north_latitude: f64,
		east_longitude: f64,
		south_latitude: f64,
		west_longitude: f64,
	) -> Self {
		Self { north_latitude, east_longitude, south_latitude, west_longitude }
	}
}
impl Display for MapRegion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(
			f,
			"{},{},{},{}",
			self.north_latitude, self.east_longitude, self.south_latitude, self.west_longitude
		)
	}
}
impl FromStr for MapRegion {
	type Err = CoordinateParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let [north, east, south, west] = parse_components::<4>(s)?;

		Ok(Self::new(north, east, south, west))
	}
}

/// Origin or destination for a directions request.
#[derive(Clone, Debug, PartialEq)]
pub enum Waypoint {
	/// Free-text address resolved by the service.
	Address(String),
	/// Exact coordinate.
	Coordinate(Location),
}
impl Display for Waypoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Address(address) => f.write_str(address),
			Self::Coordinate(location) => Display::fmt(location, f),
		}
	}
}
impl From<&str> for Waypoint {
	fn from(value: &str) -> Self {
		Self::Address(value.to_owned())
	}
}
impl From<String> for Waypoint {
	fn from(value: String) -> Self {
		Self::Address(value)
	}
}
impl From<Location> for Waypoint {
	fn from(value: Location) -> Self {
		Self::Coordinate(value)
	}
}

fn parse_components<const N: usize>(s: &str) -> Result<[f64; N], CoordinateParseError> {
	let parts = s.split(',').collect::<Vec<_>>();

	if parts.len() != N {
		return Err(CoordinateParseError::ComponentCount { expected: N, found: parts.len() });
	}

	let mut values = [0.0; N];

	for (slot, part) in values.iter_mut().zip(parts) {
		*slot = part.trim().parse()?;
	}

	Ok(values)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn location_text_is_plain_decimal() {
		assert_eq!(Location::new(37.7857, -122.4011).to_string(), "37.7857,-122.4011");
		assert_eq!(Location::new(1.0, 1.0).to_string(), "1,1");
		assert_eq!(Location::new(1e-7, -2.5e-9).to_string(), "0.0000001,-0.0000000025");
	}

	#[test]
	fn location_text_round_trips_bit_for_bit() {
		let samples = [
			Location::new(51.0453064, 13.7359337),
			Location::new(0.1 + 0.2, -179.99999999999997),
			Location::new(f64::MIN_POSITIVE, 90.0),
			Location::new(-0.0, 1e-300),
		];

		for sample in samples {
			let parsed: Location =
				sample.to_string().parse().expect("Canonical text should parse back.");

			assert_eq!(parsed.latitude.to_bits(), sample.latitude.to_bits());
			assert_eq!(parsed.longitude.to_bits(), sample.longitude.to_bits());
		}
	}

	#[test]
	fn location_parse_rejects_malformed_input() {
		assert_eq!(
			"1,2,3".parse::<Location>(),
			Err(CoordinateParseError::ComponentCount { expected: 2, found: 3 })
		);
		assert!(matches!(
			"north,2".parse::<Location>(),
			Err(CoordinateParseError::InvalidNumber(_))
		));
	}

	#[test]
	fn region_text_orders_bounds() {
		let region = MapRegion::new(38.0, -122.1, 37.5, -122.5);

		assert_eq!(region.to_string(), "38,-122.1,37.5,-122.5");
		assert_eq!(region.to_string().parse::<MapRegion>(), Ok(region));
	}

	#[test]
	fn waypoint_renders_address_or_coordinate() {
		assert_eq!(Waypoint::from("1 Infinite Loop").to_string(), "1 Infinite Loop");
		assert_eq!(
			Waypoint::from(Location::new(37.7857, -122.4011)).to_string(),
			"37.7857,-122.4011"
		);
	}
}
