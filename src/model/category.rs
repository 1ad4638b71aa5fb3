//! Literal-name enumerations accepted by request options.

// self
use crate::_prelude::*;

/// Error returned when a literal does not name a known enumeration value.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown {kind} value `{value}`.")]
pub struct UnknownVariantError {
	/// Enumeration being parsed.
	pub kind: &'static str,
	/// Rejected input.
	pub value: String,
}

macro_rules! def_literal_enum {
	($(#[$meta:meta])* $name:ident, $kind:literal { $($(#[$vmeta:meta])* $variant:ident => $literal:literal,)+ }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
		}
		impl $name {
			/// Every value in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

			/// Returns the literal name sent on the wire.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $literal,)+
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
		impl FromStr for $name {
			type Err = UnknownVariantError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($literal => Ok(Self::$variant),)+
					_ => Err(UnknownVariantError { kind: $kind, value: s.to_owned() }),
				}
			}
		}
	};
}

def_literal_enum! {
	/// Point-of-interest categories used to include or exclude search results.
	Category, "category" {
		/// An airport.
		Airport => "Airport",
		/// A specific gate at an airport.
		AirportGate => "AirportGate",
		/// A specific named terminal at an airport.
		AirportTerminal => "AirportTerminal",
		/// An amusement park.
		AmusementPark => "AmusementPark",
		/// An automated teller machine.
		Atm => "ATM",
		/// An aquarium.
		Aquarium => "Aquarium",
		/// A bakery.
		Bakery => "Bakery",
		/// A bank.
		Bank => "Bank",
		/// A beach.
		Beach => "Beach",
		/// A brewery.
		Brewery => "Brewery",
		/// A cafe.
		Cafe => "Cafe",
		/// A campground.
		Campground => "Campground",
		/// A car rental location.
		CarRental => "CarRental",
		/// An electric vehicle charger.
		EvCharger => "EVCharger",
		/// A fire station.
		FireStation => "FireStation",
		/// A fitness center.
		FitnessCenter => "FitnessCenter",
		/// A food market.
		FoodMarket => "FoodMarket",
		/// A gas station.
		GasStation => "GasStation",
		/// A hospital.
		Hospital => "Hospital",
		/// A hotel.
		Hotel => "Hotel",
		/// A laundry.
		Laundry => "Laundry",
		/// A library.
		Library => "Library",
		/// A marina.
		Marina => "Marina",
		/// A movie theater.
		MovieTheater => "MovieTheater",
		/// A museum.
		Museum => "Museum",
		/// A national park.
		NationalPark => "NationalPark",
		/// A nightlife venue.
		Nightlife => "Nightlife",
		/// A park.
		Park => "Park",
		/// A parking location for an automobile.
		Parking => "Parking",
		/// A pharmacy.
		Pharmacy => "Pharmacy",
		/// A playground.
		Playground => "Playground",
		/// A police station.
		Police => "Police",
		/// A post office.
		PostOffice => "PostOffice",
		/// A public transportation station.
		PublicTransport => "PublicTransport",
		/// A religious site.
		ReligiousSite => "ReligiousSite",
		/// A restaurant.
		Restaurant => "Restaurant",
		/// A restroom.
		Restroom => "Restroom",
		/// A school.
		School => "School",
		/// A stadium.
		Stadium => "Stadium",
		/// A store.
		Store => "Store",
		/// A theater.
		Theater => "Theater",
		/// A university.
		University => "University",
		/// A winery.
		Winery => "Winery",
		/// A zoo.
		Zoo => "Zoo",
	}
}

def_literal_enum! {
	/// Road features a directions route should avoid.
	Avoid, "avoid" {
		/// Toll roads.
		Tolls => "Tolls",
	}
}

def_literal_enum! {
	/// Mode of transportation used for directions and ETAs.
	TransportType, "transport type" {
		/// Driving directions (service default).
		Automobile => "Automobile",
		/// Walking directions.
		Walking => "Walking",
	}
}

def_literal_enum! {
	/// Result kinds a search may be restricted to.
	ResultType, "result type" {
		/// Points of interest.
		Poi => "Poi",
		/// Street addresses.
		Address => "Address",
	}
}
