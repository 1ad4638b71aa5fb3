//! Wire data model: coordinates, places, endpoint payloads, and enumerations.

pub mod category;
pub mod location;
pub mod place;
pub mod response;

pub use category::*;
pub use location::*;
pub use place::*;
pub use response::*;
