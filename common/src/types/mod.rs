pub mod filter;
pub mod geo;
pub mod restaurant;

pub use filter::FilterState;
pub use geo::{Coordinate, Region};
pub use restaurant::{Restaurant, Review};
