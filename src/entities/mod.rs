mod location;
mod place;

pub use location::{Coordinates, PickedLocation};
pub use place::{NewPlace, Place};
