pub mod locations;
pub mod places;
