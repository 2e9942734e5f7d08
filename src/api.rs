use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, NewPlace, Place, PickedLocation};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn create_place(&self, place: NewPlace) -> Result<Place, Error>;
    async fn list_places(&self) -> Result<Vec<Place>, Error>;
    async fn find_place(&self, id: i64) -> Result<Place, Error>;
}

#[async_trait]
pub trait LocationAPI {
    fn map_preview(&self, coordinates: Coordinates) -> Result<String, Error>;
    async fn resolve_address(&self, coordinates: Coordinates) -> Result<String, Error>;
    async fn pick_location(&self, coordinates: Coordinates) -> Result<PickedLocation, Error>;
}

pub trait API: PlaceAPI + LocationAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
