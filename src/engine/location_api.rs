use super::Engine;

use async_trait::async_trait;

use crate::{
    api::LocationAPI,
    entities::{Coordinates, PickedLocation},
    error::{invalid_input_error, Error},
    external::google_maps,
};

fn check_coordinates(coordinates: Coordinates) -> Result<(), Error> {
    if !coordinates.is_finite() {
        return Err(invalid_input_error("coordinates must be finite numbers"));
    }

    Ok(())
}

#[async_trait]
impl LocationAPI for Engine {
    fn map_preview(&self, coordinates: Coordinates) -> Result<String, Error> {
        check_coordinates(coordinates)?;

        Ok(google_maps::map_preview_url(&self.maps, coordinates))
    }

    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self, coordinates: Coordinates) -> Result<String, Error> {
        check_coordinates(coordinates)?;

        google_maps::reverse_geocode(&self.maps, coordinates).await
    }

    #[tracing::instrument(skip(self))]
    async fn pick_location(&self, coordinates: Coordinates) -> Result<PickedLocation, Error> {
        let address = self.resolve_address(coordinates).await?;
        let preview_url = self.map_preview(coordinates)?;

        Ok(PickedLocation {
            location: coordinates,
            address,
            preview_url,
        })
    }
}
