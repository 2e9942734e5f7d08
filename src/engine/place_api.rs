use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::{NewPlace, Place},
    error::{not_found_error, Error},
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_place(&self, place: NewPlace) -> Result<Place, Error> {
        place.validate()?;

        let result = self.store.insert_place(&place).await?;

        Ok(place.into_place(result.insert_id))
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, Error> {
        self.store.fetch_places().await
    }

    #[tracing::instrument(skip(self))]
    async fn find_place(&self, id: i64) -> Result<Place, Error> {
        let maybe_place = self.store.fetch_place(id).await?;

        maybe_place.ok_or_else(|| not_found_error())
    }
}
