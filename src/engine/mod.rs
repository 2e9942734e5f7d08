mod location_api;
mod place_api;

use crate::{api::API, config::GoogleMapsConfig, db::PlaceStore, error::Error};

#[derive(Debug)]
pub struct Engine {
    store: PlaceStore,
    maps: GoogleMapsConfig,
}

impl Engine {
    /// Wraps an already connected store. The schema is initialized here, so
    /// nothing can reach the store before the `places` table exists.
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(store: PlaceStore, maps: GoogleMapsConfig) -> Result<Self, Error> {
        store.initialize().await?;

        Ok(Self { store, maps })
    }
}

impl API for Engine {}
