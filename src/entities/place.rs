use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};

/// A saved place. Only ever built from a stored row, so `id` is always the
/// one the store assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: i64,
    pub title: String,
    pub image_uri: String,
    pub address: String,
    pub location: Coordinates,
}

/// A place that has not been persisted yet. It carries no id: the store
/// assigns one on insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlace {
    pub title: String,
    pub image_uri: String,
    pub address: String,
    pub location: Coordinates,
}

impl NewPlace {
    pub fn new(
        title: impl Into<String>,
        image_uri: impl Into<String>,
        address: impl Into<String>,
        location: Coordinates,
    ) -> Self {
        Self {
            title: title.into(),
            image_uri: image_uri.into(),
            address: address.into(),
            location,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(invalid_input_error("title must not be empty"));
        }

        if self.image_uri.trim().is_empty() {
            return Err(invalid_input_error("image uri must not be empty"));
        }

        if !self.location.is_finite() {
            return Err(invalid_input_error("coordinates must be finite numbers"));
        }

        Ok(())
    }

    pub fn into_place(self, id: i64) -> Place {
        Place {
            id,
            title: self.title,
            image_uri: self.image_uri,
            address: self.address,
            location: self.location,
        }
    }
}
