use axum::extract::rejection::QueryRejection;
use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{Coordinates, PickedLocation};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct PreviewResponse {
    url: String,
}

pub async fn preview(
    Extension(api): Extension<DynAPI>,
    coordinates: Result<Query<Coordinates>, QueryRejection>,
) -> Result<Json<PreviewResponse>, Error> {
    let Query(coordinates) = coordinates?;
    let url = api.map_preview(coordinates)?;

    Ok(PreviewResponse { url }.into())
}

pub async fn pick(
    Extension(api): Extension<DynAPI>,
    coordinates: Result<Query<Coordinates>, QueryRejection>,
) -> Result<Json<PickedLocation>, Error> {
    let Query(coordinates) = coordinates?;
    let location = api.pick_location(coordinates).await?;

    Ok(location.into())
}
