use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::{NewPlace, Place};
use crate::error::Error;

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<NewPlace>, JsonRejection>,
) -> Result<Json<Place>, Error> {
    let Json(params) = params?;
    let place = api.create_place(params).await?;

    Ok(place.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places().await?;

    Ok(places.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Place>, Error> {
    let Path(id) = id?;
    let place = api.find_place(id).await?;

    Ok(place.into())
}
