use serde::{Deserialize, Serialize};

use crate::{
    config::GoogleMapsConfig,
    entities::Coordinates,
    error::{geocoding_error, not_found_error, upstream_error, Error},
};

const PREVIEW_ZOOM: u8 = 14;
const PREVIEW_SIZE: &str = "400x200";
const PREVIEW_MAP_TYPE: &str = "roadmap";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
}

/// Static map image centred on `coordinates` with a single red marker.
pub fn map_preview_url(config: &GoogleMapsConfig, coordinates: Coordinates) -> String {
    let center: String = coordinates.into();

    format!(
        "{}/maps/api/staticmap?center={}&zoom={}&size={}&maptype={}&markers=color:red%7Clabel:S%7C{}&key={}",
        config.api_base, center, PREVIEW_ZOOM, PREVIEW_SIZE, PREVIEW_MAP_TYPE, center, config.api_key
    )
}

#[tracing::instrument(skip(config))]
pub async fn reverse_geocode(
    config: &GoogleMapsConfig,
    coordinates: Coordinates,
) -> Result<String, Error> {
    let latlng: String = coordinates.into();
    let url = format!("{}/maps/api/geocode/json", config.api_base);

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("latlng", latlng)])
        .query(&[("key", &config.api_key)])
        .send()
        .await?;

    if !res.status().is_success() {
        tracing::warn!("geocoding request failed with {}", res.status());
        return Err(geocoding_error());
    }

    if let Some(address) = &config.placeholder_address {
        return Ok(address.clone());
    }

    let data: Response<Vec<GeocodeResult>> = res.json().await?;

    match data.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" => return Err(not_found_error()),
        _ => return Err(upstream_error()),
    }

    let first = data
        .results
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| upstream_error())?;

    Ok(first.formatted_address)
}
