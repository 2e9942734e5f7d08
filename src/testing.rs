use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{extract::Query, routing::get, Json, Router};
use serde_json::{json, Value};

/// Serves `app` on an ephemeral local port and returns its base url.
pub async fn spawn_upstream(app: Router) -> String {
    let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
        .serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    format!("http://{}", addr)
}

/// Stand-in for the geocoding endpoint. Accepts only `test-key`, and answers
/// with an address derived from the `latlng` it was asked about.
pub fn geocoding_upstream() -> Router {
    Router::new().route("/maps/api/geocode/json", get(geocode))
}

async fn geocode(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    if params.get("key").map(String::as_str) != Some("test-key") {
        return Json(json!({ "status": "REQUEST_DENIED", "results": [] }));
    }

    let latlng = params.get("latlng").cloned().unwrap_or_default();

    Json(json!({
        "status": "OK",
        "results": [
            { "formatted_address": format!("1 Main St near {}", latlng) },
            { "formatted_address": "Somewhere else" }
        ]
    }))
}
