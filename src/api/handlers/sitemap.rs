use crate::api::routes::ENDPOINTS;
use axum::Json;
use serde::Serialize;

/// Index of the available endpoints.
#[derive(Debug, Serialize)]
pub struct Sitemap {
    /// `"METHOD /path"` entries
    pub endpoints: Vec<String>,
}

/// `GET /` - lists every route the service answers.
pub async fn sitemap() -> Json<Sitemap> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(method, path)| format!("{method} {path}"))
        .collect();
    Json(Sitemap { endpoints })
}
