//! JSON bodies for requests no handler answers.

use crate::api::error::MessageBody;
use axum::{
    Json,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Router fallback: unknown paths get a 404 with a `{msg}` body.
pub async fn not_found(method: Method, uri: Uri) -> (StatusCode, Json<MessageBody>) {
    debug!(%method, %uri, "no route");
    (
        StatusCode::NOT_FOUND,
        Json(MessageBody::new(format!("No route for {method} {}", uri.path()))),
    )
}

/// Response mapper: replaces the empty body axum sends for a known path with an
/// unsupported method. The `Allow` header is carried over.
pub async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageBody::new("Method not allowed")),
    )
        .into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}
