use crate::api::{
    AppState,
    handlers::{drinks, fallback, orders, sitemap, users},
};
use axum::{
    Router, middleware,
    routing::{MethodRouter, get},
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Every route served, as `(method, path)`. Drives the `/` sitemap.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/user"),
    ("GET", "/drink"),
    ("POST", "/drink"),
    ("GET", "/drink/:id"),
    ("PUT", "/drink/:id"),
    ("DELETE", "/drink/:id"),
    ("GET", "/orders"),
    ("POST", "/orders"),
    ("GET", "/orders/:id"),
];

/// Registers `method_router` under `path` and under `path` with a trailing
/// slash, so `/drink` and `/drink/` resolve alike.
fn route_lenient(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Builds the full application router with CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new().route("/", get(sitemap::sitemap));
    let router = route_lenient(router, "/user", get(users::list_users));
    let router = route_lenient(
        router,
        "/drink",
        get(drinks::list_drinks).post(drinks::create_drink),
    );
    let router = route_lenient(
        router,
        "/drink/:id",
        get(drinks::get_drink)
            .put(drinks::update_drink)
            .delete(drinks::delete_drink),
    );
    let router = route_lenient(
        router,
        "/orders",
        get(orders::list_orders).post(orders::create_order),
    );
    let router = route_lenient(router, "/orders/:id", get(orders::get_order));

    router
        .fallback(fallback::not_found)
        .layer(middleware::map_response(fallback::method_not_allowed))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
