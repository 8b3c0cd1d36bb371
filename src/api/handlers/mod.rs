//! Request handlers, one module per resource.

/// `/drink` endpoints
pub mod drinks;
/// 404/405 responses
pub mod fallback;
/// `/orders` endpoints
pub mod orders;
/// `/` sitemap
pub mod sitemap;
/// `/user` endpoints
pub mod users;
