//! Core business logic - framework-agnostic user, drink and order operations.
//!
//! Every function takes the database handle explicitly; nothing here knows
//! about HTTP.

/// Drink catalog: create, update, delete and list drinks
pub mod drink;
/// Order aggregation: build orders from drink references and price them
pub mod order;
/// User store
pub mod user;
