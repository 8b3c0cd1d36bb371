/// Database configuration and connection management
pub mod database;

/// Catalog and user seeding from config.toml
pub mod seed;

/// HTTP bind address from environment variables
pub mod server;
