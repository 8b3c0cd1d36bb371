//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{
        drink::{self, NewDrink},
        user,
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a drink with the given name and price.
pub async fn create_test_drink(
    db: &DatabaseConnection,
    name: &str,
    price: f64,
) -> Result<entities::drink::Model> {
    drink::create_drink(
        db,
        NewDrink {
            name: Some(name.to_string()),
            price: Some(price),
        },
    )
    .await
}

/// Creates an active user with a fixed password.
pub async fn create_test_user(
    db: &DatabaseConnection,
    email: &str,
) -> Result<entities::user::Model> {
    user::create_user(db, email.to_string(), "password".to_string(), true).await
}

/// Sets up a database with two drinks: "Lemonade" at 2.5 and "Cola" at 3.0.
/// Returns (db, lemonade, cola).
pub async fn setup_with_drinks() -> Result<(
    DatabaseConnection,
    entities::drink::Model,
    entities::drink::Model,
)> {
    let db = setup_test_db().await?;
    let lemonade = create_test_drink(&db, "Lemonade", 2.5).await?;
    let cola = create_test_drink(&db, "Cola", 3.0).await?;
    Ok((db, lemonade, cola))
}
