//! Seed data loading from config.toml
//!
//! The seed file lists drinks and users that should exist when the service
//! starts. Entries already present (matched by drink name or user email) are
//! left alone, so seeding can run on every start.

use crate::{
    core::{
        drink::{self, NewDrink},
        user,
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Seed file used when `SEED_FILE` is not set.
pub const DEFAULT_SEED_FILE: &str = "config.toml";

/// Structure of the whole seed file
#[derive(Debug, Default, Deserialize)]
pub struct SeedConfig {
    /// Drinks to place in the catalog
    #[serde(default)]
    pub drinks: Vec<DrinkSeed>,
    /// Users to create
    #[serde(default)]
    pub users: Vec<UserSeed>,
}

/// A single `[[drinks]]` entry
#[derive(Debug, Deserialize, Clone)]
pub struct DrinkSeed {
    /// Drink name
    pub name: String,
    /// Unit price
    pub price: f64,
}

/// A single `[[users]]` entry
#[derive(Debug, Deserialize, Clone)]
pub struct UserSeed {
    /// Login email
    pub email: String,
    /// Stored credential
    pub password: String,
    /// Whether the account is active
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// How many records a seeding run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Drinks inserted
    pub drinks: usize,
    /// Users inserted
    pub users: usize,
}

/// Returns the seed file path from `SEED_FILE` or the default.
#[must_use]
pub fn get_seed_path() -> String {
    std::env::var("SEED_FILE").unwrap_or_else(|_| DEFAULT_SEED_FILE.to_string())
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load seed data from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file {}: {e}", path_ref.display()),
    })
}

/// Loads the seed file if it exists; a missing file yields an empty config.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_seed_config_if_present<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        warn!("Seed file {} not found, skipping seeding", path_ref.display());
        return Ok(SeedConfig::default());
    }
    load_seed_config(path_ref)
}

/// Inserts every seed entry that does not exist yet.
///
/// # Errors
/// Returns an error if an entry is invalid or a database operation fails.
pub async fn seed_database(db: &DatabaseConnection, config: &SeedConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for seed in &config.drinks {
        if drink::get_drink_by_name(db, seed.name.trim()).await?.is_some() {
            debug!("Drink '{}' already present, skipping", seed.name);
            continue;
        }
        drink::create_drink(
            db,
            NewDrink {
                name: Some(seed.name.clone()),
                price: Some(seed.price),
            },
        )
        .await?;
        summary.drinks += 1;
    }

    for seed in &config.users {
        if user::get_user_by_email(db, seed.email.trim()).await?.is_some() {
            debug!("User '{}' already present, skipping", seed.email);
            continue;
        }
        user::create_user(db, seed.email.clone(), seed.password.clone(), seed.is_active).await?;
        summary.users += 1;
    }

    info!(
        drinks = summary.drinks,
        users = summary.users,
        "Seeding complete"
    );
    Ok(summary)
}
