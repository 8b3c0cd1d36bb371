//! Drink catalog - Handles all drink-related operations.
//!
//! Drinks are the priced items orders are built from. Names are unique across the
//! catalog: the check is done up front for a clear error, and the database
//! `UNIQUE` constraint catches the race where two requests insert the same name
//! concurrently.

use crate::{
    entities::{Drink, OrderDrink, drink, order_drink},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Deserialize;
use tracing::{debug, info};

/// Input for [`create_drink`]. Both fields are required; they are optional here
/// so a missing field is reported as a validation error instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewDrink {
    /// Display name
    pub name: Option<String>,
    /// Unit price
    pub price: Option<f64>,
}

/// Partial update for [`update_drink`]. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DrinkPatch {
    /// New display name
    pub name: Option<String>,
    /// New unit price
    pub price: Option<f64>,
}

impl DrinkPatch {
    /// True when the patch would not change anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: "Drink name cannot be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidPrice { price });
    }
    Ok(price)
}

/// Maps a failed write to `DrinkNameTaken` when the `UNIQUE` constraint fired.
fn map_name_conflict(err: DbErr, name: &str) -> Error {
    if Error::is_unique_violation(&err) {
        Error::DrinkNameTaken {
            name: name.to_string(),
        }
    } else {
        err.into()
    }
}

/// Retrieves every drink in the catalog, ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_drinks(db: &DatabaseConnection) -> Result<Vec<drink::Model>> {
    Drink::find()
        .order_by_asc(drink::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a drink by id, returning None if it does not exist.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_drink_by_id(
    db: &DatabaseConnection,
    drink_id: i64,
) -> Result<Option<drink::Model>> {
    Drink::find_by_id(drink_id).one(db).await.map_err(Into::into)
}

/// Retrieves a drink by id, failing with `DrinkNotFound` if it does not exist.
///
/// # Errors
/// Returns `DrinkNotFound` for an unknown id, or an error if the query fails.
pub async fn get_drink(db: &DatabaseConnection, drink_id: i64) -> Result<drink::Model> {
    get_drink_by_id(db, drink_id)
        .await?
        .ok_or(Error::DrinkNotFound { id: drink_id })
}

/// Finds a drink by its exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_drink_by_name<C>(db: &C, name: &str) -> Result<Option<drink::Model>>
where
    C: ConnectionTrait,
{
    Drink::find()
        .filter(drink::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new drink.
///
/// # Errors
/// Returns an error if:
/// - `name` or `price` is missing
/// - The name is empty or whitespace-only
/// - The price is negative or not finite (NaN, infinity)
/// - A drink with the same name already exists
/// - The database insert fails
pub async fn create_drink(db: &DatabaseConnection, input: NewDrink) -> Result<drink::Model> {
    let name = input.name.ok_or(Error::MissingField { field: "name" })?;
    let price = input.price.ok_or(Error::MissingField { field: "price" })?;
    let name = validate_name(&name)?;
    let price = validate_price(price)?;

    if get_drink_by_name(db, &name).await?.is_some() {
        return Err(Error::DrinkNameTaken { name });
    }

    let drink = drink::ActiveModel {
        name: Set(name.clone()),
        price: Set(price),
        ..Default::default()
    };
    let created = drink
        .insert(db)
        .await
        .map_err(|e| map_name_conflict(e, &name))?;

    info!(drink_id = created.id, name = %created.name, price = created.price, "Created drink");
    Ok(created)
}

/// Applies a partial update to an existing drink.
///
/// Only the fields present in `patch` are validated and written.
///
/// # Errors
/// Returns an error if:
/// - A supplied name is empty or a supplied price is invalid
/// - The drink does not exist
/// - The new name belongs to another drink
/// - The database update fails
pub async fn update_drink(
    db: &DatabaseConnection,
    drink_id: i64,
    patch: DrinkPatch,
) -> Result<drink::Model> {
    let new_name = patch.name.as_deref().map(validate_name).transpose()?;
    let new_price = patch.price.map(validate_price).transpose()?;

    let existing = get_drink(db, drink_id).await?;
    if patch.is_empty() {
        debug!(drink_id, "Empty drink patch, nothing to update");
        return Ok(existing);
    }

    let mut drink: drink::ActiveModel = existing.into();

    if let Some(name) = new_name {
        if let Some(other) = get_drink_by_name(db, &name).await? {
            if other.id != drink_id {
                return Err(Error::DrinkNameTaken { name });
            }
        }
        drink.name = Set(name);
    }
    if let Some(price) = new_price {
        drink.price = Set(price);
    }

    let updated = drink.update(db).await.map_err(|e| {
        let name = patch.name.as_deref().unwrap_or_default().trim().to_string();
        map_name_conflict(e, &name)
    })?;

    info!(drink_id, name = %updated.name, price = updated.price, "Updated drink");
    Ok(updated)
}

/// Deletes a drink and every order line that references it.
///
/// Orders that contained the drink keep their remaining lines; their totals
/// drop by the removed drink's price. Both deletes run in one transaction.
///
/// # Errors
/// Returns an error if the drink does not exist or a database operation fails.
pub async fn delete_drink(db: &DatabaseConnection, drink_id: i64) -> Result<drink::Model> {
    let txn = db.begin().await?;

    let drink = Drink::find_by_id(drink_id)
        .one(&txn)
        .await?
        .ok_or(Error::DrinkNotFound { id: drink_id })?;

    let lines = OrderDrink::delete_many()
        .filter(order_drink::Column::DrinkId.eq(drink_id))
        .exec(&txn)
        .await?;

    Drink::delete_by_id(drink_id).exec(&txn).await?;

    txn.commit().await?;

    info!(
        drink_id,
        name = %drink.name,
        order_lines_removed = lines.rows_affected,
        "Deleted drink"
    );
    Ok(drink)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_drink(name: &str, price: f64) -> NewDrink {
        NewDrink {
            name: Some(name.to_string()),
            price: Some(price),
        }
    }

    #[tokio::test]
    async fn test_create_drink_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        // Missing fields
        let result = create_drink(
            &db,
            NewDrink {
                name: None,
                price: Some(1.0),
            },
        )
        .await;
        assert!(matches!(result, Err(Error::MissingField { field: "name" })));

        let result = create_drink(
            &db,
            NewDrink {
                name: Some("Mojito".to_string()),
                price: None,
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(Error::MissingField { field: "price" })
        ));

        // Whitespace-only name
        let result = create_drink(&db, new_drink("   ", 1.0)).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        // Negative, NaN and infinite prices
        let result = create_drink(&db, new_drink("Mojito", -1.0)).await;
        assert!(matches!(result, Err(Error::InvalidPrice { price: -1.0 })));
        let result = create_drink(&db, new_drink("Mojito", f64::NAN)).await;
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));
        let result = create_drink(&db, new_drink("Mojito", f64::INFINITY)).await;
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_drink_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let mojito = create_drink(&db, new_drink("  Mojito ", 7.5)).await?;
        let water = create_drink(&db, new_drink("Water", 0.0)).await?;

        assert_eq!(mojito.name, "Mojito");
        assert_eq!(mojito.price, 7.5);
        assert_eq!(water.price, 0.0);
        assert_ne!(mojito.id, water.id);

        let json = serde_json::to_value(&mojito).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": mojito.id, "name": "Mojito", "price": 7.5})
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_name_leaves_catalog_unchanged() -> Result<()> {
        let db = setup_test_db().await?;

        create_drink(&db, new_drink("Mojito", 7.5)).await?;
        let result = create_drink(&db, new_drink("Mojito", 9.0)).await;
        assert!(matches!(result, Err(Error::DrinkNameTaken { ref name }) if name == "Mojito"));

        let drinks = get_all_drinks(&db).await?;
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].price, 7.5);

        Ok(())
    }

    #[tokio::test]
    async fn test_unique_constraint_maps_to_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        create_drink(&db, new_drink("Mojito", 7.5)).await?;

        // Bypass the pre-check to hit the database constraint directly
        let err = drink::ActiveModel {
            name: Set("Mojito".to_string()),
            price: Set(1.0),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();

        assert!(matches!(
            map_name_conflict(err, "Mojito"),
            Error::DrinkNameTaken { .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_update_drink_partial() -> Result<()> {
        let db = setup_test_db().await?;
        let drink = create_test_drink(&db, "Mojito", 7.5).await?;

        // Price only
        let updated = update_drink(
            &db,
            drink.id,
            DrinkPatch {
                name: None,
                price: Some(8.0),
            },
        )
        .await?;
        assert_eq!(updated.name, "Mojito");
        assert_eq!(updated.price, 8.0);

        // Name only
        let updated = update_drink(
            &db,
            drink.id,
            DrinkPatch {
                name: Some("Virgin Mojito".to_string()),
                price: None,
            },
        )
        .await?;
        assert_eq!(updated.name, "Virgin Mojito");
        assert_eq!(updated.price, 8.0);

        // Empty patch returns the stored record
        let unchanged = update_drink(&db, drink.id, DrinkPatch::default()).await?;
        assert_eq!(unchanged, updated);

        // Verify the update persisted
        let retrieved = get_drink(&db, drink.id).await?;
        assert_eq!(retrieved, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_drink_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_drink(
            &db,
            999,
            DrinkPatch {
                name: None,
                price: Some(1.0),
            },
        )
        .await;
        assert!(matches!(result, Err(Error::DrinkNotFound { id: 999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_drink_name_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        let mojito = create_test_drink(&db, "Mojito", 7.5).await?;
        create_test_drink(&db, "Daiquiri", 8.0).await?;

        let result = update_drink(
            &db,
            mojito.id,
            DrinkPatch {
                name: Some("Daiquiri".to_string()),
                price: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::DrinkNameTaken { .. })));

        // Renaming to its own name is fine
        let same = update_drink(
            &db,
            mojito.id,
            DrinkPatch {
                name: Some("Mojito".to_string()),
                price: Some(7.0),
            },
        )
        .await?;
        assert_eq!(same.price, 7.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_drink_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = update_drink(
            &db,
            1,
            DrinkPatch {
                name: Some(String::new()),
                price: None,
            },
        )
        .await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = update_drink(
            &db,
            1,
            DrinkPatch {
                name: None,
                price: Some(-2.0),
            },
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidPrice { price: -2.0 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_drink() -> Result<()> {
        let db = setup_test_db().await?;
        let mojito = create_test_drink(&db, "Mojito", 7.5).await?;
        let water = create_test_drink(&db, "Water", 1.0).await?;

        let deleted = delete_drink(&db, mojito.id).await?;
        assert_eq!(deleted, mojito);

        let drinks = get_all_drinks(&db).await?;
        assert_eq!(drinks, vec![water]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_drink_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = delete_drink(&db, 999).await;
        assert!(matches!(result, Err(Error::DrinkNotFound { id: 999 })));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_drink_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let created = create_test_drink(&db, "Mojito", 7.5).await?;

        let found = get_drink_by_name(&db, "Mojito").await?;
        assert_eq!(found, Some(created));

        let not_found = get_drink_by_name(&db, "Negroni").await?;
        assert!(not_found.is_none());

        Ok(())
    }
}
