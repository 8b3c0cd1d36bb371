//! User store - Creation and listing of user accounts.
//!
//! Accounts are not created through the HTTP API; this module backs seeding and
//! the read-only `/user` listing.

use crate::{
    entities::{User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Retrieves all users ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by exact email.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new user.
///
/// # Errors
/// Returns an error if:
/// - The email or password is empty
/// - A user with the same email already exists
/// - The database insert fails
pub async fn create_user(
    db: &DatabaseConnection,
    email: String,
    password: String,
    is_active: bool,
) -> Result<user::Model> {
    let email = email.trim().to_string();
    if email.is_empty() {
        return Err(Error::Validation {
            message: "User email cannot be empty".to_string(),
        });
    }
    if password.is_empty() {
        return Err(Error::Validation {
            message: "User password cannot be empty".to_string(),
        });
    }

    if get_user_by_email(db, &email).await?.is_some() {
        return Err(Error::EmailTaken { email });
    }

    let user = user::ActiveModel {
        email: Set(email.clone()),
        password: Set(password),
        is_active: Set(is_active),
        ..Default::default()
    };
    let created = user.insert(db).await.map_err(|e| {
        if Error::is_unique_violation(&e) {
            Error::EmailTaken {
                email: email.clone(),
            }
        } else {
            e.into()
        }
    })?;

    info!(user_id = created.id, "Created user");
    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_user_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_user(&db, "  ".to_string(), "secret".to_string(), true).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        let result = create_user(&db, "a@b.c".to_string(), String::new(), true).await;
        assert!(matches!(result, Err(Error::Validation { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_and_list_users() -> Result<()> {
        let db = setup_test_db().await?;

        let alice = create_test_user(&db, "alice@example.com").await?;
        let bob = create_user(&db, "bob@example.com".to_string(), "pw".to_string(), false).await?;

        let users = get_all_users(&db).await?;
        assert_eq!(users, vec![alice, bob.clone()]);
        assert!(!bob.is_active);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "alice@example.com").await?;

        let result = create_test_user(&db, "alice@example.com").await;
        assert!(matches!(result, Err(Error::EmailTaken { .. })));
        assert_eq!(get_all_users(&db).await?.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_user_serialization_hides_credentials() -> Result<()> {
        let db = setup_test_db().await?;
        let user = create_test_user(&db, "alice@example.com").await?;

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": user.id, "email": "alice@example.com"})
        );

        Ok(())
    }
}
