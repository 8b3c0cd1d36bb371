//! User entity - Accounts known to the service.
//!
//! Users are created outside the HTTP surface (seeding, registration flows) and
//! only listed through the API. The password never leaves the process: it is
//! skipped during serialization along with the activation flag.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login email, unique across all users
    #[sea_orm(unique)]
    pub email: String,
    /// Stored credential, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Whether the account may be used
    #[serde(skip_serializing, default)]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
