//! Order entity - A named collection of drinks.
//!
//! The row itself only holds the optional name. Its drinks live in
//! [`super::order_drink`] and the total is derived on every read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Optional label supplied by the client (e.g., "Party")
    pub name: Option<String>,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One order owns many order lines
    #[sea_orm(has_many = "super::order_drink::Entity")]
    OrderDrinks,
}

impl Related<super::order_drink::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDrinks.def()
    }
}

impl Related<super::drink::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_drink::Relation::Drink.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_drink::Relation::Order.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
