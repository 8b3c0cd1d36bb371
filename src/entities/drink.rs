//! Drink entity - The catalog of drinks that orders can reference.
//!
//! Drink names are unique. Prices are read live whenever an order total is
//! computed, so changing a price here changes every order that references it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Drink database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drinks")]
pub struct Model {
    /// Unique identifier for the drink
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Mojito"), unique across the catalog
    #[sea_orm(unique)]
    pub name: String,
    /// Current unit price
    pub price: f64,
}

/// Defines relationships between Drink and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One drink appears in many order lines
    #[sea_orm(has_many = "super::order_drink::Entity")]
    OrderDrinks,
}

impl Related<super::order_drink::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDrinks.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_drink::Relation::Order.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_drink::Relation::Drink.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
