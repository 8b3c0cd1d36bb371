//! Order line entity - Join table between orders and drinks.
//!
//! A row says "slot `position` of order `order_id` holds drink `drink_id`".
//! The position keeps request order and lets the same drink appear twice.
//! Rows belong to their order and go away with it or with the drink.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order line database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_drinks")]
pub struct Model {
    /// Owning order
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    /// Zero-based slot within the order
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i32,
    /// Referenced drink
    pub drink_id: i64,
}

/// Defines relationships between order lines and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line belongs to one order
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Order,
    /// Each line references one drink
    #[sea_orm(
        belongs_to = "super::drink::Entity",
        from = "Column::DrinkId",
        to = "super::drink::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Drink,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::drink::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
