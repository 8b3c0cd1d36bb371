//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod drink;
pub mod order;
pub mod order_drink;
pub mod user;

// Re-export specific types to avoid conflicts
pub use drink::{Column as DrinkColumn, Entity as Drink, Model as DrinkModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use order_drink::{Column as OrderDrinkColumn, Entity as OrderDrink, Model as OrderDrinkModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
