//! Order aggregation - Builds orders from drink references and prices them.
//!
//! An order is stored as one `orders` row plus one `order_drinks` row per
//! referenced drink, in request order. Creation checks every reference before
//! writing anything, and the writes share a single database transaction, so a
//! bad reference never leaves a partial order behind.
//!
//! Totals are never stored. They are summed from the drinks' current prices each
//! time an order is read.

use crate::{
    entities::{Drink, Order, OrderDrink, drink, order, order_drink},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Ids bound per `IN (...)` lookup. Keeps every query under the bind-variable
/// limit of the backend (999 on older `SQLite` builds).
const LOOKUP_CHUNK: usize = 500;

/// Order lines per `INSERT`; each line binds three variables.
const INSERT_CHUNK: usize = 300;

/// Request to create an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewOrder {
    /// Optional label
    #[serde(default)]
    pub name: Option<String>,
    /// Drink ids in the order they should appear; duplicates allowed
    #[serde(default)]
    pub drinks: Vec<i64>,
}

/// An order with its drinks resolved and its total computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    /// Order id
    pub id: i64,
    /// Optional label
    pub name: Option<String>,
    /// Drinks in order, with duplicates
    pub drinks: Vec<drink::Model>,
    /// Sum of the drinks' current prices
    pub total: f64,
}

impl OrderView {
    fn new(order: order::Model, drinks: Vec<drink::Model>) -> Self {
        let total = order_total(&drinks);
        Self {
            id: order.id,
            name: order.name,
            drinks,
            total,
        }
    }
}

/// Sums the prices of `drinks`; an empty slice totals `0`.
#[must_use]
pub fn order_total(drinks: &[drink::Model]) -> f64 {
    drinks.iter().map(|d| d.price).sum()
}

/// Resolves `drink_ids` to drinks, keeping input order and duplicates.
///
/// Fails with `DrinkNotFound` for the first id (in input order) that does not exist.
async fn resolve_drinks<C>(db: &C, drink_ids: &[i64]) -> Result<Vec<drink::Model>>
where
    C: ConnectionTrait,
{
    let unique: Vec<i64> = drink_ids
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut found: HashMap<i64, drink::Model> = HashMap::with_capacity(unique.len());
    for chunk in unique.chunks(LOOKUP_CHUNK) {
        let drinks = Drink::find()
            .filter(drink::Column::Id.is_in(chunk.iter().copied()))
            .all(db)
            .await?;
        found.extend(drinks.into_iter().map(|d| (d.id, d)));
    }

    drink_ids
        .iter()
        .map(|id| {
            found
                .get(id)
                .cloned()
                .ok_or(Error::DrinkNotFound { id: *id })
        })
        .collect()
}

/// Loads order lines joined with their drinks, grouped by order id.
///
/// Lines within each order come back sorted by position.
async fn drinks_by_order<C>(
    db: &C,
    order_id: Option<i64>,
) -> Result<HashMap<i64, Vec<drink::Model>>>
where
    C: ConnectionTrait,
{
    let mut query = OrderDrink::find()
        .order_by_asc(order_drink::Column::OrderId)
        .order_by_asc(order_drink::Column::Position);
    if let Some(order_id) = order_id {
        query = query.filter(order_drink::Column::OrderId.eq(order_id));
    }

    let rows = query.find_also_related(Drink).all(db).await?;

    let mut grouped: HashMap<i64, Vec<drink::Model>> = HashMap::new();
    for (line, drink) in rows {
        // Lines always reference a live drink since deletes cascade
        if let Some(drink) = drink {
            grouped.entry(line.order_id).or_default().push(drink);
        }
    }
    Ok(grouped)
}

/// Creates an order from a name and a list of drink ids.
///
/// Every id is checked before anything is written; the order row and its lines
/// are inserted in one transaction.
///
/// # Errors
/// Returns `DrinkNotFound` naming the first unknown id, or an error if a
/// database operation fails.
pub async fn create_order(db: &DatabaseConnection, input: NewOrder) -> Result<OrderView> {
    let txn = db.begin().await?;

    let drinks = resolve_drinks(&txn, &input.drinks).await?;

    let order = order::ActiveModel {
        name: Set(input.name),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let lines: Vec<order_drink::ActiveModel> = (0..)
        .zip(&drinks)
        .map(|(position, drink)| order_drink::ActiveModel {
            order_id: Set(order.id),
            position: Set(position),
            drink_id: Set(drink.id),
        })
        .collect();
    for chunk in lines.chunks(INSERT_CHUNK) {
        OrderDrink::insert_many(chunk.iter().cloned())
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;

    let view = OrderView::new(order, drinks);
    info!(
        order_id = view.id,
        drinks = view.drinks.len(),
        total = view.total,
        "Created order"
    );
    Ok(view)
}

/// Retrieves all orders with their drinks and current totals, ordered by id.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn get_all_orders(db: &DatabaseConnection) -> Result<Vec<OrderView>> {
    let orders = Order::find().order_by_asc(order::Column::Id).all(db).await?;
    let mut drinks = drinks_by_order(db, None).await?;
    debug!(orders = orders.len(), "Loaded orders");

    Ok(orders
        .into_iter()
        .map(|order| {
            let lines = drinks.remove(&order.id).unwrap_or_default();
            OrderView::new(order, lines)
        })
        .collect())
}

/// Retrieves one order with its drinks and current total.
///
/// # Errors
/// Returns `OrderNotFound` if the order does not exist, or an error if a
/// database query fails.
pub async fn get_order(db: &DatabaseConnection, order_id: i64) -> Result<OrderView> {
    let order = Order::find_by_id(order_id)
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { id: order_id })?;
    let lines = drinks_by_order(db, Some(order_id))
        .await?
        .remove(&order_id)
        .unwrap_or_default();
    Ok(OrderView::new(order, lines))
}
