//! Date-ordered order selection.

use crate::types::{Catalog, Order};

/// Number of orders returned by [`recent_orders`].
pub const RECENT_ORDERS_LIMIT: usize = 3;

/// Returns at most `limit` orders, newest `order_date` first.
///
/// The sort is stable: orders sharing a date keep their collection order.
pub fn most_recent_orders(catalog: &Catalog, limit: usize) -> Vec<&Order> {
    let mut orders: Vec<&Order> = catalog.orders.iter().collect();
    orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    orders.truncate(limit);
    orders
}

/// The three most recent orders.
pub fn recent_orders(catalog: &Catalog) -> Vec<&Order> {
    most_recent_orders(catalog, RECENT_ORDERS_LIMIT)
}
