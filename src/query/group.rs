//! Keyed groupings: order sizes and products per category.
//!
//! Both maps are `BTreeMap`s, so iteration is sorted by key (order id, category name).

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Catalog, OrderId, ProductId};

/// Maps each order id to the number of product entries in that order.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateOrderId`] on the first order id seen twice; no partial map
/// is returned.
pub fn orders_products_map(catalog: &Catalog) -> CatalogResult<BTreeMap<OrderId, usize>> {
    let mut out = BTreeMap::new();
    for order in &catalog.orders {
        match out.entry(order.id) {
            Entry::Vacant(slot) => {
                slot.insert(order.product_count());
            }
            Entry::Occupied(_) => {
                warn!(order = order.id, "duplicate order id");
                return Err(CatalogError::DuplicateOrderId { id: order.id });
            }
        }
    }
    Ok(out)
}

/// Groups product ids by category name.
///
/// Ids within a group keep collection order.
pub fn products_by_category(catalog: &Catalog) -> BTreeMap<String, Vec<ProductId>> {
    catalog
        .products
        .iter()
        .fold(BTreeMap::new(), |mut acc: BTreeMap<String, Vec<ProductId>>, p| {
            acc.entry(p.category.clone()).or_default().push(p.id);
            acc
        })
}
