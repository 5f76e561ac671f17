//! In-place price updates.
//!
//! These are the only queries that mutate the catalog. Because orders hold product ids, the
//! new prices are seen through every order that lists a discounted product.

use tracing::debug;

use crate::types::{category, Catalog, Product};

/// Multiplier applied to toy prices by [`apply_discount_to_toys`].
pub const TOY_DISCOUNT_FACTOR: f64 = 0.5;

/// Multiplies the price of every product in `category` by `factor`, in place.
///
/// Returns snapshots of the updated products in collection order. Calling this twice applies
/// the factor twice.
pub fn apply_discount(catalog: &mut Catalog, category: &str, factor: f64) -> Vec<Product> {
    catalog
        .products
        .iter_mut()
        .filter(|p| p.is_in(category))
        .map(|p| {
            let old = p.price;
            p.price *= factor;
            debug!(product = p.id, old_price = old, new_price = p.price, "price updated");
            p.clone()
        })
        .collect()
}

/// Halves the price of every Toys product.
pub fn apply_discount_to_toys(catalog: &mut Catalog) -> Vec<Product> {
    apply_discount(catalog, category::TOYS, TOY_DISCOUNT_FACTOR)
}
