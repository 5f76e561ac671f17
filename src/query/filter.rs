//! Product and order filtering over a [`crate::types::Catalog`].

use crate::types::{category, Catalog, Order, Product};

/// Price a book must strictly exceed to be returned by [`books_with_price`].
pub const BOOK_PRICE_THRESHOLD: f64 = 100.0;

/// Returns products of `category` whose price is strictly greater than `threshold`.
///
/// Collection order is preserved; the result is empty when nothing matches.
pub fn products_priced_above<'a>(catalog: &'a Catalog, category: &str, threshold: f64) -> Vec<&'a Product> {
    catalog
        .products
        .iter()
        .filter(|p| p.is_in(category))
        .filter(|p| p.price > threshold)
        .collect()
}

/// Books priced above [`BOOK_PRICE_THRESHOLD`].
pub fn books_with_price(catalog: &Catalog) -> Vec<&Product> {
    products_priced_above(catalog, category::BOOKS, BOOK_PRICE_THRESHOLD)
}

/// Returns orders that reference at least one product of `category`.
///
/// Collection order is preserved. Product ids that do not resolve are ignored.
pub fn orders_containing<'a>(catalog: &'a Catalog, category: &str) -> Vec<&'a Order> {
    catalog
        .orders
        .iter()
        .filter(|o| catalog.order_products(o).any(|p| p.is_in(category)))
        .collect()
}

/// Orders containing at least one Baby product.
pub fn orders_with_baby_products(catalog: &Catalog) -> Vec<&Order> {
    orders_containing(catalog, category::BABY)
}
