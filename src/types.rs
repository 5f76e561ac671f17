//! Core data model types for the catalog.
//!
//! A [`Catalog`] owns three ordered collections: customers, products and orders. Orders refer
//! to products by [`ProductId`] into the catalog's single product table, so mutating a
//! product's price is observed through every order that lists it.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Identifier of a [`Product`].
pub type ProductId = u32;
/// Identifier of an [`Order`].
pub type OrderId = u32;
/// Identifier of a [`Customer`].
pub type CustomerId = u32;

/// Well-known category names.
pub mod category {
    pub const BOOKS: &str = "Books";
    pub const TOYS: &str = "Toys";
    pub const BABY: &str = "Baby";
    pub const GAMES: &str = "Games";
    pub const GROCERY: &str = "Grocery";
}

/// A catalog customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Loyalty tier; higher is better.
    pub tier: u32,
}

impl Customer {
    /// Create a new customer.
    pub fn new(id: CustomerId, name: impl Into<String>, tier: u32) -> Self {
        Self {
            id,
            name: name.into(),
            tier,
        }
    }
}

/// A sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category name, e.g. [`category::BOOKS`].
    pub category: String,
    pub price: f64,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    /// Whether the product belongs to `category` (exact, case-sensitive match).
    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

/// A customer order.
///
/// `products` holds ids into [`Catalog::products`], in the order they were added to the order.
/// The same id may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_date: NaiveDate,
    pub customer_id: CustomerId,
    pub products: Vec<ProductId>,
}

impl Order {
    /// Create a new order.
    pub fn new(id: OrderId, order_date: NaiveDate, customer_id: CustomerId, products: Vec<ProductId>) -> Self {
        Self {
            id,
            order_date,
            customer_id,
            products,
        }
    }

    /// Number of product entries in the order (duplicates counted).
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// In-memory catalog: the fixture every query reads from.
///
/// Collections keep insertion order; queries that preserve "collection order" use it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Catalog {
    /// Create a catalog from its three collections.
    ///
    /// No invariants are checked here; call [`Catalog::validate`] for that.
    pub fn new(customers: Vec<Customer>, products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Looks up a customer by id.
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Iterate products of `category` in collection order.
    pub fn products_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| p.is_in(category))
    }

    /// Resolve an order's product ids against the product table.
    ///
    /// Ids with no matching product are skipped.
    pub fn order_products<'a>(&'a self, order: &'a Order) -> impl Iterator<Item = &'a Product> + 'a {
        order.products.iter().filter_map(move |id| self.product(*id))
    }

    /// Checks the catalog invariants:
    ///
    /// - customer, product and order ids are unique within their collections
    /// - every product price is finite
    /// - every order's customer exists
    /// - every product id listed by an order exists
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut customer_ids = HashSet::with_capacity(self.customers.len());
        for c in &self.customers {
            if !customer_ids.insert(c.id) {
                return Err(CatalogError::DuplicateCustomerId { id: c.id });
            }
        }

        let mut product_ids = HashSet::with_capacity(self.products.len());
        for p in &self.products {
            if !product_ids.insert(p.id) {
                return Err(CatalogError::DuplicateProductId { id: p.id });
            }
            if !p.price.is_finite() {
                return Err(CatalogError::InvalidPrice {
                    product: p.id,
                    price: p.price,
                });
            }
        }

        let mut order_ids = HashSet::with_capacity(self.orders.len());
        for o in &self.orders {
            if !order_ids.insert(o.id) {
                return Err(CatalogError::DuplicateOrderId { id: o.id });
            }
            if !customer_ids.contains(&o.customer_id) {
                return Err(CatalogError::UnknownCustomer {
                    order: o.id,
                    customer: o.customer_id,
                });
            }
            if let Some(missing) = o.products.iter().find(|id| !product_ids.contains(*id)) {
                return Err(CatalogError::UnknownProduct {
                    order: o.id,
                    product: *missing,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{category, Catalog, Customer, Order, Product};
    use crate::error::CatalogError;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![Customer::new(1, "Ada", 1)],
            vec![
                Product::new(1, "Book", category::BOOKS, 10.0),
                Product::new(2, "Rattle", category::BABY, 5.0),
            ],
            vec![Order::new(10, day(1), 1, vec![1, 2, 1])],
        )
    }

    #[test]
    fn lookups_by_id() {
        let c = small_catalog();
        assert_eq!(c.product(2).map(|p| p.name.as_str()), Some("Rattle"));
        assert!(c.product(3).is_none());
        assert_eq!(c.customer(1).map(|c| c.tier), Some(1));
    }

    #[test]
    fn order_products_resolves_in_order_and_skips_unknown_ids() {
        let mut c = small_catalog();
        c.orders[0].products.push(99);
        let order = c.orders[0].clone();
        let ids: Vec<_> = c.order_products(&order).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 1]);
    }

    #[test]
    fn validate_accepts_consistent_catalog() {
        assert!(small_catalog().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_product_id() {
        let mut c = small_catalog();
        c.products.push(Product::new(1, "Other", category::TOYS, 1.0));
        assert!(matches!(c.validate(), Err(CatalogError::DuplicateProductId { id: 1 })));
    }

    #[test]
    fn validate_rejects_non_finite_prices() {
        for price in [f64::NAN, -f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut c = small_catalog();
            c.products[1].price = price;
            match c.validate() {
                Err(CatalogError::InvalidPrice { product, .. }) => assert_eq!(product, 2),
                other => panic!("price {price}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn validate_rejects_dangling_references() {
        let mut c = small_catalog();
        c.orders.push(Order::new(11, day(2), 1, vec![7]));
        assert!(matches!(
            c.validate(),
            Err(CatalogError::UnknownProduct { order: 11, product: 7 })
        ));

        let mut c = small_catalog();
        c.orders[0].customer_id = 42;
        assert!(matches!(
            c.validate(),
            Err(CatalogError::UnknownCustomer { order: 10, customer: 42 })
        ));
    }
}
