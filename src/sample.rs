//! Built-in sample catalog.
//!
//! [`sample_catalog`] returns a fresh, deterministic catalog on every call, so callers that
//! mutate it (e.g. [`crate::query::apply_discount_to_toys`]) never affect each other.

use chrono::NaiveDate;

use crate::types::{category, Catalog, Customer, Order, Product};

/// Build the sample catalog used by the `catalog-report` binary.
///
/// Contents at a glance:
///
/// - 4 customers
/// - 12 products across Books, Toys, Baby, Games and Grocery
/// - 7 orders between 2021-02-01 and 2021-04-01 (orders 4 and 5 share a date)
pub fn sample_catalog() -> Catalog {
    let customers = vec![
        Customer::new(1, "Stefan Walker", 1),
        Customer::new(2, "Daija Von", 1),
        Customer::new(3, "Ariane Rodriguez", 2),
        Customer::new(4, "Marques Nikolaus", 2),
    ];

    let products = vec![
        Product::new(1, "Effective Java", category::BOOKS, 102.50),
        Product::new(2, "Clean Architecture", category::BOOKS, 44.99),
        Product::new(3, "The Art of Computer Programming", category::BOOKS, 189.00),
        Product::new(4, "Design Patterns", category::BOOKS, 54.30),
        Product::new(5, "Wooden Train Set", category::TOYS, 68.00),
        Product::new(6, "Puzzle Cube", category::TOYS, 12.40),
        Product::new(7, "Building Blocks", category::TOYS, 140.00),
        Product::new(8, "Baby Stroller", category::BABY, 320.00),
        Product::new(9, "Baby Bottle Set", category::BABY, 18.90),
        Product::new(10, "Board Game Classic", category::GAMES, 35.00),
        Product::new(11, "Chess Set", category::GAMES, 76.25),
        Product::new(12, "Organic Coffee", category::GROCERY, 14.99),
    ];

    let orders = vec![
        Order::new(1, date(2021, 2, 1), 1, vec![1, 5, 9]),
        Order::new(2, date(2021, 2, 14), 2, vec![2, 3]),
        Order::new(3, date(2021, 3, 3), 3, vec![8, 6, 12]),
        Order::new(4, date(2021, 3, 15), 1, vec![10, 11]),
        Order::new(5, date(2021, 3, 15), 4, vec![7, 4, 9]),
        Order::new(6, date(2021, 3, 28), 2, vec![12]),
        Order::new(7, date(2021, 4, 1), 3, vec![3, 1, 2, 4]),
    ];

    Catalog::new(customers, products, orders)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
