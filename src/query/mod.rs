//! Catalog queries.
//!
//! Every query takes the [`crate::types::Catalog`] explicitly. All of them are pure reads except
//! [`apply_discount`] / [`apply_discount_to_toys`], which update prices in place.
//!
//! Each named query is a fixed-parameter specialisation of a category-generic one:
//!
//! | query                          | generic form                                   |
//! |--------------------------------|------------------------------------------------|
//! | [`books_with_price()`]         | [`products_priced_above()`]                    |
//! | [`orders_with_baby_products()`]| [`orders_containing()`]                        |
//! | [`apply_discount_to_toys()`]   | [`apply_discount()`]                           |
//! | [`cheapest_book()`]            | [`cheapest_in()`]                              |
//! | [`recent_orders()`]            | [`most_recent_orders()`]                       |
//! | [`books_stats()`]              | [`price_stats()`]                              |
//! | [`orders_products_map()`]      | n/a                                            |
//! | [`products_by_category()`]     | n/a                                            |
//!
//! ## Example
//!
//! ```rust
//! use catalog_queries::query::{apply_discount_to_toys, books_with_price, cheapest_book};
//! use catalog_queries::types::{category, Catalog, Product};
//!
//! let mut catalog = Catalog::new(
//!     vec![],
//!     vec![
//!         Product::new(1, "Tome", category::BOOKS, 150.0),
//!         Product::new(2, "Pamphlet", category::BOOKS, 50.0),
//!         Product::new(3, "Kite", category::TOYS, 20.0),
//!     ],
//!     vec![],
//! );
//!
//! let expensive: Vec<_> = books_with_price(&catalog).iter().map(|p| p.id).collect();
//! assert_eq!(expensive, vec![1]);
//! assert_eq!(cheapest_book(&catalog).map(|p| p.id), Some(2));
//!
//! let toys = apply_discount_to_toys(&mut catalog);
//! assert_eq!((toys[0].id, toys[0].price), (3, 10.0));
//! ```

pub mod filter;
pub mod group;
pub mod map;
pub mod reduce;
pub mod sort;

pub use filter::{books_with_price, orders_containing, orders_with_baby_products, products_priced_above, BOOK_PRICE_THRESHOLD};
pub use group::{orders_products_map, products_by_category};
pub use map::{apply_discount, apply_discount_to_toys, TOY_DISCOUNT_FACTOR};
pub use reduce::{books_stats, cheapest_book, cheapest_in, price_stats, SummaryStatistics};
pub use sort::{most_recent_orders, recent_orders, RECENT_ORDERS_LIMIT};
