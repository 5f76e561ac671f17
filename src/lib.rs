//! `catalog-queries` runs filter, aggregation, grouping and sort queries over a small in-memory
//! e-commerce [`types::Catalog`] of customers, orders and products.
//!
//! A catalog comes either from the built-in [`sample::sample_catalog`] or from disk through
//! [`ingestion::ingest_catalog`] (a JSON document or a directory of CSV tables). Queries take
//! the catalog explicitly; none of them rely on global state.
//!
//! ## Queries
//!
//! | # | function                                   | result                                 |
//! |---|--------------------------------------------|----------------------------------------|
//! | 1 | [`query::books_with_price`]                | books priced above 100                 |
//! | 2 | [`query::orders_with_baby_products`]       | orders with at least one Baby product  |
//! | 3 | [`query::apply_discount_to_toys`]          | toys, after halving their price        |
//! | 4 | [`query::cheapest_book`]                   | `Option` of the cheapest book          |
//! | 5 | [`query::recent_orders`]                   | three newest orders                    |
//! | 6 | [`query::books_stats`]                     | [`query::SummaryStatistics`] of books  |
//! | 7 | [`query::orders_products_map`]             | order id → product count               |
//! | 8 | [`query::products_by_category`]            | category → product ids                 |
//!
//! ## Example
//!
//! ```rust
//! use catalog_queries::query::{books_stats, recent_orders};
//! use catalog_queries::sample::sample_catalog;
//!
//! let catalog = sample_catalog();
//! let stats = books_stats(&catalog);
//! assert_eq!(stats.count(), 4);
//!
//! let newest: Vec<_> = recent_orders(&catalog).iter().map(|o| o.id).collect();
//! assert_eq!(newest, vec![7, 6, 4]);
//! ```
//!
//! ## Empty-input conventions
//!
//! - Filters, sorts and groupings return empty collections.
//! - [`query::cheapest_book`] returns `None`.
//! - [`query::SummaryStatistics`] reports `count = 0`, `sum = 0`, `average = 0`,
//!   `max = -inf`, `min = +inf`.
//!
//! ## Modules
//!
//! - [`types`]: data model and the [`types::Catalog`] fixture
//! - [`sample`]: deterministic sample data
//! - [`query`]: the catalog queries
//! - [`ingestion`]: JSON/CSV catalog loading with observer hooks
//! - [`report`]: console report over all queries
//! - [`error`]: error types

pub mod error;
pub mod ingestion;
pub mod query;
pub mod report;
pub mod sample;
pub mod types;

pub use error::{CatalogError, CatalogResult};
