//! CSV catalog ingestion.
//!
//! A CSV catalog is a directory holding three tables, each with a header row:
//!
//! - `customers.csv`: `id,name,tier`
//! - `products.csv`: `id,name,category,price`
//! - `orders.csv`: `id,order_date,customer_id,products`
//!
//! `order_date` is `YYYY-MM-DD`; `products` is a `;`-separated list of product ids (an empty
//! cell means an order without products). Column order may differ from the above.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{Catalog, Customer, Order, Product, ProductId};

pub const CUSTOMERS_FILE: &str = "customers.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const ORDERS_FILE: &str = "orders.csv";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ingest a CSV catalog directory and validate it.
pub fn ingest_catalog_csv_from_dir(dir: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let dir = dir.as_ref();
    let customers = read_customers(&mut open(&dir.join(CUSTOMERS_FILE))?)?;
    let products = read_products(&mut open(&dir.join(PRODUCTS_FILE))?)?;
    let orders = read_orders(&mut open(&dir.join(ORDERS_FILE))?)?;

    let catalog = Catalog::new(customers, products, orders);
    catalog.validate()?;
    Ok(catalog)
}

fn open(path: &Path) -> CatalogResult<csv::Reader<std::fs::File>> {
    Ok(reader_builder().from_path(path)?)
}

/// Reader settings used for every catalog table.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Read the customers table.
pub fn read_customers<R: Read>(rdr: &mut csv::Reader<R>) -> CatalogResult<Vec<Customer>> {
    Ok(rdr.deserialize().collect::<Result<Vec<Customer>, _>>()?)
}

/// Read the products table.
pub fn read_products<R: Read>(rdr: &mut csv::Reader<R>) -> CatalogResult<Vec<Product>> {
    Ok(rdr.deserialize().collect::<Result<Vec<Product>, _>>()?)
}

#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: u32,
    order_date: String,
    customer_id: u32,
    #[serde(default)]
    products: String,
}

/// Read the orders table, parsing dates and product id lists.
pub fn read_orders<R: Read>(rdr: &mut csv::Reader<R>) -> CatalogResult<Vec<Order>> {
    let mut orders = Vec::new();
    for (row_idx0, result) in rdr.deserialize::<OrderRecord>().enumerate() {
        // 1-based, header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let order_date = NaiveDate::parse_from_str(&record.order_date, DATE_FORMAT).map_err(|e| {
            CatalogError::ParseError {
                row: user_row,
                column: "order_date".to_string(),
                raw: record.order_date.clone(),
                message: e.to_string(),
            }
        })?;
        let products = parse_id_list(user_row, &record.products)?;

        orders.push(Order::new(record.id, order_date, record.customer_id, products));
    }
    Ok(orders)
}

fn parse_id_list(row: usize, raw: &str) -> CatalogResult<Vec<ProductId>> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<ProductId>().map_err(|e| CatalogError::ParseError {
                row,
                column: "products".to_string(),
                raw: raw.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}
