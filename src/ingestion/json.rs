//! JSON catalog ingestion.
//!
//! The input is a single object with optional `customers`, `products` and `orders` arrays:
//!
//! ```json
//! {
//!   "customers": [{"id": 1, "name": "Ada", "tier": 1}],
//!   "products":  [{"id": 1, "name": "Tome", "category": "Books", "price": 150.0}],
//!   "orders":    [{"id": 1, "order_date": "2024-01-31", "customer_id": 1, "products": [1]}]
//! }
//! ```
//!
//! Missing arrays are treated as empty. The decoded catalog is validated before it is returned.

use std::fs;
use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Catalog;

/// Ingest a JSON catalog document from a file.
pub fn ingest_catalog_json_from_path(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let text = fs::read_to_string(path)?;
    ingest_catalog_json_from_str(&text)
}

/// Ingest a JSON catalog document from an in-memory string.
pub fn ingest_catalog_json_from_str(input: &str) -> CatalogResult<Catalog> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::UnsupportedFormat {
            message: "json input is empty".to_string(),
        });
    }

    let catalog: Catalog = serde_json::from_str(trimmed)?;
    catalog.validate()?;
    Ok(catalog)
}
