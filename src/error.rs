use thiserror::Error;

use crate::types::{CustomerId, OrderId, ProductId};

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error type returned by catalog ingestion, validation and the fallible queries.
///
/// A single enum shared by the JSON/CSV loaders, [`crate::types::Catalog::validate`] and
/// [`crate::query::orders_products_map`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog document could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV table could not be read or decoded.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input path does not map to a supported catalog format.
    #[error("unsupported format: {message}")]
    UnsupportedFormat { message: String },

    /// A field could not be parsed into its typed representation.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    #[error("duplicate product id {id}")]
    DuplicateProductId { id: ProductId },

    #[error("duplicate order id {id}")]
    DuplicateOrderId { id: OrderId },

    #[error("duplicate customer id {id}")]
    DuplicateCustomerId { id: CustomerId },

    /// A product price is NaN or infinite.
    #[error("product {product} has non-finite price {price}")]
    InvalidPrice { product: ProductId, price: f64 },

    /// An order lists a product id that is not in the product table.
    #[error("order {order} references unknown product {product}")]
    UnknownProduct { order: OrderId, product: ProductId },

    /// An order belongs to a customer id that is not in the customer table.
    #[error("order {order} references unknown customer {customer}")]
    UnknownCustomer { order: OrderId, customer: CustomerId },
}
