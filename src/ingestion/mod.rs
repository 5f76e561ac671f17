//! Catalog ingestion from disk.
//!
//! Most callers should use [`ingest_catalog`] (from [`unified`]) which:
//!
//! - infers the format from the path (or you can override it via [`IngestionOptions`])
//! - loads the catalog and checks its invariants with [`crate::types::Catalog::validate`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Format-specific functions are also available under [`csv`] and [`json`].

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    TracingObserver,
};
pub use unified::{ingest_catalog, IngestionFormat, IngestionOptions, IngestionRequest};
