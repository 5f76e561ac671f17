//! Unified catalog ingestion entrypoint.
//!
//! Most callers should use [`ingest_catalog`], which loads and validates a [`Catalog`] from
//! either a JSON document or a CSV directory.
//!
//! - If [`IngestionOptions::format`] is `None`, the format is inferred from the path.
//! - If an [`IngestionObserver`] is provided, success/failure/alerts are reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Catalog;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json};

/// Supported catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// A single JSON document.
    Json,
    /// A directory of `customers.csv`, `products.csv` and `orders.csv`.
    CsvDirectory,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Infer the format of `path`: directories are CSV catalogs, files go by extension.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        if path.is_dir() {
            return Ok(Self::CsvDirectory);
        }

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CatalogError::UnsupportedFormat {
                message: format!("cannot infer format: path has no extension ({})", path.display()),
            })?;

        Self::from_extension(ext).ok_or_else(|| CatalogError::UnsupportedFormat {
            message: format!(
                "cannot infer format from extension '{ext}' for path ({})",
                path.display()
            ),
        })
    }
}

/// Options controlling unified ingestion behavior.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, infer the format from the path.
    pub format: Option<IngestionFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a catalog from `path` and validate it.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` with record counts
/// - `on_failure` with a computed severity
/// - `on_alert` when that severity is >= `options.alert_at_or_above`
///
/// Format inference failures happen before any observer callback.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use catalog_queries::ingestion::{ingest_catalog, IngestionOptions, TracingObserver};
///
/// # fn main() -> Result<(), catalog_queries::CatalogError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let catalog = ingest_catalog("catalog.json", &opts)?;
/// println!("products={}", catalog.products.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_catalog(path: impl AsRef<Path>, options: &IngestionOptions) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => IngestionFormat::from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        IngestionFormat::Json => json::ingest_catalog_json_from_path(path),
        IngestionFormat::CsvDirectory => csv::ingest_catalog_csv_from_dir(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(catalog) => obs.on_success(
                &ctx,
                IngestionStats {
                    customers: catalog.customers.len(),
                    products: catalog.products.len(),
                    orders: catalog.orders.len(),
                },
            ),
            Err(e) => {
                let severity = severity_for_error(e);
                obs.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    obs.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &CatalogError) -> IngestionSeverity {
    match e {
        CatalogError::Io(_) => IngestionSeverity::Critical,
        CatalogError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        CatalogError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        _ => IngestionSeverity::Error,
    }
}

/// An owned load request, for callers that queue catalog loads.
#[derive(Clone, Debug)]
pub struct IngestionRequest {
    pub path: PathBuf,
    pub options: IngestionOptions,
}

impl IngestionRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: IngestionOptions::default(),
        }
    }

    /// Execute the request by calling [`ingest_catalog`].
    pub fn run(&self) -> CatalogResult<Catalog> {
        ingest_catalog(&self.path, &self.options)
    }
}
