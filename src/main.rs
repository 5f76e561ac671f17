use std::io::{self, Write};
use std::process::ExitCode;

use catalog_queries::report::write_report;
use catalog_queries::sample::sample_catalog;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut catalog = sample_catalog();
    debug!(
        customers = catalog.customers.len(),
        products = catalog.products.len(),
        orders = catalog.orders.len(),
        "sample catalog ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = write_report(&mut catalog, &mut out).and_then(|()| Ok(out.flush()?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%e, "report failed");
            ExitCode::FAILURE
        }
    }
}
