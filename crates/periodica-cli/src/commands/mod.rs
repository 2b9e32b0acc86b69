pub mod compound;
pub mod data;
pub mod element;
pub mod lab;
pub mod list;
pub mod mix;
pub mod quiz;
pub mod search;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use periodica::core::catalog::{Catalog, CatalogError};
use periodica::engine::progress::ProgressReporter;
use periodica::workflows::load;
use std::time::Duration;
use tokio::task;
use tracing::{info, warn};

/// Loads the configured catalogs on a blocking task, giving up after the
/// configured timeout.
pub async fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let catalog_config = config.catalog.clone();
    let handler = CliProgressHandler::new();
    let callback = handler.get_callback();

    let loading = task::spawn_blocking(move || {
        let reporter = ProgressReporter::with_callback(callback);
        load::run(&catalog_config, &reporter)
    });

    let catalog = match tokio::time::timeout(config.load_timeout, loading).await {
        Ok(Ok(result)) => result?,
        Ok(Err(join_error)) => {
            return Err(CliError::Other(anyhow::anyhow!(
                "Catalog loading task failed: {}",
                join_error
            )));
        }
        Err(_) => return Err(timeout_error(config.load_timeout).into()),
    };

    let warnings = handler.warnings();
    if !warnings.is_empty() {
        warn!(
            "Compound catalog loaded with {} integrity warning(s).",
            warnings.len()
        );
    }
    info!(
        elements = catalog.elements.len(),
        compounds = catalog.compounds.len(),
        "Catalogs ready."
    );
    Ok(catalog)
}

fn timeout_error(limit: Duration) -> CatalogError {
    CatalogError::Unavailable {
        reason: format!(
            "loading did not finish within {} second(s). Check the catalog paths and try again, or raise 'catalog.load-timeout-secs'.",
            limit.as_secs()
        ),
    }
}

/// Normalizes a typed element reference to its catalog symbol.
///
/// Accepts symbols in any case, names and atomic numbers. Input that matches
/// nothing is returned unchanged so the matcher can report it.
pub fn canonical_symbol(catalog: &Catalog, raw: &str) -> String {
    catalog
        .elements
        .resolve(raw)
        .map(|e| e.symbol.clone())
        .unwrap_or_else(|| raw.trim().to_string())
}
