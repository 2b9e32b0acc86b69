use super::load_catalog;
use crate::cli::ElementArgs;
use crate::config::AppConfig;
use crate::display::cards;
use crate::error::Result;
use periodica::core::catalog::descriptors::DescriptorTable;
use periodica::core::catalog::{Catalog, CatalogError};
use periodica::core::models::element::Element;
use std::io::{self, Write};
use tracing::info;

pub async fn run(args: ElementArgs, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let element = find(&catalog, &args.query)?;
    info!(symbol = %element.symbol, "Showing element.");

    let descriptor = DescriptorTable::new().describe(element);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cards::print_element(&mut out, element, &descriptor);
    out.flush()?;
    Ok(())
}

fn find<'a>(catalog: &'a Catalog, query: &str) -> std::result::Result<&'a Element, CatalogError> {
    catalog
        .elements
        .resolve(query)
        .ok_or_else(|| CatalogError::ElementNotFound(query.trim().to_string()))
}
