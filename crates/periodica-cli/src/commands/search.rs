use super::load_catalog;
use crate::cli::SearchArgs;
use crate::config::AppConfig;
use crate::display::tables;
use crate::error::Result;
use periodica::core::catalog::elements::ElementCatalog;
use periodica::core::models::element::Element;
use std::io::{self, Write};
use tracing::info;

pub async fn run(args: SearchArgs, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let limit = args.limit.unwrap_or(config.max_search_results);
    let (shown, total) = limited_search(&catalog.elements, &args.query, limit);
    info!(query = %args.query, total, "Search complete.");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if shown.is_empty() {
        writeln!(out, "No elements match '{}'.", args.query.trim())?;
    } else {
        let title = if total > shown.len() {
            format!(
                "Results for '{}' (showing {} of {})",
                args.query.trim(),
                shown.len(),
                total
            )
        } else {
            format!("Results for '{}' ({})", args.query.trim(), total)
        };
        tables::print_element_table(&mut out, &title, &shown);
    }
    out.flush()?;
    Ok(())
}

/// Runs a search and keeps at most `limit` results, returning the total too.
fn limited_search<'a>(
    elements: &'a ElementCatalog,
    query: &str,
    limit: usize,
) -> (Vec<&'a Element>, usize) {
    let mut results = elements.search(query);
    let total = results.len();
    results.truncate(limit);
    (results, total)
}
