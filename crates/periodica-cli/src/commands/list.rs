use super::load_catalog;
use crate::cli::ListArgs;
use crate::config::AppConfig;
use crate::display::tables;
use crate::error::{CliError, Result};
use periodica::core::catalog::elements::ElementCatalog;
use periodica::core::models::element::Element;
use std::io::{self, Write};

pub async fn run(args: ListArgs, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let elements = filter_by_category(&catalog.elements, args.category.as_deref())?;

    let title = match &args.category {
        Some(category) => format!("{} ({} elements)", category, elements.len()),
        None => format!("Periodic Table ({} elements)", elements.len()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tables::print_element_table(&mut out, &title, &elements);
    out.flush()?;
    Ok(())
}

/// Elements whose category label equals `category`, ignoring case and
/// treating `-` and `_` as spaces.
fn filter_by_category<'a>(
    elements: &'a ElementCatalog,
    category: Option<&str>,
) -> Result<Vec<&'a Element>> {
    let Some(category) = category else {
        return Ok(elements.iter().collect());
    };
    let wanted = normalize(category);
    let matched: Vec<&Element> = elements
        .iter()
        .filter(|e| normalize(&e.category_label) == wanted)
        .collect();

    if matched.is_empty() {
        return Err(CliError::Argument(format!(
            "No elements in category '{}'. Known categories: {}",
            category,
            elements.categories().join(", ")
        )));
    }
    Ok(matched)
}

fn normalize(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::core::catalog::Catalog;

    #[test]
    fn no_filter_lists_everything_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let all = filter_by_category(&catalog.elements, None).unwrap();
        assert_eq!(all.len(), 118);
        assert_eq!(all[0].symbol, "H");
    }

    #[test]
    fn category_filter_is_forgiving_about_case_and_separators() {
        let catalog = Catalog::bundled().unwrap();
        let gases = filter_by_category(&catalog.elements, Some("Noble-Gas")).unwrap();
        let symbols: Vec<&str> = gases.iter().map(|e| e.symbol.as_str()).collect();
        assert!(symbols.contains(&"He"));
        assert!(symbols.contains(&"Ne"));
        assert!(!symbols.contains(&"H"));
    }

    #[test]
    fn unknown_category_lists_known_ones() {
        let catalog = Catalog::bundled().unwrap();
        let result = filter_by_category(&catalog.elements, Some("dragon metal"));
        assert!(matches!(result, Err(CliError::Argument(msg)) if msg.contains("noble gas")));
    }
}
