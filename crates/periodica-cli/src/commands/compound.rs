use super::load_catalog;
use crate::cli::{CompoundArgs, CompoundCommands};
use crate::config::AppConfig;
use crate::display::cards;
use crate::error::{CliError, Result};
use periodica::core::catalog::Catalog;
use periodica::core::models::compound::Compound;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

pub async fn run(args: CompoundArgs, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let compound = match args.command {
        CompoundCommands::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            catalog
                .compounds
                .random(&mut rng)
                .ok_or_else(|| CliError::Data("The compound catalog is empty.".to_string()))?
        }
        CompoundCommands::Show { query } => find(&catalog, &query)?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cards::print_compound(&mut out, compound);
    out.flush()?;
    Ok(())
}

fn find<'a>(catalog: &'a Catalog, query: &str) -> Result<&'a Compound> {
    catalog
        .compounds
        .find_by_name_or_formula(query)
        .ok_or_else(|| {
            CliError::Argument(format!(
                "No compound named '{}' or with that formula in the catalog.",
                query.trim()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_finds_by_name_or_formula() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(find(&catalog, "water").unwrap().formula, "H2O");
        assert_eq!(find(&catalog, "NaCl").unwrap().name, "Sodium Chloride");
    }

    #[test]
    fn show_reports_missing_compounds() {
        let catalog = Catalog::bundled().unwrap();
        assert!(matches!(
            find(&catalog, "Kryptonite"),
            Err(CliError::Argument(msg)) if msg.contains("Kryptonite")
        ));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let catalog = Catalog::bundled().unwrap();
        let a = catalog.compounds.random(&mut StdRng::seed_from_u64(7));
        let b = catalog.compounds.random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.map(|c| &c.name), b.map(|c| &c.name));
        assert!(a.is_some());
    }
}
