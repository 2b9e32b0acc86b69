use super::{canonical_symbol, load_catalog};
use crate::cli::MixArgs;
use crate::config::AppConfig;
use crate::display::cards;
use crate::error::{CliError, Result};
use crate::utils::parser::parse_count;
use periodica::core::catalog::Catalog;
use periodica::core::models::selection::Selection;
use periodica::workflows::mix;
use std::io::{self, Write};

pub async fn run(args: MixArgs, config: &AppConfig) -> Result<()> {
    let catalog = load_catalog(config).await?;
    let selection = build_selection(&catalog, &args.symbols)?;
    let report = mix::run(&selection, &catalog)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cards::print_mix_report(&mut out, &report);
    out.flush()?;
    Ok(())
}

/// Builds a selection from command-line tokens.
///
/// A token may carry a count after a colon, so `H:2 O` selects two hydrogen
/// atoms and one oxygen atom. Counts share the lab's `1..=100` range.
fn build_selection(catalog: &Catalog, tokens: &[String]) -> Result<Selection> {
    let mut selection = Selection::new();
    for token in tokens {
        let (raw, count) = match token.split_once(':') {
            Some((symbol, n)) => {
                let count =
                    parse_count(n).map_err(|e| CliError::Argument(format!("{}: {}", token, e)))?;
                (symbol, count)
            }
            None => (token.as_str(), 1),
        };
        let symbol = canonical_symbol(catalog, raw);
        for _ in 0..count {
            selection.add(&symbol);
        }
    }
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodica::engine::error::MatchError;
    use periodica::engine::matcher::MatchKind;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn repeated_and_counted_tokens_build_the_same_selection() {
        let catalog = Catalog::bundled().unwrap();
        let repeated = build_selection(&catalog, &tokens(&["H", "H", "O"])).unwrap();
        let counted = build_selection(&catalog, &tokens(&["h:2", "oxygen"])).unwrap();
        assert_eq!(repeated.composition(), counted.composition());
        assert_eq!(counted.symbols(), ["H", "H", "O"]);
    }

    #[test]
    fn water_from_cli_tokens_is_exact() {
        let catalog = Catalog::bundled().unwrap();
        let selection = build_selection(&catalog, &tokens(&["H:2", "O"])).unwrap();
        let report = mix::run(&selection, &catalog).unwrap();
        assert_eq!(report.result.kind(), MatchKind::Exact);
        assert_eq!(report.result.compound().formula, "H2O");
    }

    #[test]
    fn unknown_tokens_reach_the_matcher_unchanged() {
        let catalog = Catalog::bundled().unwrap();
        let selection = build_selection(&catalog, &tokens(&["H", "O", "Xx"])).unwrap();
        assert_eq!(
            mix::run(&selection, &catalog),
            Err(MatchError::UnknownElement {
                symbol: "Xx".to_string()
            })
        );
    }

    #[test]
    fn counts_outside_the_lab_range_are_rejected() {
        let catalog = Catalog::bundled().unwrap();
        let cases: [&[&str]; 4] = [&["H:0", "O:0"], &["H:101"], &["H:5000000000"], &["H:two"]];
        for raw in cases {
            match build_selection(&catalog, &tokens(raw)) {
                Err(CliError::Argument(msg)) => assert!(msg.contains("Invalid atom count"), "{msg}"),
                other => panic!("{:?} should be rejected, got {:?}", raw, other.map(|s| s.len())),
            }
        }
    }

    #[test]
    fn boundary_count_is_accepted() {
        let catalog = Catalog::bundled().unwrap();
        let selection = build_selection(&catalog, &tokens(&["H:100"])).unwrap();
        assert_eq!(selection.len(), 100);
    }
}
