use crate::core::catalog::Catalog;
use crate::core::models::selection::Selection;
use crate::engine::error::MatchError;
use crate::engine::matcher::{MatchResult, Matcher};
use tracing::{info, instrument};

/// A match result together with the headline a front-end should show.
#[derive(Debug, Clone, PartialEq)]
pub struct MixReport {
    pub result: MatchResult,
    pub message: String,
    /// The submitted selection as an ideal-ratio string such as "2H + O".
    pub selection_summary: String,
}

/// Matches `selection` against `catalog` and builds a [`MixReport`].
///
/// The selection is only read; clearing it after a mix is up to the caller.
#[instrument(skip_all, name = "mix_workflow", fields(atoms = selection.len()))]
pub fn run(selection: &Selection, catalog: &Catalog) -> Result<MixReport, MatchError> {
    let result = Matcher::new(catalog).match_selection(selection)?;
    let name = &result.compound().name;

    let message = match &result {
        MatchResult::Exact { .. } => format!("Successfully created {}!", name),
        MatchResult::Ratio { .. } => format!("Created {} using available elements!", name),
        MatchResult::Hypothetical { .. } => format!("Generated hypothetical compound {}.", name),
    };
    info!(kind = ?result.kind(), compound = %name, "Mix complete.");

    Ok(MixReport {
        selection_summary: selection.composition().ratio_string(),
        message,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::MatchKind;

    #[test]
    fn exact_mix_reports_success() {
        let catalog = Catalog::bundled().unwrap();
        let selection: Selection = ["Na", "Cl"].into_iter().collect();
        let report = run(&selection, &catalog).unwrap();
        assert_eq!(report.message, "Successfully created Sodium Chloride!");
        assert_eq!(report.selection_summary, "Cl + Na");
        assert_eq!(report.result.kind(), MatchKind::Exact);
    }

    #[test]
    fn ratio_mix_mentions_available_elements() {
        let catalog = Catalog::bundled().unwrap();
        let selection: Selection = ["O", "O", "O", "O", "O", "O"].into_iter().collect();
        let report = run(&selection, &catalog).unwrap();
        assert_eq!(report.result.kind(), MatchKind::Ratio);
        assert_eq!(report.message, "Created Ozone using available elements!");
    }

    #[test]
    fn hypothetical_mix_is_labelled() {
        let catalog = Catalog::bundled().unwrap();
        let selection: Selection = ["He", "Au"].into_iter().collect();
        let report = run(&selection, &catalog).unwrap();
        assert_eq!(report.message, "Generated hypothetical compound Gold Helium.");
    }

    #[test]
    fn errors_pass_through_and_selection_is_untouched() {
        let catalog = Catalog::bundled().unwrap();
        let selection: Selection = ["H", "Qq"].into_iter().collect();
        let before = selection.clone();
        assert_eq!(
            run(&selection, &catalog),
            Err(MatchError::UnknownElement {
                symbol: "Qq".to_string()
            })
        );
        assert_eq!(selection, before);
        assert_eq!(run(&Selection::new(), &catalog), Err(MatchError::EmptySelection));
    }
}
