use super::error::MatchError;
use super::synthesis;
use crate::core::catalog::Catalog;
use crate::core::catalog::compounds::IntegrityWarning;
use crate::core::models::composition::Composition;
use crate::core::models::compound::Compound;
use crate::core::models::selection::Selection;
use crate::core::utils::naming;
use tracing::{debug, warn};

/// Which rule produced a [`MatchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Ratio,
    Hypothetical,
}

/// Outcome of matching a selection against the compound catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    /// The selection has exactly the composition of a catalog compound.
    Exact { compound: Compound },
    /// The selection is `multiplier` formula units of a catalog compound.
    Ratio {
        compound: Compound,
        multiplier: u32,
        note: String,
    },
    /// Nothing in the catalog matches; `compound` is synthesized.
    Hypothetical { compound: Compound, note: String },
}

impl MatchResult {
    pub fn compound(&self) -> &Compound {
        match self {
            MatchResult::Exact { compound }
            | MatchResult::Ratio { compound, .. }
            | MatchResult::Hypothetical { compound, .. } => compound,
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            MatchResult::Exact { .. } => MatchKind::Exact,
            MatchResult::Ratio { .. } => MatchKind::Ratio,
            MatchResult::Hypothetical { .. } => MatchKind::Hypothetical,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            MatchResult::Exact { .. } => None,
            MatchResult::Ratio { note, .. } | MatchResult::Hypothetical { note, .. } => Some(note),
        }
    }
}

/// Matches selections against a catalog.
///
/// The matcher holds only a shared reference to the catalog and never
/// mutates anything, so one matcher can serve any number of requests.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> Matcher<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Decides what compound a selection forms.
    ///
    /// Rules are tried in order: exact composition, then a whole-number
    /// multiple (two or more) of a catalog composition, and finally a
    /// synthesized hypothetical compound. Selecting fewer atoms than a formula
    /// needs is never a ratio match.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::EmptySelection` for an empty selection, or
    /// `MatchError::UnknownElement` naming the first symbol (in selection order)
    /// that the element catalog does not know.
    pub fn match_selection(&self, selection: &Selection) -> Result<MatchResult, MatchError> {
        if selection.is_empty() {
            return Err(MatchError::EmptySelection);
        }
        if let Some(unknown) = selection
            .symbols()
            .iter()
            .find(|s| self.catalog.elements.get(s).is_none())
        {
            return Err(MatchError::UnknownElement {
                symbol: unknown.clone(),
            });
        }

        let composition = selection.composition();
        debug!("Matching selection {}", composition.ratio_string());

        if let Some(compound) = self.catalog.compounds.find_exact(&composition) {
            self.warn_if_shadowing(compound);
            return Ok(MatchResult::Exact {
                compound: compound.clone(),
            });
        }

        if let Some((compound, multiplier)) = self.find_ratio(&composition) {
            let note = ratio_note(&composition, compound, multiplier);
            return Ok(MatchResult::Ratio {
                compound: compound.clone(),
                multiplier,
                note,
            });
        }

        let compound = synthesis::synthesize(&composition, &self.catalog.elements)?;
        let note = self.hypothetical_note(&composition, &compound);
        Ok(MatchResult::Hypothetical { compound, note })
    }

    /// The compound the selection is the smallest whole multiple of. Equal
    /// multipliers resolve to the earliest registered compound.
    fn find_ratio(&self, composition: &Composition) -> Option<(&'a Compound, u32)> {
        self.catalog
            .compounds
            .iter()
            .filter_map(|compound| {
                composition
                    .multiple_of(&compound.composition)
                    .filter(|&k| k >= 2)
                    .map(|k| (compound, k))
            })
            .min_by_key(|&(_, k)| k)
    }

    /// Integrity warnings for compounds hidden behind `compound`.
    fn shadowed_by(&self, compound: &Compound) -> impl Iterator<Item = &'a IntegrityWarning> {
        let formula = compound.composition.hill_formula();
        self.catalog
            .compounds
            .warnings()
            .iter()
            .filter(move |w| w.composition == formula)
    }

    fn warn_if_shadowing(&self, compound: &Compound) {
        for warning in self.shadowed_by(compound) {
            warn!(
                "'{}' also has composition {}; reporting '{}'",
                warning.shadowed, warning.composition, warning.kept
            );
        }
    }

    fn hypothetical_note(&self, composition: &Composition, compound: &Compound) -> String {
        let mut note = format!(
            "{} ({}) is a hypothetical compound: it is not in the catalog and its \
             properties are estimated.",
            compound.name, compound.formula
        );

        if let Some(relative) = self
            .catalog
            .compounds
            .iter()
            .find(|c| c.composition.same_elements(composition))
        {
            note.push_str(&format!(
                " {} ({}) uses the same elements, but its ideal ratio is {}.",
                relative.name,
                relative.formula,
                relative.composition.ratio_string()
            ));
        } else if let Some(dominant) = dominant_symbol(composition) {
            if let Some(closest) = self.closest_with(dominant, composition) {
                let element_name = self
                    .catalog
                    .elements
                    .get(dominant)
                    .map_or(dominant, |e| e.name.as_str());
                note.push_str(&format!(
                    " With {} dominating, the closest known compound is {} ({}).",
                    element_name, closest.name, closest.formula
                ));
            }
        }
        note
    }

    /// First compound containing `symbol` that shares the most elements with
    /// `composition`.
    fn closest_with(&self, symbol: &str, composition: &Composition) -> Option<&'a Compound> {
        let mut best: Option<(&'a Compound, usize)> = None;
        for compound in self
            .catalog
            .compounds
            .iter()
            .filter(|c| c.composition.contains(symbol))
        {
            let shared = compound.composition.shared_elements(composition);
            if best.is_none_or(|(_, best_shared)| shared > best_shared) {
                best = Some((compound, shared));
            }
        }
        best.map(|(compound, _)| compound)
    }
}

/// The element with the strictly largest count, if there is exactly one and
/// the composition has at least two distinct elements.
fn dominant_symbol(composition: &Composition) -> Option<&str> {
    if composition.len() < 2 {
        return None;
    }
    let max = composition.iter().map(|(_, count)| count).max()?;
    let mut leaders = composition.iter().filter(|&(_, count)| count == max);
    let (symbol, _) = leaders.next()?;
    leaders.next().is_none().then_some(symbol)
}

fn ratio_note(selected: &Composition, compound: &Compound, multiplier: u32) -> String {
    format!(
        "{} is {} the standard ratio of {} ({}); it simplifies to {} formula units of {}.",
        selected.ratio_string(),
        naming::multiplier_word(multiplier),
        compound.name,
        compound.composition.ratio_string(),
        multiplier,
        compound.formula
    )
}
