use super::CatalogError;
use super::elements::ElementCatalog;
use crate::core::models::composition::Composition;
use crate::core::models::compound::{Compound, CompoundProperties};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CompoundFile {
    #[serde(default)]
    compound: Vec<CompoundEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct CompoundEntry {
    name: String,
    formula: String,
    #[serde(default)]
    composition: Option<BTreeMap<String, u32>>,
    #[serde(default)]
    molecular_mass: Option<f64>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    density: Option<f64>,
    #[serde(default)]
    melting_point: Option<f64>,
    #[serde(default)]
    boiling_point: Option<f64>,
    #[serde(default)]
    bond_type: Option<String>,
    #[serde(default)]
    solubility: Option<String>,
    #[serde(default)]
    reactivity: Option<String>,
    #[serde(default)]
    safety: Option<String>,
    #[serde(default)]
    discovery: Option<String>,
    #[serde(default)]
    formation_reaction: Option<String>,
    #[serde(default)]
    uses: Vec<String>,
    #[serde(default)]
    facts: Vec<String>,
}

impl CompoundEntry {
    fn into_compound(self, source: &str) -> Result<Compound, CatalogError> {
        let composition = match self.composition {
            Some(table) => {
                if let Some((symbol, _)) = table.iter().find(|(_, count)| **count == 0) {
                    return Err(CatalogError::InvalidRecord {
                        path: source.to_string(),
                        record: self.name,
                        reason: format!("count for '{}' must be positive", symbol),
                    });
                }
                table.into_iter().collect::<Composition>()
            }
            None => self
                .formula
                .parse::<Composition>()
                .map_err(|e| CatalogError::InvalidFormula {
                    compound: self.name.clone(),
                    source: e,
                })?,
        };

        if composition.is_empty() {
            return Err(CatalogError::InvalidRecord {
                path: source.to_string(),
                record: self.name,
                reason: "composition is empty".to_string(),
            });
        }

        Ok(Compound {
            name: self.name,
            formula: self.formula,
            composition,
            // Filled in against the element catalog when absent.
            molecular_mass: self.molecular_mass.unwrap_or(0.0),
            category: self.category.unwrap_or_else(|| "Compound".to_string()),
            properties: CompoundProperties {
                state: self.state,
                color: self.color,
                density: self.density,
                melting_point: self.melting_point,
                boiling_point: self.boiling_point,
                bond_type: self.bond_type,
                solubility: self.solubility,
                reactivity: self.reactivity,
                safety: self.safety,
                discovery: self.discovery,
                formation_reaction: self.formation_reaction,
            },
            uses: self.uses,
            facts: self.facts,
        })
    }
}

/// Two catalog compounds share a composition; only the first can ever match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityWarning {
    pub composition: String,
    pub kept: String,
    pub shadowed: String,
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Compounds '{}' and '{}' share composition {}; '{}' will always be matched first",
            self.kept, self.shadowed, self.composition, self.kept
        )
    }
}

/// Sums atomic masses over a composition.
///
/// # Errors
///
/// Returns `CatalogError::ElementNotFound` for the first symbol the element
/// catalog does not know.
pub fn molecular_mass(
    composition: &Composition,
    elements: &ElementCatalog,
) -> Result<f64, CatalogError> {
    composition.iter().try_fold(0.0, |total, (symbol, count)| {
        let element = elements.lookup(symbol)?;
        Ok(total + element.atomic_mass * f64::from(count))
    })
}

/// The list of known compounds, in registration order.
///
/// Registration order matters: when two compounds share a composition the
/// first one registered is the one the matcher reports. Such collisions are
/// kept as [`IntegrityWarning`]s rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct CompoundCatalog {
    compounds: Vec<Compound>,
    first_by_composition: HashMap<Composition, usize>,
    warnings: Vec<IntegrityWarning>,
}

impl CompoundCatalog {
    /// Builds a catalog from compounds, checking every symbol against
    /// `elements` and filling in missing molecular masses.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownSymbol` if a compound uses an element the
    /// element catalog does not contain.
    pub fn from_compounds(
        compounds: Vec<Compound>,
        elements: &ElementCatalog,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for mut compound in compounds {
            if let Some(symbol) = compound
                .composition
                .symbols()
                .find(|s| elements.get(s).is_none())
            {
                return Err(CatalogError::UnknownSymbol {
                    compound: compound.name,
                    symbol: symbol.to_string(),
                });
            }

            if compound.molecular_mass <= 0.0 {
                compound.molecular_mass = molecular_mass(&compound.composition, elements)?;
            }

            let index = catalog.compounds.len();
            match catalog.first_by_composition.get(&compound.composition) {
                Some(&kept) => {
                    let warning = IntegrityWarning {
                        composition: compound.composition.hill_formula(),
                        kept: catalog.compounds[kept].name.clone(),
                        shadowed: compound.name.clone(),
                    };
                    warn!("{}", warning);
                    catalog.warnings.push(warning);
                }
                None => {
                    catalog
                        .first_by_composition
                        .insert(compound.composition.clone(), index);
                }
            }
            catalog.compounds.push(compound);
        }

        Ok(catalog)
    }

    /// Parses a TOML document of `[[compound]]` tables.
    ///
    /// `source` names the document in error messages.
    pub fn from_toml_str(
        content: &str,
        source: &str,
        elements: &ElementCatalog,
    ) -> Result<Self, CatalogError> {
        let file: CompoundFile = toml::from_str(content).map_err(|e| CatalogError::Toml {
            path: source.to_string(),
            source: e,
        })?;
        let compounds = file
            .compound
            .into_iter()
            .map(|entry| entry.into_compound(source))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Read {} compound entries from {}", compounds.len(), source);
        Self::from_compounds(compounds, elements)
    }

    pub fn from_toml_path(path: &Path, elements: &ElementCatalog) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path.to_string_lossy(), elements)
    }

    /// The first registered compound with exactly this composition.
    pub fn find_exact(&self, composition: &Composition) -> Option<&Compound> {
        self.first_by_composition
            .get(composition)
            .map(|&i| &self.compounds[i])
    }

    /// Finds a compound by name (case-insensitive) or by formula.
    ///
    /// Formulas are compared both as written and by composition, so `"OH2"`
    /// finds water.
    pub fn find_by_name_or_formula(&self, query: &str) -> Option<&Compound> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Some(compound) = self
            .compounds
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(query) || c.formula == query)
        {
            return Some(compound);
        }
        query
            .parse::<Composition>()
            .ok()
            .and_then(|composition| self.find_exact(&composition))
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Compound> {
        self.compounds.choose(rng)
    }

    pub fn warnings(&self) -> &[IntegrityWarning] {
        &self.warnings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Compound> {
        self.compounds.iter()
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::BUNDLED_ELEMENTS_CSV;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::tempdir;

    fn elements() -> ElementCatalog {
        ElementCatalog::from_csv_str(BUNDLED_ELEMENTS_CSV, "bundled").unwrap()
    }

    const SMALL_TOML: &str = r#"
[[compound]]
name = "Water"
formula = "H2O"
category = "Oxide"
molecular-mass = 18.015
state = "Liquid"
uses = ["Drinking"]

[[compound]]
name = "Acetic Acid"
formula = "CH3COOH"

[compound.composition]
C = 2
H = 4
O = 2

[[compound]]
name = "Table Salt"
formula = "NaCl"
"#;

    #[test]
    fn from_toml_str_reads_entries_in_order() {
        let catalog = CompoundCatalog::from_toml_str(SMALL_TOML, "small", &elements()).unwrap();
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Acetic Acid", "Table Salt"]);

        let water = catalog.iter().next().unwrap();
        assert_eq!(water.molecular_mass, 18.015);
        assert_eq!(water.properties.state.as_deref(), Some("Liquid"));
        assert_eq!(water.uses, vec!["Drinking"]);
        assert!(water.properties.color.is_none());
    }

    #[test]
    fn explicit_composition_overrides_formula_parsing() {
        let catalog = CompoundCatalog::from_toml_str(SMALL_TOML, "small", &elements()).unwrap();
        let acid = catalog.find_by_name_or_formula("acetic acid").unwrap();
        assert_eq!(acid.composition.count("C"), 2);
        assert_eq!(acid.composition.count("H"), 4);
        assert_eq!(acid.composition.count("O"), 2);
        assert_eq!(acid.formula, "CH3COOH");
    }

    #[test]
    fn missing_mass_and_category_are_filled_in() {
        let catalog = CompoundCatalog::from_toml_str(SMALL_TOML, "small", &elements()).unwrap();
        let salt = catalog.find_by_name_or_formula("NaCl").unwrap();
        assert!((salt.molecular_mass - (22.98976928 + 35.45)).abs() < 0.01);
        assert_eq!(salt.category, "Compound");
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let toml = r#"
[[compound]]
name = "Mystery"
formula = "Xx2O"
"#;
        let result = CompoundCatalog::from_toml_str(toml, "bad", &elements());
        assert!(matches!(
            result,
            Err(CatalogError::UnknownSymbol { symbol, .. }) if symbol == "Xx"
        ));
    }

    #[test]
    fn unparseable_formula_without_composition_is_rejected() {
        let toml = r#"
[[compound]]
name = "Slaked Lime"
formula = "Ca(OH)2"
"#;
        assert!(matches!(
            CompoundCatalog::from_toml_str(toml, "bad", &elements()),
            Err(CatalogError::InvalidFormula { .. })
        ));
    }

    #[test]
    fn zero_counts_in_composition_are_rejected() {
        let toml = r#"
[[compound]]
name = "Nothing"
formula = "H"

[compound.composition]
H = 0
"#;
        assert!(matches!(
            CompoundCatalog::from_toml_str(toml, "bad", &elements()),
            Err(CatalogError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected_as_toml_errors() {
        let toml = r#"
[[compound]]
name = "Water"
formula = "H2O"
colour = "Blue"
"#;
        assert!(matches!(
            CompoundCatalog::from_toml_str(toml, "bad", &elements()),
            Err(CatalogError::Toml { .. })
        ));
    }

    #[test]
    fn duplicate_compositions_produce_warning_and_first_wins() {
        let toml = r#"
[[compound]]
name = "Water"
formula = "H2O"

[[compound]]
name = "Dihydrogen Monoxide"
formula = "OH2"
"#;
        let catalog = CompoundCatalog::from_toml_str(toml, "dup", &elements()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.warnings().len(), 1);
        let warning = &catalog.warnings()[0];
        assert_eq!(warning.kept, "Water");
        assert_eq!(warning.shadowed, "Dihydrogen Monoxide");
        assert_eq!(warning.composition, "H2O");

        let water: Composition = "H2O".parse().unwrap();
        assert_eq!(catalog.find_exact(&water).unwrap().name, "Water");
    }

    #[test]
    fn find_by_name_or_formula_accepts_reordered_formula() {
        let catalog = CompoundCatalog::from_toml_str(SMALL_TOML, "small", &elements()).unwrap();
        assert_eq!(catalog.find_by_name_or_formula("OH2").unwrap().name, "Water");
        assert_eq!(catalog.find_by_name_or_formula("WATER").unwrap().name, "Water");
        assert!(catalog.find_by_name_or_formula("Ozone").is_none());
        assert!(catalog.find_by_name_or_formula("  ").is_none());
    }

    #[test]
    fn random_returns_none_for_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty = CompoundCatalog::default();
        assert!(empty.random(&mut rng).is_none());

        let catalog = CompoundCatalog::from_toml_str(SMALL_TOML, "small", &elements()).unwrap();
        let picked = catalog.random(&mut rng).unwrap();
        assert!(catalog.iter().any(|c| c.name == picked.name));
    }

    #[test]
    fn from_toml_path_reads_files_and_reports_missing_ones() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compounds.toml");
        fs::write(&path, SMALL_TOML).unwrap();
        let catalog = CompoundCatalog::from_toml_path(&path, &elements()).unwrap();
        assert_eq!(catalog.len(), 3);

        assert!(matches!(
            CompoundCatalog::from_toml_path(&dir.path().join("nope.toml"), &elements()),
            Err(CatalogError::Io { .. })
        ));
    }

    #[test]
    fn molecular_mass_sums_atomic_masses() {
        let elements = elements();
        let composition: Composition = "HeAu".parse().unwrap();
        let mass = molecular_mass(&composition, &elements).unwrap();
        assert!((mass - (4.0026022 + 196.9665695)).abs() < 1e-9);
    }
}
