use super::composition::Composition;

/// Physical and chemical properties of a compound.
///
/// Every field is optional: catalog entries may omit what is not known, and
/// synthesized compounds fill in generic placeholder text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundProperties {
    pub state: Option<String>,
    pub color: Option<String>,
    /// Density in g/cm³.
    pub density: Option<f64>,
    /// Melting point in kelvin.
    pub melting_point: Option<f64>,
    /// Boiling point in kelvin.
    pub boiling_point: Option<f64>,
    pub bond_type: Option<String>,
    pub solubility: Option<String>,
    pub reactivity: Option<String>,
    pub safety: Option<String>,
    pub discovery: Option<String>,
    pub formation_reaction: Option<String>,
}

/// A compound, either from the catalog or synthesized for an unmatched selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub name: String,
    /// Display formula as written in the catalog (e.g. "CH3COOH").
    pub formula: String,
    /// Atom counts per element; the key used for matching.
    pub composition: Composition,
    /// Molecular mass in g/mol.
    pub molecular_mass: f64,
    /// Free-text class such as "Oxide" or "Salt".
    pub category: String,
    pub properties: CompoundProperties,
    pub uses: Vec<String>,
    pub facts: Vec<String>,
}

impl Compound {
    /// Distinct element symbols, in alphabetical order.
    pub fn elements(&self) -> Vec<&str> {
        self.composition.symbols().collect()
    }
}
