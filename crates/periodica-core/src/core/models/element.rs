use std::fmt;
use std::str::FromStr;

/// Chemical family of an element as used by the periodic-table catalog.
///
/// Parsing is lenient: the label is matched case-insensitively and spaces,
/// hyphens and underscores are treated alike. Labels that do not name a known
/// family (for example "unknown, probably transition metal") become
/// [`Category::Unknown`], and the element keeps its raw label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    DiatomicNonmetal,
    PolyatomicNonmetal,
    NobleGas,
    Lanthanide,
    Actinide,
    #[default]
    Unknown,
}

impl Category {
    /// Returns the canonical lower-case label (e.g. "alkali metal").
    pub fn label(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali metal",
            Category::AlkalineEarthMetal => "alkaline earth metal",
            Category::TransitionMetal => "transition metal",
            Category::PostTransitionMetal => "post-transition metal",
            Category::Metalloid => "metalloid",
            Category::DiatomicNonmetal => "diatomic nonmetal",
            Category::PolyatomicNonmetal => "polyatomic nonmetal",
            Category::NobleGas => "noble gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
            Category::Unknown => "unknown",
        }
    }

    pub fn is_metal(&self) -> bool {
        matches!(
            self,
            Category::AlkaliMetal
                | Category::AlkalineEarthMetal
                | Category::TransitionMetal
                | Category::PostTransitionMetal
                | Category::Lanthanide
                | Category::Actinide
        )
    }

    /// Reactive nonmetals only; noble gases are excluded.
    pub fn is_nonmetal(&self) -> bool {
        matches!(
            self,
            Category::DiatomicNonmetal | Category::PolyatomicNonmetal
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    /// Parses a category label into a `Category`.
    ///
    /// # Errors
    ///
    /// Returns `()` if the label does not name a known family. Catalog loading
    /// maps such labels to [`Category::Unknown`] instead of failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "alkali metal" => Ok(Category::AlkaliMetal),
            "alkaline earth metal" => Ok(Category::AlkalineEarthMetal),
            "transition metal" => Ok(Category::TransitionMetal),
            "post transition metal" => Ok(Category::PostTransitionMetal),
            "metalloid" => Ok(Category::Metalloid),
            "diatomic nonmetal" => Ok(Category::DiatomicNonmetal),
            "polyatomic nonmetal" => Ok(Category::PolyatomicNonmetal),
            "noble gas" => Ok(Category::NobleGas),
            "lanthanide" => Ok(Category::Lanthanide),
            "actinide" => Ok(Category::Actinide),
            "unknown" => Ok(Category::Unknown),
            _ => Err(()),
        }
    }
}

/// Physical state of an element at room temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
    #[default]
    Unknown,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Solid => "Solid",
            Phase::Liquid => "Liquid",
            Phase::Gas => "Gas",
            Phase::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Phase::Solid),
            "liquid" => Ok(Phase::Liquid),
            "gas" => Ok(Phase::Gas),
            "" | "unknown" => Ok(Phase::Unknown),
            _ => Err(()),
        }
    }
}

/// A chemical element from the periodic table.
///
/// Elements are immutable reference data: they are created once when the
/// element catalog is loaded and are only ever handed out by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Atomic number, unique within a catalog.
    pub number: u8,
    /// Chemical symbol (e.g. "H", "Fe"), unique within a catalog.
    pub symbol: String,
    pub name: String,
    pub category: Category,
    /// The category label as written in the source data.
    pub category_label: String,
    pub period: u8,
    /// Group number; `None` for f-block elements outside the main grid.
    pub group: Option<u8>,
    pub block: Option<String>,
    /// Standard atomic mass in unified atomic mass units.
    pub atomic_mass: f64,
    pub phase: Phase,
    /// Density in g/cm³.
    pub density: Option<f64>,
    /// Melting point in kelvin.
    pub melt: Option<f64>,
    /// Boiling point in kelvin.
    pub boil: Option<f64>,
    pub summary: Option<String>,
}

impl Element {
    /// Creates an element with the required identity fields; everything else
    /// is left empty and can be filled in afterwards.
    pub fn new(number: u8, symbol: &str, name: &str, category: Category, atomic_mass: f64) -> Self {
        Self {
            number,
            symbol: symbol.to_string(),
            name: name.to_string(),
            category,
            category_label: category.label().to_string(),
            period: 0,
            group: None,
            block: None,
            atomic_mass,
            phase: Phase::default(),
            density: None,
            melt: None,
            boil: None,
            summary: None,
        }
    }

    /// Super-heavy elements are those past the actinide series.
    pub fn is_super_heavy(&self) -> bool {
        self.number > 103
    }
}
