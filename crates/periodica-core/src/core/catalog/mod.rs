//! # Catalog Module
//!
//! Read-only reference data: the periodic table, the list of known compounds,
//! and the descriptive text shown alongside elements.
//!
//! Catalogs are loaded once (from files or from the copies bundled with this
//! crate) and never mutated afterwards. Every consumer receives them by shared
//! reference, so a loaded [`Catalog`] can be used from several threads at once.
//!
//! - [`elements`] - Element catalog loaded from CSV, with lookup and search
//! - [`compounds`] - Compound catalog loaded from TOML, validated against the elements
//! - [`descriptors`] - Per-symbol uses, facts and safety notes with a generated fallback

pub mod compounds;
pub mod descriptors;
pub mod elements;

use crate::core::models::composition::FormulaError;
use compounds::CompoundCatalog;
use elements::ElementCatalog;
use thiserror::Error;

/// The element catalog shipped with the crate.
pub const BUNDLED_ELEMENTS_CSV: &str = include_str!("../../../data/elements.csv");
/// The compound catalog shipped with the crate.
pub const BUNDLED_COMPOUNDS_TOML: &str = include_str!("../../../data/compounds.toml");
/// A sample static question bank shipped with the crate.
pub const BUNDLED_QUESTIONS_TOML: &str = include_str!("../../../data/questions.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid record '{record}' in '{path}': {reason}")]
    InvalidRecord {
        path: String,
        record: String,
        reason: String,
    },
    #[error("Duplicate element {field} '{value}' in element catalog")]
    DuplicateElement { field: &'static str, value: String },
    #[error("Element '{0}' not found in catalog")]
    ElementNotFound(String),
    #[error("Compound '{compound}' references unknown element '{symbol}'")]
    UnknownSymbol { compound: String, symbol: String },
    #[error("Invalid formula for compound '{compound}': {source}")]
    InvalidFormula {
        compound: String,
        source: FormulaError,
    },
    #[error("Catalog data is unavailable: {reason}")]
    Unavailable { reason: String },
}

/// The complete reference dataset consulted by the matcher.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub elements: ElementCatalog,
    pub compounds: CompoundCatalog,
}

impl Catalog {
    pub fn new(elements: ElementCatalog, compounds: CompoundCatalog) -> Self {
        Self {
            elements,
            compounds,
        }
    }

    /// Loads the element and compound catalogs bundled with this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let elements = ElementCatalog::from_csv_str(BUNDLED_ELEMENTS_CSV, "<bundled elements>")?;
        let compounds = CompoundCatalog::from_toml_str(
            BUNDLED_COMPOUNDS_TOML,
            "<bundled compounds>",
            &elements,
        )?;
        Ok(Self::new(elements, compounds))
    }
}
