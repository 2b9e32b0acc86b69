use super::CatalogError;
use crate::core::models::element::{Category, Element, Phase};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// One row of the element CSV file, before conversion to an [`Element`].
#[derive(Debug, Deserialize)]
struct ElementRecord {
    number: u8,
    symbol: String,
    name: String,
    category: String,
    period: u8,
    group: Option<u8>,
    block: Option<String>,
    atomic_mass: f64,
    #[serde(default)]
    phase: String,
    density: Option<f64>,
    melt: Option<f64>,
    boil: Option<f64>,
    summary: Option<String>,
}

impl ElementRecord {
    fn into_element(self, path: &str) -> Result<Element, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRecord {
            path: path.to_string(),
            record: self.symbol.clone(),
            reason,
        };

        if self.number == 0 {
            return Err(invalid("atomic number must be positive".to_string()));
        }
        if !is_valid_symbol(&self.symbol) {
            return Err(invalid(format!("'{}' is not a valid element symbol", self.symbol)));
        }
        if !(self.atomic_mass.is_finite() && self.atomic_mass > 0.0) {
            return Err(invalid(format!(
                "atomic mass {} must be positive",
                self.atomic_mass
            )));
        }
        let phase = Phase::from_str(&self.phase)
            .map_err(|_| invalid(format!("unknown phase '{}'", self.phase)))?;
        let category = Category::from_str(&self.category).unwrap_or_default();

        Ok(Element {
            number: self.number,
            symbol: self.symbol,
            name: self.name,
            category,
            category_label: self.category.trim().to_string(),
            period: self.period,
            group: self.group,
            block: self.block.filter(|b| !b.trim().is_empty()),
            atomic_mass: self.atomic_mass,
            phase,
            density: self.density,
            melt: self.melt,
            boil: self.boil,
            summary: self.summary.filter(|s| !s.trim().is_empty()),
        })
    }
}

fn is_valid_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && symbol.len() <= 3
        && chars.all(|c| c.is_ascii_lowercase())
}

/// The periodic table: every known element, keyed by symbol and atomic number.
///
/// Elements are stored in atomic-number order, which is also the order of
/// iteration and of search results.
#[derive(Debug, Clone, Default)]
pub struct ElementCatalog {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
    by_number: HashMap<u8, usize>,
}

impl ElementCatalog {
    /// Builds a catalog from already constructed elements.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateElement` if two elements share a symbol
    /// or an atomic number.
    pub fn from_elements(mut elements: Vec<Element>) -> Result<Self, CatalogError> {
        elements.sort_by_key(|e| e.number);

        let mut by_symbol = HashMap::with_capacity(elements.len());
        let mut by_number = HashMap::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            if by_symbol.insert(element.symbol.clone(), index).is_some() {
                return Err(CatalogError::DuplicateElement {
                    field: "symbol",
                    value: element.symbol.clone(),
                });
            }
            if by_number.insert(element.number, index).is_some() {
                return Err(CatalogError::DuplicateElement {
                    field: "number",
                    value: element.number.to_string(),
                });
            }
        }

        Ok(Self {
            elements,
            by_symbol,
            by_number,
        })
    }

    /// Reads a catalog from CSV data with a header row.
    ///
    /// `source` names the data in error messages (usually the file path).
    pub fn from_csv_reader<R: Read>(reader: R, source: &str) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut elements = Vec::new();
        for result in csv_reader.deserialize::<ElementRecord>() {
            let record = result.map_err(|e| CatalogError::Csv {
                path: source.to_string(),
                source: e,
            })?;
            elements.push(record.into_element(source)?);
        }
        debug!("Read {} element records from {}", elements.len(), source);
        Self::from_elements(elements)
    }

    pub fn from_csv_str(content: &str, source: &str) -> Result<Self, CatalogError> {
        Self::from_csv_reader(content.as_bytes(), source)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_csv_reader(file, &path.to_string_lossy())
    }

    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).map(|&i| &self.elements[i])
    }

    /// Looks up an element by its exact symbol.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ElementNotFound` if no element has that symbol.
    pub fn lookup(&self, symbol: &str) -> Result<&Element, CatalogError> {
        self.get(symbol)
            .ok_or_else(|| CatalogError::ElementNotFound(symbol.to_string()))
    }

    pub fn by_number(&self, number: u8) -> Option<&Element> {
        self.by_number.get(&number).map(|&i| &self.elements[i])
    }

    /// Resolves user input that may be a symbol, an atomic number or a name.
    ///
    /// Symbols are tried exactly first, then case-insensitively, then the
    /// input is treated as an atomic number, and finally as an element name.
    pub fn resolve(&self, query: &str) -> Option<&Element> {
        let query = query.trim();
        if let Some(element) = self.get(query) {
            return Some(element);
        }
        if let Some(element) = self
            .elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(query))
        {
            return Some(element);
        }
        if let Ok(number) = query.parse::<u8>() {
            return self.by_number(number);
        }
        self.elements
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(query))
    }

    /// Case-insensitive search over names, symbols and category labels.
    ///
    /// An element matches if the query is a substring of its name, symbol or
    /// category, or if the query equals its atomic number. A blank query, or
    /// one that matches nothing, yields an empty list.
    pub fn search(&self, query: &str) -> Vec<&Element> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.elements
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.symbol.to_lowercase().contains(&needle)
                    || e.category_label.to_lowercase().contains(&needle)
                    || e.number.to_string() == needle
            })
            .collect()
    }

    /// Distinct category labels, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for element in &self.elements {
            if !seen.contains(&element.category_label.as_str()) {
                seen.push(&element.category_label);
            }
        }
        seen
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
