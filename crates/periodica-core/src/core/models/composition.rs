use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a formula string such as `"Fe2O3"`.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormulaError {
    #[error("Formula is empty")]
    Empty,
    #[error("Unexpected character '{ch}' at position {position} in formula '{formula}'")]
    UnexpectedCharacter {
        formula: String,
        ch: char,
        position: usize,
    },
    #[error("Atom count for '{symbol}' in formula '{formula}' must be a positive integer")]
    InvalidCount { formula: String, symbol: String },
}

/// A multiset of element symbols: how many atoms of each element are present.
///
/// This is the form every comparison in the matcher works on. Symbols are kept
/// in sorted order so two compositions with the same counts are always equal
/// regardless of the order the atoms were added in. Counts are always positive;
/// a symbol with no atoms is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Composition {
    counts: BTreeMap<String, u32>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a composition by counting each occurrence of a symbol once.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut composition = Self::new();
        for symbol in symbols {
            composition.add(symbol.as_ref(), 1);
        }
        composition
    }

    /// Adds `count` atoms of `symbol`. Adding zero atoms is a no-op.
    pub fn add(&mut self, symbol: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.counts.entry(symbol.to_string()).or_insert(0) += count;
    }

    /// Number of atoms of `symbol` (zero when absent).
    pub fn count(&self, symbol: &str) -> u32 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.counts.contains_key(symbol)
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total_atoms(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(s, c)| (s.as_str(), *c))
    }

    /// True when both compositions use exactly the same set of elements,
    /// whatever their counts.
    pub fn same_elements(&self, other: &Composition) -> bool {
        self.len() == other.len() && self.symbols().all(|s| other.contains(s))
    }

    /// Number of elements this composition shares with `other`.
    pub fn shared_elements(&self, other: &Composition) -> usize {
        self.symbols().filter(|s| other.contains(s)).count()
    }

    /// Returns `k` when this composition is exactly `k` copies of `base`.
    ///
    /// Both compositions must use the same elements and every count here must
    /// equal `k` times the corresponding count in `base`. A composition with
    /// fewer atoms than `base` is never a multiple of it.
    pub fn multiple_of(&self, base: &Composition) -> Option<u32> {
        if self.is_empty() || !self.same_elements(base) {
            return None;
        }

        let (first_symbol, first_count) = base.iter().next()?;
        let candidate = self.count(first_symbol);
        if candidate % first_count != 0 {
            return None;
        }
        let k = candidate / first_count;
        if k == 0 {
            return None;
        }

        base.iter()
            .all(|(symbol, count)| self.count(symbol) == k * count)
            .then_some(k)
    }

    /// Renders the composition as an ideal-ratio expression such as `"2H + O"`.
    ///
    /// Symbols appear in alphabetical order and a count of one is implicit.
    pub fn ratio_string(&self) -> String {
        self.iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{}{}", count, symbol)
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// Renders the composition in Hill order: carbon first, hydrogen second,
    /// then the remaining symbols alphabetically. Without carbon every symbol,
    /// hydrogen included, is alphabetical.
    pub fn hill_formula(&self) -> String {
        let mut ordered: Vec<(&str, u32)> = Vec::with_capacity(self.len());
        if self.contains("C") {
            ordered.push(("C", self.count("C")));
            if self.contains("H") {
                ordered.push(("H", self.count("H")));
            }
            ordered.extend(self.iter().filter(|(s, _)| *s != "C" && *s != "H"));
        } else {
            ordered.extend(self.iter());
        }

        ordered
            .into_iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{}{}", symbol, count)
                }
            })
            .collect()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hill_formula())
    }
}

impl FromStr for Composition {
    type Err = FormulaError;

    /// Parses a flat formula string (`"H2O"`, `"C2H5OH"`).
    ///
    /// A symbol is an upper-case letter followed by any lower-case letters and
    /// an optional count. Repeated symbols accumulate. Parentheses, charges and
    /// hydrate dots are not supported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let formula = s.trim();
        if formula.is_empty() {
            return Err(FormulaError::Empty);
        }

        let chars: Vec<char> = formula.chars().collect();
        let mut composition = Composition::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if !ch.is_ascii_uppercase() {
                return Err(FormulaError::UnexpectedCharacter {
                    formula: formula.to_string(),
                    ch,
                    position: i,
                });
            }

            let mut symbol = ch.to_string();
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                symbol.push(chars[i]);
                i += 1;
            }

            let digits_start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let count = if digits_start == i {
                1
            } else {
                let digits: String = chars[digits_start..i].iter().collect();
                match digits.parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(FormulaError::InvalidCount {
                            formula: formula.to_string(),
                            symbol,
                        });
                    }
                }
            };

            composition.add(&symbol, count);
        }

        Ok(composition)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for Composition {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut composition = Composition::new();
        for (symbol, count) in iter {
            composition.add(symbol.as_ref(), count);
        }
        composition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(pairs: &[(&str, u32)]) -> Composition {
        pairs.iter().map(|(s, c)| (*s, *c)).collect()
    }

    #[test]
    fn from_symbols_counts_occurrences_regardless_of_order() {
        let a = Composition::from_symbols(["H", "O", "H"]);
        let b = Composition::from_symbols(["H", "H", "O"]);
        assert_eq!(a, b);
        assert_eq!(a.count("H"), 2);
        assert_eq!(a.count("O"), 1);
        assert_eq!(a.count("N"), 0);
        assert_eq!(a.total_atoms(), 3);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn adding_zero_atoms_leaves_composition_unchanged() {
        let mut c = Composition::new();
        c.add("Fe", 0);
        assert!(c.is_empty());
        assert!(!c.contains("Fe"));
    }

    #[test]
    fn parse_simple_formulas() {
        assert_eq!("H2O".parse::<Composition>().unwrap(), comp(&[("H", 2), ("O", 1)]));
        assert_eq!(
            "Fe2O3".parse::<Composition>().unwrap(),
            comp(&[("Fe", 2), ("O", 3)])
        );
        assert_eq!("NaCl".parse::<Composition>().unwrap(), comp(&[("Na", 1), ("Cl", 1)]));
    }

    #[test]
    fn parse_accumulates_repeated_symbols() {
        let ethanol: Composition = "C2H5OH".parse().unwrap();
        assert_eq!(ethanol, comp(&[("C", 2), ("H", 6), ("O", 1)]));
    }

    #[test]
    fn parse_rejects_malformed_formulas() {
        assert_eq!("".parse::<Composition>(), Err(FormulaError::Empty));
        assert!(matches!(
            "h2o".parse::<Composition>(),
            Err(FormulaError::UnexpectedCharacter { ch: 'h', position: 0, .. })
        ));
        assert!(matches!(
            "Ca(OH)2".parse::<Composition>(),
            Err(FormulaError::UnexpectedCharacter { ch: '(', .. })
        ));
        assert!(matches!(
            "H0O".parse::<Composition>(),
            Err(FormulaError::InvalidCount { .. })
        ));
    }

    #[test]
    fn multiple_of_detects_forward_integer_scaling() {
        let water = comp(&[("H", 2), ("O", 1)]);
        assert_eq!(water.multiple_of(&water), Some(1));
        assert_eq!(comp(&[("H", 4), ("O", 2)]).multiple_of(&water), Some(2));
        assert_eq!(comp(&[("H", 6), ("O", 3)]).multiple_of(&water), Some(3));
    }

    #[test]
    fn multiple_of_rejects_reverse_and_uneven_scaling() {
        let water = comp(&[("H", 2), ("O", 1)]);
        assert_eq!(comp(&[("H", 1), ("O", 1)]).multiple_of(&water), None);
        assert_eq!(comp(&[("H", 1)]).multiple_of(&water), None);
        assert_eq!(comp(&[("H", 4), ("O", 3)]).multiple_of(&water), None);
        assert_eq!(comp(&[("H", 4), ("O", 2), ("N", 1)]).multiple_of(&water), None);
        assert_eq!(Composition::new().multiple_of(&water), None);
    }

    #[test]
    fn ratio_string_lists_symbols_alphabetically_with_implicit_ones() {
        assert_eq!(comp(&[("O", 1), ("H", 2)]).ratio_string(), "2H + O");
        assert_eq!(comp(&[("Na", 1), ("Cl", 1)]).ratio_string(), "Cl + Na");
    }

    #[test]
    fn hill_formula_orders_carbon_then_hydrogen() {
        assert_eq!(comp(&[("O", 6), ("H", 12), ("C", 6)]).hill_formula(), "C6H12O6");
        assert_eq!(comp(&[("H", 2), ("O", 1)]).hill_formula(), "H2O");
        assert_eq!(comp(&[("He", 1), ("Au", 1)]).to_string(), "AuHe");
    }

    #[test]
    fn shared_and_same_elements() {
        let a = comp(&[("H", 3), ("O", 1)]);
        let b = comp(&[("H", 2), ("O", 1)]);
        let c = comp(&[("H", 2), ("S", 1), ("O", 4)]);
        assert!(a.same_elements(&b));
        assert!(!a.same_elements(&c));
        assert_eq!(a.shared_elements(&c), 2);
    }
}
