use super::composition::Composition;

/// An ordered multiset of element symbols chosen by a user before mixing.
///
/// Duplicates represent quantity: adding `"H"` twice selects two hydrogen
/// atoms. The selection performs no validation; unknown symbols are reported
/// by the matcher when the selection is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    symbols: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one atom of `symbol`.
    pub fn add(&mut self, symbol: &str) {
        self.symbols.push(symbol.to_string());
    }

    /// Removes the most recently added atom of `symbol`.
    ///
    /// Returns `false` if the symbol was not selected.
    pub fn remove_one(&mut self, symbol: &str) -> bool {
        match self.symbols.iter().rposition(|s| s == symbol) {
            Some(index) => {
                self.symbols.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every atom of `symbol` and returns how many were removed.
    pub fn remove_all(&mut self, symbol: &str) -> usize {
        let before = self.symbols.len();
        self.symbols.retain(|s| s != symbol);
        before - self.symbols.len()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn count(&self, symbol: &str) -> usize {
        self.symbols.iter().filter(|s| *s == symbol).count()
    }

    /// Total number of selected atoms.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Selected symbols in the order they were added.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn composition(&self) -> Composition {
        Composition::from_symbols(&self.symbols)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            symbols: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
