use std::collections::{HashMap, hash_map::Entry};

use crate::{error::ScriptError, interpreter::value::Coordinate, script::ScriptResult};

/// Named values bound by the `variable` command.
///
/// A name can be bound once. There is no way to rebind or remove it, so every
/// `@name` reference in a script sees the same value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Coordinate>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// # Errors
    /// [`ScriptError::OverridingSymbol`] if `name` is already bound. The table
    /// is left unchanged.
    ///
    /// # Example
    /// ```
    /// use graph_gen::{interpreter::value::Coordinate, script::symbols::SymbolTable};
    ///
    /// let mut symbols = SymbolTable::new();
    /// assert!(symbols.add("a", Coordinate::cartesian(1.0, 1.0)).is_ok());
    /// assert!(symbols.add("a", Coordinate::cartesian(2.0, 2.0)).is_err());
    /// assert_eq!(symbols.fetch("a").unwrap(), Coordinate::cartesian(1.0, 1.0));
    /// ```
    pub fn add(&mut self, name: &str, value: Coordinate) -> ScriptResult<()> {
        match self.symbols.entry(name.to_string()) {
            Entry::Occupied(_) => Err(ScriptError::OverridingSymbol { name: name.to_string(),
                                                                      value }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            },
        }
    }

    /// Looks up the value bound to `name`.
    ///
    /// # Errors
    /// [`ScriptError::FetchingNonexistentSymbol`] if `name` was never bound.
    pub fn fetch(&self, name: &str) -> ScriptResult<Coordinate> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| ScriptError::FetchingNonexistentSymbol { name: name.to_string() })
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether nothing has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Every binding, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Coordinate)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
