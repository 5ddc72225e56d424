use std::collections::HashMap;

/// Stores declared variables and their current values.
///
/// An entry is created when a variable is first declared, overwritten when
/// it is assigned, and read when a `disp(<identifier>)` statement is
/// evaluated. A variable may be declared without a value (`var x`) and stay
/// unset until a later assignment. Entries are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    variables: HashMap<String, Option<i64>>,
}

#[allow(clippy::new_without_default)]
impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Declares `name` without a value.
    ///
    /// If the variable is already known, its current value is kept; a
    /// declaration never clears an earlier assignment.
    ///
    /// ## Example
    /// ```
    /// use myc::compiler::symbol_table::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.declare("x");
    ///
    /// assert_eq!(symbols.lookup("x"), Some(None));
    /// ```
    pub fn declare(&mut self, name: &str) {
        self.variables.entry(name.to_string()).or_insert(None);
    }

    /// Assigns `value` to `name`, declaring the variable if necessary.
    /// The last write wins.
    ///
    /// ## Example
    /// ```
    /// use myc::compiler::symbol_table::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.assign("x", 5);
    /// symbols.assign("x", 7);
    ///
    /// assert_eq!(symbols.lookup("x"), Some(Some(7)));
    /// ```
    pub fn assign(&mut self, name: &str, value: i64) {
        self.variables.insert(name.to_string(), Some(value));
    }

    /// Looks up the current value of `name`.
    ///
    /// A lookup never fails and never fabricates a value.
    ///
    /// # Returns
    /// - `None`: The variable was never declared.
    /// - `Some(None)`: The variable was declared but never assigned.
    /// - `Some(Some(value))`: The variable's last assigned value.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Option<i64>> {
        self.variables.get(name).copied()
    }

    /// The number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables have been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
