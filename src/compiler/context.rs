use crate::{
    ast::ParseRow,
    compiler::{
        classifier::classify_statement, splitter::split_statements, symbol_table::SymbolTable,
        table::ParseTable,
    },
    error::ParseError,
};

/// Stores the state produced by compiling a My program.
///
/// This struct bundles everything the pipeline builds: the ordered parse
/// table, the variable symbol table, and the diagnostics collected along the
/// way. It is created once per program, filled during classification, and
/// read (never written) by the evaluator.
///
/// ## Usage
///
/// `CompilationContext::compile` runs the whole front end over a source
/// string; `evaluate` then produces the program output from the result.
pub struct CompilationContext {
    /// The ordered parse table of classified statements.
    pub table:       ParseTable,
    /// The variable symbol table, updated as declarations and assignments
    /// are classified.
    pub symbols:     SymbolTable,
    /// Per-statement diagnostics, in the order they were raised.
    pub diagnostics: Vec<ParseError>,
}

#[allow(clippy::new_without_default)]
impl CompilationContext {
    /// Creates an empty compilation context with no classified statements
    /// and no declared variables.
    #[must_use]
    pub fn new() -> Self {
        Self { table:       ParseTable::new(),
               symbols:     SymbolTable::new(),
               diagnostics: Vec::new(), }
    }

    /// Compiles My source text into a parse table and symbol table.
    ///
    /// The source is split into statements, and each statement is classified
    /// in order. Successfully classified rows are appended to the parse
    /// table; declarations and assignments update the symbol table as a side
    /// effect. A statement that fails to classify is recorded as a
    /// diagnostic and skipped, so compilation always reaches the end of the
    /// source.
    ///
    /// # Parameters
    /// - `source`: The raw program text.
    ///
    /// # Returns
    /// The filled context, including any diagnostics.
    ///
    /// ## Example
    /// ```
    /// use myc::compiler::context::CompilationContext;
    ///
    /// let context = CompilationContext::compile("var x=5; disp(x);");
    ///
    /// assert!(context.diagnostics.is_empty());
    /// assert_eq!(context.table.len(), 2);
    /// assert_eq!(context.symbols.lookup("x"), Some(Some(5)));
    /// ```
    #[must_use]
    pub fn compile(source: &str) -> Self {
        let mut context = Self::new();

        for (index, statement) in split_statements(source).iter().enumerate() {
            match classify_statement(statement, index + 1) {
                Ok(row) => {
                    context.record(&row);
                    context.table.push(row);
                },
                Err(e) => context.diagnostics.push(e),
            }
        }

        context
    }

    /// Applies the symbol-table side effect of a classified row.
    ///
    /// Declarations insert an unset entry, assignments overwrite the current
    /// value. Display rows leave the symbol table untouched.
    fn record(&mut self, row: &ParseRow) {
        if let ParseRow::Declaration { name, value } = row {
            match value {
                Some(v) => self.symbols.assign(name, *v),
                None => self.symbols.declare(name),
            }
        }
    }
}
