use crate::{ast::ParseRow, compiler::context::CompilationContext};

impl CompilationContext {
    /// Evaluates the parse table and returns the program output.
    ///
    /// Rows are visited in insertion order, and each display row produces
    /// exactly one output line: literals are emitted verbatim (string
    /// literals without their quotes), variable references are resolved
    /// against the symbol table. A reference to an unset or never-declared
    /// variable resolves to an empty line rather than an error. Declarations
    /// produce no output of their own.
    ///
    /// Evaluation never fails; all validation happened during
    /// classification, and the table is immutable, so repeated calls return
    /// identical output.
    ///
    /// # Returns
    /// One line per display row, in source order.
    ///
    /// ## Example
    /// ```
    /// use myc::compiler::context::CompilationContext;
    ///
    /// let context = CompilationContext::compile("var x=5; disp(x); disp(\"done\");");
    ///
    /// assert_eq!(context.evaluate(), vec!["5", "done"]);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> Vec<String> {
        let mut output = Vec::new();

        for row in self.table.iter() {
            match row {
                ParseRow::Declaration { .. } => {},
                ParseRow::DisplayLiteral { value } => output.push(value.to_string()),
                ParseRow::DisplayRef { name } => {
                    let line = match self.symbols.lookup(name).flatten() {
                        Some(value) => value.to_string(),
                        None => String::new(),
                    };
                    output.push(line);
                },
            }
        }

        output
    }
}
