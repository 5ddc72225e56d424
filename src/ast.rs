/// Represents a literal value in the My language.
///
/// `Literal` covers the raw, constant values that can appear directly in
/// source code as the argument of a `disp(...)` statement: integers and
/// quoted strings. It is used in parse-table rows to carry the value that a
/// display statement emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal, stored without its surrounding quotes.
    Str(String),
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Str(text) => write!(f, "{text}"),
        }
    }
}

/// A classified statement; one row of the parse table.
///
/// `ParseRow` is a tagged union over the three statement forms the
/// classifier recognizes. Each variant carries exactly the operands that are
/// meaningful for its form, so a row can never be half-populated: a row is a
/// declaration, a literal display, or a variable-reference display, and
/// nothing else.
///
/// Rows are created once during classification and never modified
/// afterwards; the evaluator only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRow {
    /// A `var` statement, optionally carrying an assigned integer value.
    Declaration {
        /// The declared variable name.
        name:  String,
        /// The assigned value, or `None` for a bare declaration.
        value: Option<i64>,
    },
    /// A `disp(...)` statement displaying an integer or string literal.
    DisplayLiteral {
        /// The literal to display.
        value: Literal,
    },
    /// A `disp(...)` statement displaying a variable.
    /// The name is resolved against the symbol table at evaluation time.
    DisplayRef {
        /// The referenced variable name.
        name: String,
    },
}

impl ParseRow {
    /// Whether this row produces an output line when evaluated.
    /// ## Example
    /// ```
    /// use myc::ast::ParseRow;
    ///
    /// let row = ParseRow::DisplayRef { name: "x".to_string() };
    ///
    /// assert!(row.is_display());
    /// ```
    #[must_use]
    pub const fn is_display(&self) -> bool {
        matches!(self, Self::DisplayLiteral { .. } | Self::DisplayRef { .. })
    }
}
