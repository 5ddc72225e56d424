#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while classifying a statement.
///
/// Each variant carries the 1-based index of the offending statement so
/// diagnostics can be traced back to the source. A classification error only
/// skips its own statement; the rest of the batch is still processed.
pub enum ParseError {
    /// The right-hand side of an assignment was not a valid integer literal.
    TypeError {
        /// The 1-based index of the offending statement.
        statement: usize,
    },
    /// The statement matched none of the recognized forms.
    InvalidSyntax {
        /// The 1-based index of the offending statement.
        statement: usize,
    },
}

impl ParseError {
    /// Gets the 1-based statement index from `self`.
    /// ## Example
    /// ```
    /// use myc::error::ParseError;
    ///
    /// let error = ParseError::InvalidSyntax { statement: 3 };
    ///
    /// assert_eq!(error.statement_index(), 3);
    /// ```
    #[must_use]
    pub const fn statement_index(&self) -> usize {
        match self {
            Self::TypeError { statement } | Self::InvalidSyntax { statement } => *statement,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeError { statement } => {
                write!(f, "type error in statement {statement}")
            },

            Self::InvalidSyntax { statement } => {
                write!(f, "Invalid syntax in statement {statement}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
