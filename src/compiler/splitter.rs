/// Splits raw source text into trimmed, non-empty statements.
///
/// Statements are delimited by `;`. Each fragment is trimmed of surrounding
/// whitespace, and fragments that are empty after trimming (such as the text
/// after a trailing `;`, or a stray `;;`) are dropped. No validation happens
/// here; malformed statements are caught by the classifier.
///
/// # Parameters
/// - `source`: The raw program text.
///
/// # Returns
/// The statements in source order.
///
/// ## Example
/// ```
/// use myc::compiler::splitter::split_statements;
///
/// let statements = split_statements("var x=5;\ndisp(x);");
///
/// assert_eq!(statements, vec!["var x=5", "disp(x)"]);
/// ```
#[must_use]
pub fn split_statements(source: &str) -> Vec<&str> {
    source.split(';')
          .map(str::trim)
          .filter(|statement| !statement.is_empty())
          .collect()
}
