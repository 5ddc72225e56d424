/// The classifier module recognizes statement forms and extracts operands.
///
/// The classifier matches each statement's token sequence against the
/// recognized forms: declaration/assignment first, then display. A matching
/// statement becomes a parse-table row; anything else becomes a
/// per-statement diagnostic.
///
/// # Responsibilities
/// - Recognizes `var` declarations, assignments, and `disp(...)` statements.
/// - Extracts operands (names, integer and string literals) into typed rows.
/// - Reports malformed assignment values and unrecognized statements with
///   their 1-based statement index.
pub mod classifier;
/// The context module owns the state produced by compilation.
///
/// A `CompilationContext` bundles the parse table, the symbol table, and the
/// diagnostics collected while classifying a program. It replaces
/// process-wide mutable state: the pipeline driver creates one, the
/// classifier fills it, and the evaluator reads it.
pub mod context;
/// The evaluator module walks the parse table and produces output.
///
/// The evaluator visits rows in insertion order and emits one output line
/// per display row, resolving variable references against the symbol table.
/// All validation has already happened during classification, so evaluation
/// never fails.
pub mod evaluator;
/// The lexer module tokenizes a single statement for classification.
///
/// The lexer reads one statement and produces the tokens the classifier
/// matches against: keywords, punctuation, and integer, string, and
/// identifier literals. Literal recognition is ordered (integer, then quoted
/// string, then bare identifier) by the token rules themselves.
pub mod lexer;
/// The splitter module divides raw source text into statements.
pub mod splitter;
/// The symbol table module tracks declared variables and their values.
///
/// Variables are created at their first declaration, overwritten on
/// assignment, and read when a display statement references them. A variable
/// may be declared without a value and stay unset until assigned.
pub mod symbol_table;
/// The table module defines the ordered parse table.
pub mod table;
