//! # myc
//!
//! myc is a compiler front-end for My, a small statement language with
//! variable declarations, assignments, and a display builtin. It splits
//! source text into statements, classifies each one, builds a parse table
//! and a symbol table, and evaluates the table to produce program output.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::compiler::{context::CompilationContext, splitter::split_statements};

/// Defines the structure of classified code.
///
/// This module declares the `ParseRow` sum type and the `Literal` type that
/// together represent a classified statement. Rows are built by the
/// classifier and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the three recognized row kinds: declaration, literal display,
///   and variable-reference display.
/// - Keeps each row's operands typed and complete, so no row can carry a
///   half-populated payload.
pub mod ast;
/// Orchestrates the entire process of compiling a program.
///
/// This module ties together statement splitting, lexing, classification,
/// the parse table, the symbol table, and evaluation to provide a complete
/// front end for My source text.
///
/// # Responsibilities
/// - Coordinates all pipeline stages: splitter, lexer, classifier, and
///   evaluator.
/// - Owns the compilation state through `CompilationContext`.
/// - Keeps the batch running to completion regardless of per-statement
///   errors.
pub mod compiler;
/// Provides unified error types for classification.
///
/// This module defines all errors that can be raised while recognizing
/// statements. It standardizes error reporting and carries the 1-based
/// statement index of each failure for traceability.
///
/// # Responsibilities
/// - Defines the error enum for all classification failure modes.
/// - Attaches statement indices to every diagnostic message.
/// - Supports integration with standard error handling traits.
pub mod error;

/// Separator line bracketing the statement listing in dump mode.
const DUMP_SEPARATOR: &str = "----------------------------------------";

/// Runs a My program and returns its output lines.
///
/// The source is compiled (split, classified, and recorded into a parse
/// table and symbol table) and then evaluated. Diagnostics for statements
/// that failed to classify are written to stderr; output lines are written
/// to stdout and also returned. Diagnostics never abort the run: the whole
/// batch is always processed, and whatever classified successfully is
/// evaluated.
///
/// With `dump_program` set, the split statements are listed verbatim on
/// stdout, bracketed by a separator line, before tokenization.
///
/// # Parameters
/// - `source`: The raw program text.
/// - `dump_program`: Whether to list the split statements before compiling.
///
/// # Returns
/// The program's output lines, in source order.
///
/// # Examples
/// ```
/// use myc::run_program;
///
/// // A declaration, an assignment, and two displays.
/// let output = run_program("var x=5; disp(x); disp(\"hello\");", false);
/// assert_eq!(output, vec!["5", "hello"]);
///
/// // A malformed statement only skips itself.
/// let output = run_program("foobar; disp(42);", false);
/// assert_eq!(output, vec!["42"]);
/// ```
pub fn run_program(source: &str, dump_program: bool) -> Vec<String> {
    if dump_program {
        println!("{DUMP_SEPARATOR}");
        for statement in split_statements(source) {
            println!("{statement}");
        }
        println!("{DUMP_SEPARATOR}");
    }

    let context = CompilationContext::compile(source);

    for diagnostic in &context.diagnostics {
        eprintln!("{diagnostic}");
    }

    let output = context.evaluate();
    for line in &output {
        println!("{line}");
    }

    output
}
