use std::fs;

use myc::{
    ast::{Literal, ParseRow},
    compiler::{
        classifier::classify_statement, context::CompilationContext, splitter::split_statements,
    },
    error::ParseError,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_compile_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "my")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let context = CompilationContext::compile(&source);
        assert!(context.diagnostics.is_empty(),
                "Sample program {:?} produced diagnostics: {:?}",
                path,
                context.diagnostics);
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

fn assert_output(source: &str, expected: &[&str]) {
    let context = CompilationContext::compile(source);
    assert!(context.diagnostics.is_empty(),
            "Program {source:?} produced diagnostics: {:?}",
            context.diagnostics);
    assert_eq!(context.evaluate(), expected, "Wrong output for {source:?}");
}

fn assert_diagnostics(source: &str, expected: &[ParseError]) {
    let context = CompilationContext::compile(source);
    assert_eq!(context.diagnostics, expected,
               "Wrong diagnostics for {source:?}");
}

#[test]
fn splitting_accounts_for_every_fragment() {
    for source in ["var x=5; disp(x);",
                   ";;;",
                   "  ",
                   "var x; ; disp(x) ;;",
                   "disp(1);disp(2);disp(3)"]
    {
        let fragments = source.split(';').count();
        let retained = split_statements(source).len();
        let dropped = fragments - retained;
        assert_eq!(retained + dropped, fragments);
        assert!(split_statements(source).iter()
                                        .all(|s| !s.is_empty() && s.trim() == *s));
    }
}

#[test]
fn whitespace_only_statements_are_dropped() {
    assert_eq!(split_statements("  ;\t;\n; disp(1) ;"), vec!["disp(1)"]);
    assert_eq!(split_statements(""), Vec::<&str>::new());
}

#[test]
fn assignment_then_display() {
    let context = CompilationContext::compile("var x=5; disp(x);");
    assert_eq!(context.symbols.lookup("x"), Some(Some(5)));
    assert_eq!(context.evaluate(), vec!["5"]);
}

#[test]
fn bare_declaration_displays_unset() {
    let context = CompilationContext::compile("var x; disp(x);");
    assert_eq!(context.symbols.lookup("x"), Some(None));
    assert_eq!(context.evaluate(), vec![""]);
    assert!(context.diagnostics.is_empty());
}

#[test]
fn integer_literal_display() {
    let context = CompilationContext::compile("disp(42);");
    assert_eq!(context.table.iter().next(),
               Some(&ParseRow::DisplayLiteral { value: Literal::Integer(42) }));
    assert_eq!(context.evaluate(), vec!["42"]);
}

#[test]
fn string_literal_display() {
    let context = CompilationContext::compile("disp(\"hello\");");
    assert_eq!(context.table.iter().next(),
               Some(&ParseRow::DisplayLiteral { value: Literal::Str("hello".to_string()) }));
    assert_eq!(context.evaluate(), vec!["hello"]);
}

#[test]
fn negative_integers_and_empty_strings() {
    assert_output("disp(-7);", &["-7"]);
    assert_output("var x=-3; disp(x);", &["-3"]);
    assert_output("disp(\"\");", &[""]);
}

#[test]
fn undeclared_reference_is_unset_not_an_error() {
    assert_output("disp(y);", &[""]);
}

#[test]
fn malformed_assignment_reports_type_error() {
    assert_diagnostics("var x=abc;", &[ParseError::TypeError { statement: 1 }]);

    // The bad statement adds no row and later statements still run.
    let context = CompilationContext::compile("var x=abc; disp(7);");
    assert_eq!(context.diagnostics,
               vec![ParseError::TypeError { statement: 1 }]);
    assert_eq!(context.table.len(), 1);
    assert_eq!(context.symbols.lookup("x"), None);
    assert_eq!(context.evaluate(), vec!["7"]);
}

#[test]
fn malformed_assignment_values() {
    assert_diagnostics("var x=;", &[ParseError::TypeError { statement: 1 }]);
    assert_diagnostics("var x=\"text\";", &[ParseError::TypeError { statement: 1 }]);
    assert_diagnostics("var x=1 2;", &[ParseError::TypeError { statement: 1 }]);
    assert_diagnostics("var x=@;", &[ParseError::TypeError { statement: 1 }]);
}

#[test]
fn unrecognized_statement_reports_syntax_error() {
    assert_diagnostics("foobar;", &[ParseError::InvalidSyntax { statement: 1 }]);

    // Processing continues past the bad statement.
    let context = CompilationContext::compile("var x=5; foobar; disp(x);");
    assert_eq!(context.diagnostics,
               vec![ParseError::InvalidSyntax { statement: 2 }]);
    assert_eq!(context.evaluate(), vec!["5"]);
}

#[test]
fn unrecognized_statement_forms() {
    assert_diagnostics("var;", &[ParseError::InvalidSyntax { statement: 1 }]);
    assert_diagnostics("var x 5;", &[ParseError::InvalidSyntax { statement: 1 }]);
    assert_diagnostics("disp();", &[ParseError::InvalidSyntax { statement: 1 }]);
    assert_diagnostics("disp(x;", &[ParseError::InvalidSyntax { statement: 1 }]);
    assert_diagnostics("disp(\"unterminated);",
                       &[ParseError::InvalidSyntax { statement: 1 }]);

    // Garbage before the assignment prefix is a syntax error, not a type
    // error.
    assert_diagnostics("var @ x=5;", &[ParseError::InvalidSyntax { statement: 1 }]);
}

#[test]
fn diagnostics_carry_one_based_indices() {
    let context = CompilationContext::compile("disp(1); foobar; var x=abc; disp(2);");
    assert_eq!(context.diagnostics,
               vec![ParseError::InvalidSyntax { statement: 2 },
                    ParseError::TypeError { statement: 3 }]);
    assert_eq!(context.diagnostics[0].statement_index(), 2);
    assert_eq!(context.evaluate(), vec!["1", "2"]);
}

#[test]
fn diagnostic_messages() {
    assert_eq!(ParseError::TypeError { statement: 4 }.to_string(),
               "type error in statement 4");
    assert_eq!(ParseError::InvalidSyntax { statement: 2 }.to_string(),
               "Invalid syntax in statement 2");
}

#[test]
fn output_order_matches_source_order() {
    assert_output("disp(1); var x=2; disp(x); disp(\"three\"); disp(4);",
                  &["1", "2", "three", "4"]);
}

#[test]
fn reevaluation_is_idempotent() {
    let context = CompilationContext::compile("var x=5; disp(x); disp(\"again\");");
    let first = context.evaluate();
    let second = context.evaluate();
    assert_eq!(first, second);
}

#[test]
fn last_write_wins() {
    assert_output("var x=1; var x=2; disp(x);", &["2"]);

    // A later bare declaration does not clear an earlier assignment.
    assert_output("var x=9; var x; disp(x);", &["9"]);
}

#[test]
fn classifier_extracts_declaration_operands() {
    let row = classify_statement("var result=10", 1).unwrap();
    assert_eq!(row,
               ParseRow::Declaration { name:  "result".to_string(),
                                       value: Some(10), });
    assert!(!row.is_display());

    let row = classify_statement("var result", 1).unwrap();
    assert_eq!(row,
               ParseRow::Declaration { name:  "result".to_string(),
                                       value: None, });
}

#[test]
fn whitespace_inside_statements_is_tolerated() {
    assert_output("var  x   =  5 ; disp( x ) ;", &["5"]);
    assert_output("var\ny=2;\ndisp(y);", &["2"]);
}

#[test]
fn resolution_is_deferred_to_evaluation() {
    // The display is classified before the assignment below it, but the
    // symbol table is complete by the time evaluation happens.
    assert_output("var x=1; disp(x); var x=2; disp(x);", &["2", "2"]);
}
