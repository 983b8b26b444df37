//! Parse failure tests
//!
//! Every rejection carries the failure kind, the 1-based line number in the
//! original text and an excerpt of the offending line.

use formcode::{parse, SyntaxErrorKind};

fn fail(source: &str) -> formcode::SyntaxError {
    parse(source).expect_err("expected a parse failure")
}

#[test]
fn test_line_without_identifier() {
    let error = fail("just text");
    assert_eq!(error.kind, SyntaxErrorKind::MalformedIdentifier);
    assert_eq!(error.line, 1);
    assert_eq!(error.excerpt, "just text");
}

#[test]
fn test_line_numbers_point_into_original_text() {
    // blank lines do not shift the reported number
    let error = fail("\n\nName = ___\n\noops\n");
    assert_eq!(error.kind, SyntaxErrorKind::MalformedIdentifier);
    assert_eq!(error.line, 5);
    assert_eq!(error.excerpt, "oops");
}

#[test]
fn test_empty_label() {
    let error = fail("= ___");
    assert_eq!(error.kind, SyntaxErrorKind::MalformedIdentifier);
}

#[test]
fn test_unknown_field_type() {
    let error = fail("Name = whatever");
    assert_eq!(error.kind, SyntaxErrorKind::UnknownFieldType);
    assert_eq!(error.line, 1);
}

#[test]
fn test_field_without_type_or_options() {
    assert_eq!(fail("Name =").kind, SyntaxErrorKind::UnknownFieldType);
    assert_eq!(fail("Name =\n").kind, SyntaxErrorKind::UnknownFieldType);
}

#[test]
fn test_mixed_markers_on_one_line() {
    let error = fail("Toppings = ( ) Ham [ ] Cheese");
    assert_eq!(error.kind, SyntaxErrorKind::InconsistentChoiceMarkers);
}

#[test]
fn test_mixed_markers_across_lines() {
    let error = fail("Toppings =\n    ( ) Ham\n    [ ] Cheese\n");
    assert_eq!(error.kind, SyntaxErrorKind::InconsistentChoiceMarkers);
    assert_eq!(error.line, 3);
}

#[test]
fn test_nested_block_under_atomic_field() {
    let error = fail("Name = ___\n    Street = ___\n");
    assert_eq!(error.kind, SyntaxErrorKind::IndentationAmbiguous);
    assert_eq!(error.line, 2);
    assert_eq!(error.excerpt, "Street = ___");
}

#[test]
fn test_indented_block_under_heading() {
    let error = fail("# Address\n    Street = ___\n");
    assert_eq!(error.kind, SyntaxErrorKind::IndentationAmbiguous);
    assert_eq!(error.line, 2);
}

#[test]
fn test_option_without_enclosing_field() {
    let error = fail("( ) alone\n");
    assert_eq!(error.kind, SyntaxErrorKind::MalformedIdentifier);
    assert_eq!(error.line, 1);
}

#[test]
fn test_dependency_before_first_option() {
    let error = fail("Choice =\n    Name = ___\n    ( ) one\n");
    assert_eq!(error.kind, SyntaxErrorKind::UnknownFieldType);
    assert_eq!(error.line, 1);
}

#[test]
fn test_nesting_depth_limit() {
    let mut source = String::new();
    for depth in 0..80 {
        source.push_str(&"    ".repeat(depth));
        source.push_str(&format!("F{depth} = ( ) option\n"));
    }
    let error = fail(&source);
    assert_eq!(error.kind, SyntaxErrorKind::MaxNestingDepthExceeded);
}

#[test]
fn test_source_context_marks_the_failing_line() {
    let source = "Name = ___\noops\nOther = ___\n";
    let error = fail(source);
    let context = error.source_context(source);
    assert!(context.contains(">>   2 | oops"));
    assert!(context.contains("     1 | Name = ___"));
}
