//! Field-identifier grammar
//!
//!     A field identifier is `<label>[*]=`: free-text label, an optional
//!     required-marker, and the terminating equals sign. The required
//!     marker only counts as such when the star sits immediately before the
//!     equals sign with at most one space in between; a star anywhere else
//!     is literal label text (`What*ever = ___` is a field called
//!     "What*ever").

use crate::formcode::ast::error::SyntaxErrorKind;
use crate::formcode::grammar::text::slice_text;
use crate::formcode::token::{SpannedToken, Token};

/// A parsed field identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
    pub label: String,
    pub required: bool,
    /// Index of the first token after the `=`.
    pub rest: usize,
}

/// Parse `<label>[*]=` from the front of a line's tokens.
///
/// Fails with `MalformedIdentifier` when there is no `=`, when the label is
/// empty, or when the label is broken by a wide whitespace gap (a double
/// space ends a label, so whatever follows it cannot reach the `=`).
pub fn field_identifier(
    source: &str,
    tokens: &[SpannedToken],
) -> Result<FieldIdentifier, SyntaxErrorKind> {
    let equals = tokens
        .iter()
        .position(|(t, _)| *t == Token::Equals)
        .ok_or(SyntaxErrorKind::MalformedIdentifier)?;

    // look behind the '=' for the required marker, tolerating one space
    let mut before = equals;
    if before > 0 && tokens[before - 1].0 == Token::Whitespace(1) {
        before -= 1;
    }
    let (required, label_end) = if before > 0 && tokens[before - 1].0 == Token::Star {
        (true, before - 1)
    } else {
        (false, equals)
    };

    let mut label_tokens = &tokens[..label_end];
    while label_tokens
        .last()
        .is_some_and(|(t, _)| t.is_whitespace())
    {
        label_tokens = &label_tokens[..label_tokens.len() - 1];
    }

    if label_tokens.is_empty() {
        return Err(SyntaxErrorKind::MalformedIdentifier);
    }
    if label_tokens.iter().any(|(t, _)| t.is_wide_gap()) {
        return Err(SyntaxErrorKind::MalformedIdentifier);
    }

    Ok(FieldIdentifier {
        label: slice_text(source, label_tokens).to_owned(),
        required,
        rest: equals + 1,
    })
}
