//! Choice-group grammar
//!
//!     One option is a bracketed marker followed by a label: `( )` / `(x)`
//!     for radio, `[ ]` / `[x]` for checkbox. Several options may sit on
//!     one line, each label running until the next marker opens; or each
//!     option sits on its own line. This module parses the options found
//!     on a single line — the assembler decides which lines belong to the
//!     group.
//!
//!     The marker style is reported per option so the assembler can pin the
//!     group's style to the first option and reject mixing.

use crate::formcode::ast::error::SyntaxErrorKind;
use crate::formcode::grammar::text::{label_run, slice_text};
use crate::formcode::token::{SpannedToken, Token};

/// The bracket style of a choice marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Radio,
    Checkbox,
}

/// One option parsed from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    pub label: String,
    pub checked: bool,
}

/// Parse one or more options from a line's token slice.
///
/// The slice must contain nothing but options and whitespace; anything
/// else, a malformed marker, or a missing label fails with
/// `UnknownFieldType`.
pub fn option_sequence(
    source: &str,
    tokens: &[SpannedToken],
) -> Result<Vec<(MarkerStyle, ParsedOption)>, SyntaxErrorKind> {
    let mut options = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        while i < tokens.len() && tokens[i].0.is_whitespace() {
            i += 1;
        }
        if i == tokens.len() {
            break;
        }

        let (style, checked, after) = marker(tokens, i)?;
        i = after;
        while i < tokens.len() && tokens[i].0.is_whitespace() {
            i += 1;
        }

        let run = label_run(&tokens[i..], |t| t.is_option_open());
        if run == 0 {
            return Err(SyntaxErrorKind::UnknownFieldType);
        }
        options.push((
            style,
            ParsedOption {
                label: slice_text(source, &tokens[i..i + run]).to_owned(),
                checked,
            },
        ));
        i += run;
    }

    Ok(options)
}

/// Match `( )`, `(x)`, `[ ]` or `[x]` at `start`.
fn marker(
    tokens: &[SpannedToken],
    start: usize,
) -> Result<(MarkerStyle, bool, usize), SyntaxErrorKind> {
    let style = match tokens.get(start).map(|(t, _)| t) {
        Some(Token::OpenParen) => MarkerStyle::Radio,
        Some(Token::OpenBracket) => MarkerStyle::Checkbox,
        _ => return Err(SyntaxErrorKind::UnknownFieldType),
    };

    let checked = match tokens.get(start + 1).map(|(t, _)| t) {
        Some(Token::Whitespace(1)) => false,
        Some(Token::Text(text)) if text == "x" => true,
        _ => return Err(SyntaxErrorKind::UnknownFieldType),
    };

    let close = match style {
        MarkerStyle::Radio => Token::CloseParen,
        MarkerStyle::Checkbox => Token::CloseBracket,
    };
    if tokens.get(start + 2).map(|(t, _)| t) != Some(&close) {
        return Err(SyntaxErrorKind::UnknownFieldType);
    }

    Ok((style, checked, start + 3))
}
