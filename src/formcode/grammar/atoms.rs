//! Atomic field-type grammar
//!
//!     Table of fixed sentinels, matched against the tokens following a
//!     field's `=`:
//!
//!         ___[n]         text, optional length
//!         ...[n]         textarea, optional rows
//!         ***            password
//!         @@@            email
//!         # <format>     stdnum, format runs to end of line
//!         YYYY.MM.DD     date
//!         YYYY.MM.DD HH:MM   datetime
//!         HH:MM          time
//!
//!     The date family is keyed on the date sentinel first so the shorter
//!     time pattern cannot consume the date-only case. A missing bracket
//!     hint leaves the parameter unset; it is never defaulted to a number.

use crate::formcode::ast::error::SyntaxErrorKind;
use crate::formcode::ast::FieldKind;
use crate::formcode::grammar::text::slice_text;
use crate::formcode::token::{SpannedToken, Token};

/// Try to parse an atomic field type from the tokens after the `=`.
///
/// Returns `None` when the slice does not start with an atomic sentinel
/// (the caller then tries the choice-group grammar). Returns
/// `Some(Err(UnknownFieldType))` when it starts like one but carries
/// trailing junk or a malformed hint.
pub fn atomic_field(
    source: &str,
    tokens: &[SpannedToken],
) -> Option<Result<FieldKind, SyntaxErrorKind>> {
    let first = match tokens.first() {
        Some((token, _)) => token,
        None => return None,
    };

    let result = match first {
        Token::TextMark => {
            parse_hint(&tokens[1..]).map(|length| FieldKind::Text { length })
        }
        Token::TextareaMark => {
            parse_hint(&tokens[1..]).map(|rows| FieldKind::Textarea { rows })
        }
        Token::PasswordMark => blank(&tokens[1..]).map(|_| FieldKind::Password),
        Token::EmailMark => blank(&tokens[1..]).map(|_| FieldKind::Email),
        Token::DateMark => parse_date_tail(&tokens[1..]),
        Token::TimeMark => blank(&tokens[1..]).map(|_| FieldKind::Time),
        Token::Hash => parse_format(source, &tokens[1..]),
        _ => return None,
    };

    Some(result)
}

/// An optional `[n]` hint, then nothing but whitespace.
fn parse_hint(tokens: &[SpannedToken]) -> Result<Option<u64>, SyntaxErrorKind> {
    let tokens = skip_whitespace(tokens);
    if tokens.first().map(|(t, _)| t) != Some(&Token::OpenBracket) {
        blank(tokens)?;
        return Ok(None);
    }
    match tokens {
        [(Token::OpenBracket, _), (Token::Number(n), _), (Token::CloseBracket, _), rest @ ..] => {
            blank(rest)?;
            Ok(Some(*n))
        }
        _ => Err(SyntaxErrorKind::UnknownFieldType),
    }
}

/// `YYYY.MM.DD` was consumed; a trailing `HH:MM` upgrades date to datetime.
fn parse_date_tail(tokens: &[SpannedToken]) -> Result<FieldKind, SyntaxErrorKind> {
    let tokens = skip_whitespace(tokens);
    match tokens {
        [] => Ok(FieldKind::Date),
        [(Token::TimeMark, _), rest @ ..] => {
            blank(rest)?;
            Ok(FieldKind::Datetime)
        }
        _ => Err(SyntaxErrorKind::UnknownFieldType),
    }
}

/// The stdnum format: free text running to the end of the line.
fn parse_format(
    source: &str,
    tokens: &[SpannedToken],
) -> Result<FieldKind, SyntaxErrorKind> {
    let mut tokens = skip_whitespace(tokens);
    while tokens.last().is_some_and(|(t, _)| t.is_whitespace()) {
        tokens = &tokens[..tokens.len() - 1];
    }
    if tokens.is_empty() {
        return Err(SyntaxErrorKind::UnknownFieldType);
    }
    Ok(FieldKind::Stdnum {
        format: slice_text(source, tokens).to_owned(),
    })
}

fn skip_whitespace(mut tokens: &[SpannedToken]) -> &[SpannedToken] {
    while tokens.first().is_some_and(|(t, _)| t.is_whitespace()) {
        tokens = &tokens[1..];
    }
    tokens
}

/// Nothing but whitespace may remain after a sentinel.
fn blank(tokens: &[SpannedToken]) -> Result<(), SyntaxErrorKind> {
    if tokens.iter().all(|(t, _)| t.is_whitespace()) {
        Ok(())
    } else {
        Err(SyntaxErrorKind::UnknownFieldType)
    }
}
