//! Bounded text runs
//!
//!     Labels are free text living between grammar punctuation, so the
//!     label primitive takes an explicit terminator set instead of relying
//!     on global lexer state. A run accepts tokens until it hits a
//!     terminator, a whitespace gap wider than one column, or the end of
//!     the slice. Single spaces inside the run are word breaks and are
//!     kept; a trailing space run is never part of the label.
//!
//!     Label text is recovered by slicing the source between the byte
//!     ranges of the first and last accepted token, so punctuation that is
//!     also grammar syntax (periods, question marks, stars in the middle of
//!     a word) survives verbatim.

use crate::formcode::token::{SpannedToken, Token};

/// Longest prefix of `tokens` usable as label text.
///
/// Returns the exclusive end index of the run. The run stops at the first
/// token for which `is_terminator` returns true, at any wide whitespace
/// gap, or at the end of the slice. Trailing whitespace is not included.
pub fn label_run(tokens: &[SpannedToken], is_terminator: impl Fn(&Token) -> bool) -> usize {
    let mut end = 0;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i].0;
        if is_terminator(token) {
            break;
        }
        match token {
            Token::Whitespace(1) => i += 1,
            t if t.is_wide_gap() => break,
            _ => {
                i += 1;
                end = i;
            }
        }
    }

    end
}

/// Slice the source text covered by a token run.
pub fn slice_text<'s>(source: &'s str, tokens: &[SpannedToken]) -> &'s str {
    match (tokens.first(), tokens.last()) {
        (Some((_, first)), Some((_, last))) => &source[first.start..last.end],
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formcode::lexing::base_tokenization::tokenize;

    fn run_text(source: &str, terminators: &[Token]) -> String {
        let tokens = tokenize(source);
        let end = label_run(&tokens, |t| terminators.contains(t));
        slice_text(source, &tokens[..end]).to_owned()
    }

    #[test]
    fn test_run_stops_at_terminator() {
        assert_eq!(run_text("what what= x", &[Token::Equals]), "what what");
        assert_eq!(run_text("Male (x) Female", &[Token::OpenParen]), "Male");
    }

    #[test]
    fn test_single_space_is_a_word_break() {
        assert_eq!(run_text("a b", &[]), "a b");
        assert_eq!(run_text("a b ", &[]), "a b");
    }

    #[test]
    fn test_wide_gap_ends_the_run() {
        assert_eq!(run_text("a  b", &[]), "a");
        assert_eq!(run_text("a     b", &[]), "a");
    }

    #[test]
    fn test_punctuation_survives() {
        assert_eq!(run_text("OMG. U ok?! =", &[Token::Equals]), "OMG. U ok?!");
    }
}
