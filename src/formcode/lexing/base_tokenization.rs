//! Base tokenization
//!
//!     Runs the logos lexer over normalized source text and produces the
//!     flat `(Token, byte range)` stream the rest of the pipeline consumes.
//!
//!     Tokenization never fails: the token set has a free-text catch-all,
//!     and any slice logos still rejects (a number too large for u64, for
//!     example) is degraded to a text token. Whether such text is
//!     meaningful is the grammar's decision, not the lexer's.

use logos::Logos;

use crate::formcode::token::{SpannedToken, Token};

/// Preprocesses source text to ensure it ends with a newline.
///
/// Line grouping flushes a line when it sees the newline token, so the last
/// line needs one too. Returns the original string if it already ends with
/// a newline, otherwise appends one.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize source text into a flat stream of spanned tokens.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => tokens.push((Token::Text(lexer.slice().to_owned()), span)),
        }
    }

    tokens
}
