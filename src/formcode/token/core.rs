//! Token definitions for the formcode format
//!
//!     All tokens are defined using the logos derive macro for efficient
//!     tokenization. Tokenization always runs over *normalized* source text
//!     (see the lexing module), so indentation is guaranteed to be a ladder
//!     of 4-space units at the start of each line.
//!
//!     Whitespace carries its width because the grammar distinguishes a word
//!     break (a single space inside a label) from the end of a label (two or
//!     more spaces). Field-type sentinels are fixed tokens; where a sentinel
//!     overlaps the free-text catch-all at equal length, an explicit priority
//!     resolves the tie in the sentinel's favor.
//!
//!     Each token carries the byte range of its source text. Labels and
//!     format strings are recovered by slicing the source between token
//!     ranges, never by re-concatenating token text, so punctuation inside
//!     free text survives untouched.

use logos::Logos;
use serde::{Deserialize, Serialize};

/// A token paired with its byte range in the source text.
pub type SpannedToken = (Token, std::ops::Range<usize>);

/// All possible tokens in the formcode format
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// One indentation unit: 4 spaces or a tab.
    #[regex(r" {4}|\t", priority = 6)]
    Indentation,

    #[token("\n")]
    Newline,

    /// Inline whitespace, 1 to 3 spaces, carrying its width.
    #[regex(r" {1,3}", |lex| lex.slice().len(), priority = 5)]
    Whitespace(usize),

    #[token("=")]
    Equals,

    #[token("*")]
    Star,

    #[token("#")]
    Hash,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    // Atomic field-type sentinels
    #[regex(r"_{3}", priority = 10)]
    TextMark,
    #[regex(r"\.{3}", priority = 10)]
    TextareaMark,
    #[regex(r"\*{3}", priority = 10)]
    PasswordMark,
    #[regex(r"@{3}", priority = 10)]
    EmailMark,
    #[token("YYYY.MM.DD", priority = 22)]
    DateMark,
    #[token("HH:MM", priority = 12)]
    TimeMark,

    /// Integer literal, used for bracketed length/row hints.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok(), priority = 4)]
    Number(u64),

    /// Free text run (catch-all for anything without grammar meaning).
    #[regex(r"[^ \t\n=*#()\[\]]+", |lex| lex.slice().to_owned(), priority = 2)]
    Text(String),
}

impl Token {
    /// Check if this token is whitespace of any kind.
    pub fn is_whitespace(&self) -> bool {
        matches!(
            self,
            Token::Whitespace(_) | Token::Indentation | Token::Newline
        )
    }

    /// Check if this token is a whitespace gap wider than one column.
    ///
    /// A wide gap terminates a label run; a single space is a word break.
    /// Runs of 4+ spaces lex as `Indentation` even mid-line, so those count
    /// as wide gaps too.
    pub fn is_wide_gap(&self) -> bool {
        match self {
            Token::Whitespace(width) => *width > 1,
            Token::Indentation => true,
            _ => false,
        }
    }

    /// Check if this token opens a choice marker.
    pub fn is_option_open(&self) -> bool {
        matches!(self, Token::OpenParen | Token::OpenBracket)
    }
}
