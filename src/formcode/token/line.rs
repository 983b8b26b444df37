//! Line-based token types for the lexer pipeline
//!
//!     Formcode is a line-oriented grammar: every block boundary falls on a
//!     line boundary, and nesting is carried entirely by indentation. After
//!     base tokenization the flat token stream is regrouped into one
//!     `SourceLine` per non-blank line, each carrying its indentation level
//!     on the normalized ladder, its 1-based line number in the original
//!     text, and a line classification.
//!
//!     The classification is deliberately shallow. It answers one question,
//!     "which grammar may start on this line", and the detailed grammars
//!     (field identifier, atomic types, choice markers) then walk the line's
//!     tokens. See the classification table in
//!     [patterns](crate::formcode::grammar::patterns).

use serde::{Deserialize, Serialize};

use super::core::SpannedToken;

/// The classification of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineType {
    /// A fieldset heading: the line starts with `#`.
    HeadingLine,
    /// A choice-group option: the line starts with `( )`, `(x)`, `[ ]` or `[x]`.
    OptionLine,
    /// A field line: contains an `=` and starts with neither `#` nor a marker.
    FieldLine,
    /// Anything else; only valid as an error site.
    UnrecognizedLine,
}

/// One logical line created from grouped raw tokens.
///
/// Leading indentation and the trailing newline are consumed during
/// grouping; `tokens` holds only the line's content. Token byte ranges point
/// into the normalized source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// 1-based line number in the original (pre-normalization) text.
    pub number: usize,

    /// Indentation level on the normalized ladder.
    pub level: usize,

    /// The line's classification.
    pub line_type: LineType,

    /// Content tokens with their byte ranges in the normalized source.
    pub tokens: Vec<SpannedToken>,
}

impl SourceLine {
    /// Byte range of the line's content in the normalized source.
    pub fn span(&self) -> std::ops::Range<usize> {
        match (self.tokens.first(), self.tokens.last()) {
            (Some((_, first)), Some((_, last))) => first.start..last.end,
            _ => 0..0,
        }
    }
}
