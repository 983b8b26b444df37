//! Lexer
//!
//!     This module orchestrates the tokenization pipeline for formcode.
//!     The pipeline consists of:
//!
//!         1. Indentation normalization. See [normalization]. A text-to-text
//!            pre-pass that rewrites irregular leading whitespace into a
//!            canonical ladder of 4-space units, one per nesting level. All
//!            later stages rely on this and never see raw indentation.
//!
//!         2. Base tokenization using the logos lexer. See
//!            [base_tokenization]. Produces a flat stream of tokens with
//!            byte ranges into the normalized source.
//!
//!         3. Line grouping. See [line_grouping]. Splits the flat stream at
//!            newlines into classified [SourceLine]s carrying indentation
//!            level and original line number. Blank lines are dropped here;
//!            they have no grammar meaning in formcode.
//!
//!     The output is what the block assembler consumes. Keeping
//!     normalization as its own text-level stage (rather than folding it
//!     into the lexer) means the indentation policy can change without
//!     touching grammar rules, and the normalizer can be tested on its
//!     text-to-text contract directly.

pub mod base_tokenization;
pub mod line_grouping;
pub mod normalization;

pub use base_tokenization::{ensure_source_ends_with_newline, tokenize};
pub use line_grouping::group_into_lines;
pub use normalization::normalize;

use crate::formcode::token::SourceLine;

/// Run the full lexing pipeline: normalize, tokenize, group.
///
/// Returns the normalized source (labels are sliced out of it later) along
/// with the classified lines.
pub fn lex(source: &str) -> (String, Vec<SourceLine>) {
    let normalized = ensure_source_ends_with_newline(&normalize(source));
    let lines = group_into_lines(tokenize(&normalized));
    (normalized, lines)
}
