//! Core token types shared across the lexer and the block assembler.

pub mod core;
pub mod line;

pub use self::core::{SpannedToken, Token};
pub use self::line::{LineType, SourceLine};
