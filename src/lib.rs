//! # formcode
//!
//! A parser for the formcode format.
//!
//! Formcode lets non-programmers author form definitions as indented plain
//! text. A document is a sequence of blocks: fieldset headings and typed
//! fields. Fields are either atomic (a sentinel token such as `___` or `@@@`
//! after the `=`) or choice groups (radio/checkbox options), and options may
//! carry nested follow-up blocks expressed purely through indentation:
//!
//!     # Delivery
//!
//!     Method * =
//!         (x) Pickup
//!         ( ) Courier
//!             Address = ___
//!
//! Parsing is a pure function from source text to an immutable tree. The
//! pipeline mirrors the module layout:
//!
//!     raw text -> normalization -> base tokenization -> line grouping
//!              -> block assembly
//!
//! See [`parse`](formcode::parsing::parse) for the entry point and
//! [`normalize`](formcode::lexing::normalization::normalize) for the
//! separately testable indentation pre-pass.

pub mod formcode;

pub use crate::formcode::ast::error::{SyntaxError, SyntaxErrorKind};
pub use crate::formcode::ast::{
    Block, Choice, Document, Field, FieldKind, FieldType, Fieldset,
};
pub use crate::formcode::lexing::normalization::normalize;
pub use crate::formcode::parsing::parse;
