//! Grammar rules for the formcode format
//!
//!     The grammar is split the way the format is layered:
//!
//!         - [patterns]: declarative line classification. Each line's token
//!           sequence is rendered to a compact notation string and matched
//!           against an ordered regex table; the first hit names the grammar
//!           that may start on that line.
//!         - [text]: bounded label runs over token slices, parameterized by
//!           an explicit terminator set. The same primitive serves labels
//!           before `=`, option labels, and heading text with different
//!           terminators.
//!         - [identifier]: the `<label>[*]=` field-identifier grammar.
//!         - [atoms]: the table of atomic field-type sentinels.
//!         - [choices]: option markers and labels for radio/checkbox groups.
//!
//!     Everything here operates on one line's tokens; nesting across lines
//!     is the assembler's concern (see the parsing module).

pub mod atoms;
pub mod choices;
pub mod identifier;
pub mod patterns;
pub mod text;

pub use atoms::atomic_field;
pub use choices::{option_sequence, MarkerStyle, ParsedOption};
pub use identifier::{field_identifier, FieldIdentifier};
