//! Block & nesting assembler
//!
//!     Recursive descent over classified source lines. The scan at each
//!     level is:
//!
//!         SCAN -> MATCH_IDENTIFIER -> MATCH_ATOMIC | MATCH_CHOICE_GROUP
//!              -> (optional) DESCEND_INTO_DEPENDENCIES -> RETURN
//!
//!     A heading line becomes a fieldset. A field line is split at its
//!     identifier; the remainder is either an atomic sentinel or the start
//!     of a choice group. A group collects option lines at one indentation
//!     level below the field; lines indented deeper than the options are
//!     parsed recursively as full nested documents and attached to the
//!     nearest preceding option as its dependencies.
//!
//!     Levels come pre-canonicalized from the normalizer, so "deeper" and
//!     "sibling" are plain integer comparisons on an explicit level
//!     argument, and a scope ends exactly when a line's level drops to or
//!     below the scope's own.
//!
//!     The descent is guarded by an explicit maximum depth: pathological
//!     nesting fails with `MaxNestingDepthExceeded` instead of overflowing
//!     the call stack.

use crate::formcode::ast::error::{SyntaxError, SyntaxErrorKind};
use crate::formcode::ast::{Block, Choice, Document, Field, FieldKind, Fieldset};
use crate::formcode::grammar::{atomic_field, field_identifier, option_sequence, MarkerStyle};
use crate::formcode::lexing::lex;
use crate::formcode::token::{LineType, SourceLine, SpannedToken, Token};

/// Maximum dependency nesting depth before the parser gives up.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse a formcode document into its syntax tree.
///
/// The input is normalized first, so callers never need to pre-process
/// indentation; `parse(text)` and `parse(&normalize(text))` yield identical
/// trees.
pub fn parse(text: &str) -> Result<Document, SyntaxError> {
    let (normalized, lines) = lex(text);
    let mut assembler = Assembler {
        source: &normalized,
        lines: &lines,
        pos: 0,
        depth: 0,
    };

    let blocks = assembler.parse_blocks(0)?;
    if let Some(line) = assembler.peek() {
        // an option marker with no enclosing field
        return Err(assembler.error_on(line, SyntaxErrorKind::MalformedIdentifier));
    }

    Ok(Document { blocks })
}

struct Assembler<'a> {
    source: &'a str,
    lines: &'a [SourceLine],
    pos: usize,
    depth: usize,
}

impl<'a> Assembler<'a> {
    fn peek(&self) -> Option<&'a SourceLine> {
        self.lines.get(self.pos)
    }

    fn error_on(&self, line: &SourceLine, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(kind, line.number, &self.source[line.span()])
    }

    /// Parse consecutive blocks at exactly `level`, stopping at a dedent or
    /// at an option line (which belongs to the enclosing choice group).
    fn parse_blocks(&mut self, level: usize) -> Result<Vec<Block>, SyntaxError> {
        self.depth += 1;
        let result = match self.peek() {
            Some(line) if self.depth > MAX_NESTING_DEPTH => {
                Err(self.error_on(line, SyntaxErrorKind::MaxNestingDepthExceeded))
            }
            _ => self.parse_blocks_at(level),
        };
        self.depth -= 1;
        result
    }

    fn parse_blocks_at(&mut self, level: usize) -> Result<Vec<Block>, SyntaxError> {
        let mut blocks = Vec::new();

        while let Some(line) = self.peek() {
            if line.level < level {
                break;
            }
            if line.level > level {
                return Err(self.error_on(line, SyntaxErrorKind::IndentationAmbiguous));
            }
            match line.line_type {
                LineType::HeadingLine => {
                    self.pos += 1;
                    blocks.push(Block::Fieldset(fieldset(self.source, &line.tokens)));
                }
                LineType::FieldLine => {
                    blocks.push(Block::Field(self.parse_field(level)?));
                }
                LineType::OptionLine => break,
                LineType::UnrecognizedLine => {
                    return Err(self.error_on(line, SyntaxErrorKind::MalformedIdentifier));
                }
            }
        }

        Ok(blocks)
    }

    fn parse_field(&mut self, level: usize) -> Result<Field, SyntaxError> {
        let line = &self.lines[self.pos];
        self.pos += 1;

        let identifier = field_identifier(self.source, &line.tokens)
            .map_err(|kind| self.error_on(line, kind))?;

        let mut rest: &[SpannedToken] = &line.tokens[identifier.rest..];
        while rest.first().map_or(false, |(t, _)| t.is_whitespace()) {
            rest = &rest[1..];
        }

        // atomic sentinel on the field line
        if let Some(result) = atomic_field(self.source, rest) {
            let kind = result.map_err(|kind| self.error_on(line, kind))?;
            if let Some(next) = self.peek() {
                if next.level > level {
                    // dependencies are only legal under a choice option
                    return Err(self.error_on(next, SyntaxErrorKind::IndentationAmbiguous));
                }
            }
            return Ok(Field {
                label: identifier.label,
                required: identifier.required,
                kind,
            });
        }

        // otherwise this is a choice group: inline options first, then
        // continuation lines
        let mut style: Option<MarkerStyle> = None;
        let mut parts: Vec<Choice> = Vec::new();

        if !rest.is_empty() {
            if !rest[0].0.is_option_open() {
                return Err(self.error_on(line, SyntaxErrorKind::UnknownFieldType));
            }
            let options =
                option_sequence(self.source, rest).map_err(|kind| self.error_on(line, kind))?;
            absorb_options(options, &mut style, &mut parts)
                .map_err(|kind| self.error_on(line, kind))?;
        }

        self.collect_choice_group(line, level, &mut style, &mut parts)?;

        match (style, parts.is_empty()) {
            (Some(MarkerStyle::Radio), false) => Ok(Field {
                label: identifier.label,
                required: identifier.required,
                kind: FieldKind::Radio { parts },
            }),
            (Some(MarkerStyle::Checkbox), false) => Ok(Field {
                label: identifier.label,
                required: identifier.required,
                kind: FieldKind::Checkbox { parts },
            }),
            _ => Err(self.error_on(line, SyntaxErrorKind::UnknownFieldType)),
        }
    }

    /// Collect a field's continuation scope: option lines at one level, and
    /// deeper blocks as dependencies of the nearest preceding option.
    fn collect_choice_group(
        &mut self,
        field_line: &SourceLine,
        field_level: usize,
        style: &mut Option<MarkerStyle>,
        parts: &mut Vec<Choice>,
    ) -> Result<(), SyntaxError> {
        let mut option_level: Option<usize> = None;

        while let Some(line) = self.peek() {
            if line.level <= field_level {
                break;
            }
            match line.line_type {
                LineType::OptionLine => {
                    match option_level {
                        None => option_level = Some(line.level),
                        Some(expected) if line.level != expected => {
                            return Err(
                                self.error_on(line, SyntaxErrorKind::IndentationAmbiguous)
                            );
                        }
                        Some(_) => {}
                    }
                    self.pos += 1;
                    let options = option_sequence(self.source, &line.tokens)
                        .map_err(|kind| self.error_on(line, kind))?;
                    absorb_options(options, style, parts)
                        .map_err(|kind| self.error_on(line, kind))?;
                }
                LineType::HeadingLine | LineType::FieldLine => {
                    if parts.is_empty() {
                        // a nested block before any option: the field has no type
                        return Err(
                            self.error_on(field_line, SyntaxErrorKind::UnknownFieldType)
                        );
                    }
                    if option_level.is_some_and(|expected| line.level <= expected) {
                        // a dependency must sit strictly below its option
                        return Err(
                            self.error_on(line, SyntaxErrorKind::IndentationAmbiguous)
                        );
                    }
                    let dependencies = self.parse_blocks(line.level)?;
                    if let Some(part) = parts.last_mut() {
                        part.dependencies.extend(dependencies);
                    }
                }
                LineType::UnrecognizedLine => {
                    return Err(self.error_on(line, SyntaxErrorKind::MalformedIdentifier));
                }
            }
        }

        Ok(())
    }
}

/// Build a fieldset from a heading line (`#` already classified).
///
/// `# ...` is the anonymous heading: it closes the current fieldset without
/// opening a named one.
fn fieldset(source: &str, tokens: &[SpannedToken]) -> Fieldset {
    let mut rest = &tokens[1..];
    while rest.first().map_or(false, |(t, _)| t.is_whitespace()) {
        rest = &rest[1..];
    }
    while rest.last().map_or(false, |(t, _)| t.is_whitespace()) {
        rest = &rest[..rest.len() - 1];
    }

    let label = match rest {
        [] | [(Token::TextareaMark, _)] => None,
        _ => {
            let (_, first) = &rest[0];
            let (_, last) = &rest[rest.len() - 1];
            Some(source[first.start..last.end].to_owned())
        }
    };

    Fieldset { label }
}

/// Append parsed options to the group, pinning the marker style to the
/// first option seen and rejecting mixing.
fn absorb_options(
    options: Vec<(MarkerStyle, crate::formcode::grammar::ParsedOption)>,
    style: &mut Option<MarkerStyle>,
    parts: &mut Vec<Choice>,
) -> Result<(), SyntaxErrorKind> {
    for (option_style, option) in options {
        match style {
            None => *style = Some(option_style),
            Some(expected) if *expected != option_style => {
                return Err(SyntaxErrorKind::InconsistentChoiceMarkers);
            }
            Some(_) => {}
        }
        parts.push(Choice {
            label: option.label,
            checked: option.checked,
            dependencies: Vec::new(),
        });
    }
    Ok(())
}
