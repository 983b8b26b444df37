//! The formcode syntax tree
//!
//!     A parsed document is an ordered sequence of blocks; a block is
//!     either a fieldset heading or a field; choice fields own their
//!     options, and options own the blocks that only apply when they are
//!     selected. The recursion between blocks and options is closed through
//!     these explicit types — there is no dynamic attribute access anywhere.
//!
//!     The tree is an immutable value with structural equality. It carries
//!     no source locations: parsing the same text twice yields an equal
//!     tree, and the source text itself is the canonical representation
//!     (consumers re-parse rather than persist trees).

pub mod error;

use serde::{Deserialize, Serialize};

/// A parsed form definition: the ordered top-level blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// A top-level or nested grammar unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Fieldset(Fieldset),
    Field(Field),
}

/// A bare heading with no associated input.
///
/// `# ...` closes the current fieldset without opening a named one; its
/// label is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fieldset {
    pub label: Option<String>,
}

/// A labeled, typed input unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

/// The type of a field plus its type-specific attributes.
///
/// Absent numeric hints stay `None`; they are never defaulted to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text { length: Option<u64> },
    Textarea { rows: Option<u64> },
    Password,
    Email,
    Stdnum { format: String },
    Date,
    Datetime,
    Time,
    Radio { parts: Vec<Choice> },
    Checkbox { parts: Vec<Choice> },
}

/// One selectable entry in a choice group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub checked: bool,
    /// Blocks that only appear when this option is selected.
    pub dependencies: Vec<Block>,
}

/// Field-type tag, covering every block the grammar can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    Textarea,
    Password,
    Email,
    Stdnum,
    Date,
    Datetime,
    Time,
    Radio,
    Checkbox,
    Fieldset,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Password => "password",
            FieldType::Email => "email",
            FieldType::Stdnum => "stdnum",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::Time => "time",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Fieldset => "fieldset",
        }
    }
}

impl Block {
    pub fn field_type(&self) -> FieldType {
        match self {
            Block::Fieldset(_) => FieldType::Fieldset,
            Block::Field(field) => field.field_type(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Block::Fieldset(fieldset) => fieldset.label.as_deref(),
            Block::Field(field) => Some(&field.label),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Block::Field(field) => Some(field),
            Block::Fieldset(_) => None,
        }
    }
}

impl Field {
    pub fn field_type(&self) -> FieldType {
        match &self.kind {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Textarea { .. } => FieldType::Textarea,
            FieldKind::Password => FieldType::Password,
            FieldKind::Email => FieldType::Email,
            FieldKind::Stdnum { .. } => FieldType::Stdnum,
            FieldKind::Date => FieldType::Date,
            FieldKind::Datetime => FieldType::Datetime,
            FieldKind::Time => FieldType::Time,
            FieldKind::Radio { .. } => FieldType::Radio,
            FieldKind::Checkbox { .. } => FieldType::Checkbox,
        }
    }

    /// The options of a choice field; empty for atomic fields.
    pub fn parts(&self) -> &[Choice] {
        match &self.kind {
            FieldKind::Radio { parts } | FieldKind::Checkbox { parts } => parts,
            _ => &[],
        }
    }
}

impl Document {
    /// Iterate over every field in source order, descending into choice
    /// dependencies depth-first.
    pub fn iter_fields(&self) -> Fields<'_> {
        Fields {
            stack: self.blocks.iter().rev().collect(),
        }
    }

    /// Find the first field with the given label, searching depth-first.
    pub fn find_field(&self, label: &str) -> Option<&Field> {
        self.iter_fields().find(|field| field.label == label)
    }

    /// Iterate over the top-level fieldset headings.
    pub fn fieldsets(&self) -> impl Iterator<Item = &Fieldset> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Fieldset(fieldset) => Some(fieldset),
            Block::Field(_) => None,
        })
    }
}

/// Depth-first field iterator, see [Document::iter_fields].
pub struct Fields<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a Field;

    fn next(&mut self) -> Option<&'a Field> {
        while let Some(block) = self.stack.pop() {
            match block {
                Block::Fieldset(_) => continue,
                Block::Field(field) => {
                    for choice in field.parts().iter().rev() {
                        self.stack.extend(choice.dependencies.iter().rev());
                    }
                    return Some(field);
                }
            }
        }
        None
    }
}
