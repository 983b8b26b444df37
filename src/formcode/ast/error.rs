//! Error types for parsing

use std::fmt;

/// The parse failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A field line lacks a terminating `=`, or its label is unusable.
    MalformedIdentifier,
    /// The text after `=` matches neither an atomic sentinel nor a valid
    /// choice-group opening marker.
    UnknownFieldType,
    /// A choice group mixes radio and checkbox bracket styles.
    InconsistentChoiceMarkers,
    /// The recursion guard tripped.
    MaxNestingDepthExceeded,
    /// Indentation that matches no legal structure: a nested block under a
    /// field without a choice group, or an option marker at a depth that
    /// belongs to no open group.
    IndentationAmbiguous,
}

impl SyntaxErrorKind {
    fn message(&self) -> &'static str {
        match self {
            SyntaxErrorKind::MalformedIdentifier => "field has no terminating '='",
            SyntaxErrorKind::UnknownFieldType => {
                "text after '=' is neither a field type nor a choice marker"
            }
            SyntaxErrorKind::InconsistentChoiceMarkers => {
                "choice group mixes radio and checkbox markers"
            }
            SyntaxErrorKind::MaxNestingDepthExceeded => {
                "nesting exceeds the maximum supported depth"
            }
            SyntaxErrorKind::IndentationAmbiguous => {
                "indentation does not match any enclosing block"
            }
        }
    }
}

/// A parse failure, carrying the offending line.
///
/// `line` is 1-based and points into the original text (normalization
/// preserves line numbers); `excerpt` is the offending line's content. The
/// caller is expected to report both to the author of the form text — no
/// failure is retried and there is no partial-result recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub line: usize,
    pub excerpt: String,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: usize, excerpt: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            excerpt: excerpt.into(),
        }
    }

    /// Format source code context around the error location.
    ///
    /// Shows 2 lines before the error, the error line with a >> marker, and
    /// 2 lines after. All lines are numbered for easy reference.
    pub fn source_context(&self, source: &str) -> String {
        let lines: Vec<&str> = source.lines().collect();
        let error_line = self.line.saturating_sub(1);

        let start_line = error_line.saturating_sub(2);
        let end_line = (error_line + 3).min(lines.len());

        let mut context = String::new();
        for line_num in start_line..end_line {
            let marker = if line_num == error_line { ">>" } else { "  " };
            context.push_str(&format!(
                "{} {:3} | {}\n",
                marker,
                line_num + 1,
                lines[line_num]
            ));
        }
        context
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}: {:?}",
            self.line,
            self.kind.message(),
            self.excerpt
        )
    }
}

impl std::error::Error for SyntaxError {}
