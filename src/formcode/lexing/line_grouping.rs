//! Line Grouping
//!
//! Groups flat tokens into classified SourceLines. Leading indentation
//! tokens become the line's level (the normalizer guarantees one
//! `Indentation` token per level), the newline terminates the line, and
//! blank lines are dropped while still advancing the line counter so that
//! numbers keep pointing into the original text.

use crate::formcode::grammar::patterns::classify_line;
use crate::formcode::token::{SourceLine, SpannedToken, Token};

/// Group a flat token stream into classified source lines.
pub fn group_into_lines(tokens: Vec<SpannedToken>) -> Vec<SourceLine> {
    let mut lines = Vec::new();
    let mut current: Vec<SpannedToken> = Vec::new();
    let mut number = 1;
    let mut level = 0;
    let mut at_line_start = true;

    for (token, span) in tokens {
        match token {
            Token::Newline => {
                if !current.is_empty() {
                    let line_type = classify_line(&current);
                    lines.push(SourceLine {
                        number,
                        level,
                        line_type,
                        tokens: std::mem::take(&mut current),
                    });
                }
                number += 1;
                level = 0;
                at_line_start = true;
            }
            Token::Indentation if at_line_start => level += 1,
            // sub-unit leading whitespace carries no level information
            Token::Whitespace(_) if at_line_start => {}
            other => {
                at_line_start = false;
                current.push((other, span));
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formcode::lexing::base_tokenization::tokenize;
    use crate::formcode::token::LineType;

    fn lines(source: &str) -> Vec<SourceLine> {
        group_into_lines(tokenize(source))
    }

    #[test]
    fn test_levels_and_numbers() {
        let grouped = lines("# Name\n\nFirst = ___\n    ( ) a\n");
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].number, 1);
        assert_eq!(grouped[0].level, 0);
        assert_eq!(grouped[1].number, 3);
        assert_eq!(grouped[2].number, 4);
        assert_eq!(grouped[2].level, 1);
    }

    #[test]
    fn test_classification() {
        let grouped = lines("# Name\nFirst = ___\n(x) a\njust text\n");
        assert_eq!(grouped[0].line_type, LineType::HeadingLine);
        assert_eq!(grouped[1].line_type, LineType::FieldLine);
        assert_eq!(grouped[2].line_type, LineType::OptionLine);
        assert_eq!(grouped[3].line_type, LineType::UnrecognizedLine);
    }

    #[test]
    fn test_content_excludes_indentation() {
        let grouped = lines("    (x) a\n");
        assert_eq!(grouped[0].level, 1);
        assert_eq!(grouped[0].tokens[0].0, Token::OpenParen);
    }
}
