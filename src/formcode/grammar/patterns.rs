//! Declarative line classification
//!
//!     Instead of imperative lookahead, each line's token sequence is
//!     rendered to a one-character-per-token notation string and matched
//!     against regex patterns in declaration order. The grammar is data,
//!     not code: changing what counts as an option line means editing a
//!     pattern, not a state machine.
//!
//! Notation
//!
//!     T  free text           N  number          x  the literal text "x"
//!     s  single space        w  wider gap       =  equals
//!     *  star                #  hash            ( ) [ ]  marker brackets
//!     t  ___   a  ...   p  ***   e  @@@   D  YYYY.MM.DD   H  HH:MM

use once_cell::sync::Lazy;
use regex::Regex;

use crate::formcode::token::{LineType, SpannedToken, Token};

/// Classification patterns, tried in order; the first match wins.
pub static LINE_PATTERNS: &[(&str, &str)] = &[
    // a heading starts with a hash
    ("heading", r"^#"),
    // an option starts with an empty or checked marker
    ("option", r"^[(\[][sx][)\]]"),
    // a field has an equals sign somewhere after its label
    ("field", r"^[^=]*="),
];

static COMPILED_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    LINE_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).expect("valid line pattern")))
        .collect()
});

/// Render a token sequence as a grammar notation string.
pub fn to_grammar_string(tokens: &[SpannedToken]) -> String {
    tokens
        .iter()
        .map(|(token, _)| match token {
            Token::Text(text) if text == "x" => 'x',
            Token::Text(_) => 'T',
            Token::Number(_) => 'N',
            Token::Whitespace(1) => 's',
            Token::Whitespace(_) | Token::Indentation => 'w',
            Token::Equals => '=',
            Token::Star => '*',
            Token::Hash => '#',
            Token::OpenParen => '(',
            Token::CloseParen => ')',
            Token::OpenBracket => '[',
            Token::CloseBracket => ']',
            Token::TextMark => 't',
            Token::TextareaMark => 'a',
            Token::PasswordMark => 'p',
            Token::EmailMark => 'e',
            Token::DateMark => 'D',
            Token::TimeMark => 'H',
            Token::Newline => 'n',
        })
        .collect()
}

/// Classify one line's content tokens.
pub fn classify_line(tokens: &[SpannedToken]) -> LineType {
    let notation = to_grammar_string(tokens);
    for (name, regex) in COMPILED_PATTERNS.iter() {
        if regex.is_match(&notation) {
            return match *name {
                "heading" => LineType::HeadingLine,
                "option" => LineType::OptionLine,
                _ => LineType::FieldLine,
            };
        }
    }
    LineType::UnrecognizedLine
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formcode::lexing::base_tokenization::tokenize;

    fn classify(source: &str) -> LineType {
        classify_line(&tokenize(source))
    }

    #[test]
    fn test_headings() {
        assert_eq!(classify("# Name"), LineType::HeadingLine);
        assert_eq!(classify("# ..."), LineType::HeadingLine);
    }

    #[test]
    fn test_options() {
        assert_eq!(classify("( ) Male"), LineType::OptionLine);
        assert_eq!(classify("(x) Female"), LineType::OptionLine);
        assert_eq!(classify("[ ] English"), LineType::OptionLine);
        assert_eq!(classify("[x] German"), LineType::OptionLine);
    }

    #[test]
    fn test_fields() {
        assert_eq!(classify("First name* = ___"), LineType::FieldLine);
        assert_eq!(classify("Delivery * ="), LineType::FieldLine);
        // an option line containing '=' is still an option line
        assert_eq!(classify("( ) a = b"), LineType::OptionLine);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("just text"), LineType::UnrecognizedLine);
        // a malformed marker is not an option
        assert_eq!(classify("(  ) a"), LineType::UnrecognizedLine);
    }
}
