//! Indentation normalizer
//!
//!     Form authors indent by eye: under an option written as
//!     `Payment = (x) Bill`, the follow-up field is usually aligned with the
//!     option label, at some column that is a multiple of nothing. The
//!     structural grammar, on the other hand, wants strict level
//!     comparisons. This pre-pass rewrites every line's leading whitespace
//!     so each distinct nesting level encountered while scanning
//!     top-to-bottom gets one canonical 4-space unit per level.
//!
//! Algorithm
//!
//!     A stack of raw indent widths represents the open levels. For each
//!     non-blank line:
//!
//!         - widths deeper than the line are popped (the line closes those
//!           levels, however many there are),
//!         - a width equal to the top continues that level (a sibling),
//!         - a width greater than the top opens a new level.
//!
//!     A dedent that matches no enclosing width exactly lands between two
//!     open levels; popping has already closed the deeper ones, so the line
//!     opens a fresh level on what remains. This snapping is what keeps
//!     sibling options together when an author dedents irregularly inside a
//!     nested choice: the second option ends up on the same level as the
//!     first instead of vanishing into its subtree.
//!
//!     The first non-blank line's width is the base; anything shallower
//!     later clamps to level 0. Tabs count as 4 columns. CRLF is rewritten
//!     to LF. Blank lines are emitted as empty lines, so the output has the
//!     same line count as the input and error line numbers survive
//!     normalization.
//!
//!     The transform is total and idempotent: normalized output maps onto
//!     itself.

/// Rewrite irregular leading whitespace into a canonical indentation ladder.
pub fn normalize(text: &str) -> String {
    let mut stack: Vec<usize> = Vec::new();
    let mut out: Vec<String> = Vec::new();

    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let content = line.trim_start_matches([' ', '\t']).trim_end();

        if content.is_empty() {
            out.push(String::new());
            continue;
        }

        let prefix = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
        let width: usize = prefix.chars().map(|c| if c == '\t' { 4 } else { 1 }).sum();

        while stack.len() > 1 && *stack.last().unwrap() > width {
            stack.pop();
        }

        let level = match stack.last() {
            None => {
                stack.push(width);
                0
            }
            Some(&top) if width > top => {
                stack.push(width);
                stack.len() - 1
            }
            // width == top (sibling) or width < base (clamped to level 0)
            Some(_) => stack.len() - 1,
        };

        let mut normalized = "    ".repeat(level);
        normalized.push_str(content);
        out.push(normalized);
    }

    out.join("\n")
}
