//! Turns the raw text of a page into a [`Summary`].

use crate::Summary;

/// Separator between a label and its value.
const SEPARATOR: &str = ": ";

/// Split one line into `(label, value)`.
///
/// The value runs from the first separator up to the next one (or the end of
/// the line), so `"Make: Colt: USA"` yields `("Make", "Colt")`. Lines without
/// a separator return `None`.
pub fn split_field(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split(SEPARATOR);
    let label = tokens.next()?;
    let value = tokens.next()?;
    Some((label, value))
}

/// Parse every `\n`-separated line of `text` and collect the known labels.
///
/// Unknown labels and lines without a separator are ignored. Nothing is
/// trimmed: labels must match exactly and values keep their surrounding
/// whitespace.
pub fn parse_summary(text: &str) -> Summary {
    let mut summary = Summary::default();

    for line in text.split('\n') {
        if let Some((label, value)) = split_field(line) {
            summary.set_field(label, value);
        }
    }

    summary
}
