//! Word-boundary lookup for word selection.
//!
//! Thin wrapper over `unicode-segmentation`, used by surfaces that have no
//! native word selection (the provided default of
//! [`TextSurface::select_word_at`](crate::surface::TextSurface::select_word_at)).

use unicode_segmentation::UnicodeSegmentation;

/// Find the word-bound segment of `line` containing the given character
/// column.
///
/// Returns the segment's `(start, end)` character columns. A column at or
/// past the end of the line resolves to the last segment; an empty line
/// yields `(0, 0)`. Whitespace runs are segments too, so a column inside
/// one selects the run.
#[must_use]
pub fn word_range(line: &str, column: usize) -> (usize, usize) {
    let mut start = 0;
    let mut end = 0;
    for (_, segment) in line.split_word_bound_indices() {
        let len = segment.chars().count();
        start = end;
        end += len;
        if column < end {
            break;
        }
    }
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_column() {
        assert_eq!(word_range("fn main() {", 3), (3, 7));
        assert_eq!(word_range("fn main() {", 0), (0, 2));
    }

    #[test]
    fn test_whitespace_run() {
        assert_eq!(word_range("a  b", 1), (1, 3));
    }

    #[test]
    fn test_column_past_end() {
        assert_eq!(word_range("abc", 10), (0, 3));
        assert_eq!(word_range("ab cd", 99), (3, 5));
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(word_range("", 0), (0, 0));
    }

    #[test]
    fn test_non_ascii() {
        // "héllo wörld": word bounds respect non-ASCII letters
        assert_eq!(word_range("héllo wörld", 8), (6, 11));
    }
}
