//! Text Measurement
//!
//! Utilities for measuring text dimensions in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Emoji: 2 cells (most)
//! - Control and zero-width characters: 0 cells
//!
//! Wrapping is greedy and word-based. A word wider than the line is broken
//! between characters.

use unicode_width::UnicodeWidthChar;

/// Display width of one character in cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Width of the widest explicit line (text split on `\n` only).
pub fn widest_line(text: &str) -> u16 {
    text.split('\n').map(string_width).max().unwrap_or(0)
}

/// Width of the widest word. Wrapping can never make text narrower.
pub fn widest_word(text: &str) -> u16 {
    text.split_whitespace().map(string_width).max().unwrap_or(0)
}

/// Word-wrap text to a given width.
///
/// Explicit newlines always start a new line, so empty lines survive. A
/// width of 0 disables wrapping.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if width == 0 {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split_whitespace() {
            let word_width = string_width(word);
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width.saturating_add(1).saturating_add(word_width)
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width = needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
                continue;
            }

            // Hard break
            for c in word.chars() {
                let w = char_width(c);
                if current_width + w > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        }

        lines.push(current);
    }

    lines
}

/// Measure the height of text when wrapped to a given width.
///
/// Returns the number of lines (0 for empty text).
pub fn measure_text_height(text: &str, available_width: u16) -> u16 {
    wrap_text(text, available_width).len().min(u16::MAX as usize) as u16
}

/// Convert a layout extent to whole cells. Negative means unconstrained and
/// maps to `None`.
pub fn cells(extent: f32) -> Option<u16> {
    if extent < 0.0 {
        None
    } else {
        Some(extent.min(f32::from(u16::MAX)) as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_wide_chars() {
        assert_eq!(string_width("中文"), 4);
        assert_eq!(string_width("a中"), 3);
    }

    #[test]
    fn test_widest_line_and_word() {
        let text = "one two\nthree";
        assert_eq!(widest_line(text), 7);
        assert_eq!(widest_word(text), 5);
        assert_eq!(widest_line(""), 0);
        assert_eq!(widest_word(""), 0);
    }

    #[test]
    fn test_wrap_text_breaks_between_words() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap_text("hello world", 11), vec!["hello world"]);
        assert_eq!(wrap_text("a b c d", 3), vec!["a b", "c d"]);
    }

    #[test]
    fn test_wrap_text_hard_breaks_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("ab abcdef", 4), vec!["ab", "abcd", "ef"]);
    }

    #[test]
    fn test_wrap_text_newlines() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_text_zero_width_disables_wrapping() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_measure_text_height() {
        assert_eq!(measure_text_height("hello", 10), 1);
        assert_eq!(measure_text_height("hello world", 5), 2);
        assert_eq!(measure_text_height("a\nb\nc", 10), 3);
        assert_eq!(measure_text_height("", 10), 0);
    }

    #[test]
    fn test_cells() {
        assert_eq!(cells(-1.0), None);
        assert_eq!(cells(0.0), Some(0));
        assert_eq!(cells(7.9), Some(7));
    }
}
