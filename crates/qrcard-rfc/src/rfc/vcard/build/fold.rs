//! vCard line folding.

use qrcard_core::types::LineEnding;

/// Maximum line length in octets (not characters).
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line to the maximum length.
///
/// Lines longer than 75 octets are folded by inserting the line ending
/// followed by a space. Folds at UTF-8 character boundaries. A raw `\n` left
/// in an unescaped value starts a new physical line, so the count restarts.
#[must_use]
pub fn fold_line(line: &str, line_ending: LineEnding) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let separator = line_ending.as_str();
    let mut result =
        String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * (separator.len() + 1));
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len + char_len > MAX_LINE_OCTETS {
            result.push_str(separator);
            result.push(' ');
            current_len = 1; // The space
        }

        result.push(c);
        if c == '\n' {
            current_len = 0;
        } else {
            current_len += char_len;
        }
    }

    result
}
