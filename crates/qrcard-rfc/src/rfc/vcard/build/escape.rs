//! vCard text escaping.

use std::borrow::Cow;

/// Escapes a text value or structured component.
///
/// Backslash, comma and semicolon get a leading backslash, a newline becomes
/// `\n` and carriage returns are dropped. Values without any of those are
/// returned borrowed.
#[must_use]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(['\\', ',', ';', '\n', '\r']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\r' => {}
            '\n' => out.push_str("\\n"),
            '\\' | ',' | ';' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Renders a TYPE label as a parameter value.
///
/// Caret-encodes `^`, `"` and newlines (RFC 6868), drops other control
/// characters, and wraps the result in double quotes when the label holds a
/// `:`, `;`, `,` or `"`.
#[must_use]
pub fn escape_param_value(label: &str) -> Cow<'_, str> {
    let plain = |c: char| !matches!(c, '^' | '"' | ':' | ';' | ',') && !c.is_control();
    if label.chars().all(plain) {
        return Cow::Borrowed(label);
    }

    let quoted = label.contains(['"', ':', ';', ',']);
    let mut out = String::with_capacity(label.len() + 4);
    if quoted {
        out.push('"');
    }
    for c in label.chars() {
        match c {
            '^' => out.push_str("^^"),
            '"' => out.push_str("^'"),
            '\n' => out.push_str("^n"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    if quoted {
        out.push('"');
    }
    Cow::Owned(out)
}
