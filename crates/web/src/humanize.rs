//! Identifier humanization
//!
//! - `humanize_string("OrderItem")` → `"Order Item"`
//! - `to_param_string("OrderItem")` → `"order_item"`

/// Separate words on capital letters and title-case the result
///
/// A space goes before an uppercase letter that does not already follow a
/// space when the previous character is not uppercase, or when the next
/// character exists and is neither uppercase nor a space. Acronyms therefore
/// stay together: `"HTMLParser"` → `"HTML Parser"`.
pub fn humanize_string(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut human = String::with_capacity(s.len() + 4);
    for (i, c) in s.char_indices() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = bytes[i - 1];
            let next = bytes.get(i + 1).copied();
            let after_word = !prev.is_ascii_uppercase() && prev != b' ';
            let before_word = next.map_or(false, |n| !n.is_ascii_uppercase() && n != b' ');
            if prev != b' ' && (after_word || before_word) {
                human.push(' ');
            }
        }
        human.push(c);
    }
    title_case(&human)
}

/// Uppercase the first letter of every word
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = ' ';
    for c in s.chars() {
        if is_word_separator(prev) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev = c;
    }
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

/// Snake-case an identifier or phrase for use in URLs and parameters
///
/// Spaces become underscores, words split on capitals (acronyms kept
/// together), and everything is lowercased: `"To ParamString"` →
/// `"to_param_string"`, `"HTTPServer"` → `"http_server"`.
pub fn to_param_string(s: &str) -> String {
    let chars: Vec<char> = s.replace(' ', "_").chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && prev != '_' {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
