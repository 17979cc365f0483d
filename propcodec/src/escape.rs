//! Escaping helpers for the `.properties` text form.
//!
//! Keys, values and comments travel as ASCII with `\uXXXX` escapes for
//! everything above 127. Keys also backslash-escape the separator characters
//! and are unescaped C-style when read back.

use std::fmt::Write;

/// Escapes every code point above 127 as `\u` plus four lowercase hex digits.
///
/// Code points outside the Basic Multilingual Plane are written as a UTF-16
/// surrogate pair, i.e. two consecutive escapes.
///
/// # Example
/// ```rust
/// use propcodec::escape::unicode_escape;
/// assert_eq!(unicode_escape("été"), r"\u00e9t\u00e9");
/// assert_eq!(unicode_escape("plain"), "plain");
/// ```
pub fn unicode_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for ch in text.chars() {
        if u32::from(ch) > 127 {
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{:04x}", unit);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Replaces each `\uXXXX` escape (hex digits in either case) with the
/// character it names.
///
/// A high surrogate escape immediately followed by a low surrogate escape is
/// combined into one character. Lone surrogates, short or non-hex escapes and
/// stray backslashes are kept as they are.
///
/// # Example
/// ```rust
/// use propcodec::escape::unicode_unescape;
/// assert_eq!(unicode_unescape(r"\u00e9t\u00E9"), "été");
/// assert_eq!(unicode_unescape(r"C:\users"), r"C:\users");
/// ```
pub fn unicode_unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let escape = &rest[pos..];

        let Some(unit) = parse_unicode_escape(escape) else {
            out.push_str("\\u");
            rest = &escape[2..];
            continue;
        };

        if is_high_surrogate(unit) {
            if let Some(low) = parse_unicode_escape(&escape[6..]).filter(|u| is_low_surrogate(*u)) {
                let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                if let Some(ch) = char::from_u32(combined) {
                    out.push(ch);
                    rest = &escape[12..];
                    continue;
                }
            }
        }

        match char::from_u32(unit) {
            Some(ch) => out.push(ch),
            None => out.push_str(&escape[..6]),
        }
        rest = &escape[6..];
    }

    out.push_str(rest);
    out
}

/// Parses a leading `\uXXXX` into its 16-bit value.
fn parse_unicode_escape(s: &str) -> Option<u32> {
    let hex = s.strip_prefix("\\u")?.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Decodes ISO-8859-1 bytes: each byte becomes the code point of equal value.
///
/// `encoding_rs` resolves the `latin1` label to windows-1252, which remaps
/// 0x80..=0x9F, so the mapping is done here.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Replaces literal newlines with the two characters `\n`.
pub fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}

/// Backslash-escapes `=`, `:` and space so the text can be used as a key.
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        if matches!(ch, '=' | ':' | ' ') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// C-style unescaping of a key.
///
/// Recognizes `\n`, `\t`, `\r`, `\a`, `\b`, `\f`, `\v`, octal `\NNN` and hex
/// `\xHH`; any other escaped character stands for itself (`\=`, `\ `, `\\`,
/// `\"` ...). Octal and hex escapes name Latin-1 code points. A trailing lone
/// backslash is kept.
pub fn unescape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let Some(next) = chars.next() else {
            out.push('\\');
            break;
        };

        match next {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0C}'),
            'v' => out.push('\u{0B}'),
            'x' if chars.peek().is_some_and(char::is_ascii_hexdigit) => {
                let mut value = 0u32;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(16)) {
                        Some(digit) => {
                            value = value * 16 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(latin1_char(value));
            }
            '0'..='7' => {
                let mut value = next.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                out.push(latin1_char(value));
            }
            other => out.push(other),
        }
    }

    out
}

/// Octal escapes can exceed a byte (`\777`); wrap like a C `char` does.
fn latin1_char(value: u32) -> char {
    char::from((value & 0xFF) as u8)
}
