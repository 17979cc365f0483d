//! Support for the Java `.properties` format.
//!
//! Writing sorts entries by key and emits one `key = value` block per entry,
//! preceded by `# ` comment lines and followed by a blank line. Output is pure
//! ASCII, so a file written here reads back the same as Latin-1. Reading is a
//! line-driven state machine that understands comment blocks, `=`/`:`
//! separators and values continued over several lines with a trailing
//! backslash.

use std::{cmp::Ordering, io::BufRead, mem};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    error::Error,
    escape::{
        escape_key, escape_newlines, unescape_key, unicode_escape, unicode_unescape,
    },
    read_options::SourceEncoding,
    traits::Parser,
    types::{MessageEntry, Translations},
};

/// Comment written for entries without one. Never read back as a comment.
pub const PLACEHOLDER_COMMENT: &str = "No comment provided.";

lazy_static! {
    static ref COMMENT_LINE_REGEX: Regex = Regex::new(r"^[#!]\s*(.*)$").unwrap();
}

/// Serializes entries into `.properties` text.
///
/// Entries are written in key order (byte order, stable for equal keys). The
/// value is the first translation, or the context for untranslated entries.
///
/// # Example
/// ```rust
/// use propcodec::{MessageEntry, formats::encode};
/// let entries = vec![
///     MessageEntry::new("Summer").with_context("season").with_translation("été"),
/// ];
/// assert_eq!(
///     encode(&entries),
///     "# No comment provided.\nseason = \\u00e9t\\u00e9\n\n"
/// );
/// ```
pub fn encode(entries: &[MessageEntry]) -> String {
    let mut sorted: Vec<&MessageEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| compare_entries(a, b));

    let mut result = String::new();
    for entry in sorted {
        write_entry(&mut result, entry);
    }

    debug!(entries = entries.len(), bytes = result.len(), "encoded properties");
    result
}

/// Orders entries by their resolved key.
pub fn compare_entries(a: &MessageEntry, b: &MessageEntry) -> Ordering {
    a.key().cmp(b.key())
}

fn write_entry(out: &mut String, entry: &MessageEntry) {
    let key = unicode_escape(&escape_key(&escape_newlines(entry.key())));

    let value = entry
        .translations
        .first()
        .map(String::as_str)
        .unwrap_or_else(|| entry.context_str());
    let value = unicode_escape(&escape_newlines(value));

    let comment = entry.extracted_comments.trim();
    let comment = if comment.is_empty() {
        PLACEHOLDER_COMMENT
    } else {
        comment
    };

    for line in comment.split('\n') {
        out.push_str("# ");
        out.push_str(&unicode_escape(line));
        out.push('\n');
    }

    out.push_str(&key);
    out.push_str(" = ");
    out.push_str(&value);
    out.push_str("\n\n");
}

/// Parses `.properties` text into entries, keys becoming contexts.
///
/// Never fails: lines that are neither comments nor `key = value` pairs are
/// skipped, and break the link between a preceding comment and the next key.
///
/// # Example
/// ```rust
/// use propcodec::formats::decode;
/// let entries = decode("# Greeting\nhello = \\u00e9t\\u00e9\n\n");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries.entries[0].context.as_deref(), Some("hello"));
/// assert_eq!(entries.entries[0].singular, "été");
/// assert_eq!(entries.entries[0].extracted_comments, "Greeting");
/// ```
pub fn decode(text: &str) -> Translations {
    let mut decoder = Decoder::default();
    for line in text.split('\n') {
        decoder.feed(line);
    }
    let entries = decoder.finish();

    debug!(entries = entries.len(), "decoded properties");
    entries
}

/// Syntactic shape of one input line, independent of decoder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// `#` or `!` comment; holds the text after the marker and its spacing.
    Comment(&'a str),
    /// A `key = value` line.
    KeyValue(KeyValueLine<'a>),
    /// Whitespace only.
    Blank,
    /// Anything else.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyValueLine<'a> {
    /// Raw key text, still escaped.
    pub key: &'a str,
    /// Raw value text, with a continuation backslash already removed.
    pub value: &'a str,
    /// Whether the value carries on to the following lines.
    pub continues: bool,
}

pub(crate) fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(caps) = COMMENT_LINE_REGEX.captures(line) {
        return LineKind::Comment(caps.get(1).map_or("", |m| m.as_str()));
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    match split_key_value(line) {
        Some(pair) => LineKind::KeyValue(pair),
        None => LineKind::Other,
    }
}

/// Splits on the first unescaped `=` or `:`. One whitespace character right
/// after the separator belongs to it; the key is trimmed later.
fn split_key_value(line: &str) -> Option<KeyValueLine<'_>> {
    let separator = find_unescaped_separator(line)?;
    let key = &line[..separator];
    if key.trim().is_empty() {
        return None;
    }
    let mut value = &line[separator + 1..];

    if let Some(space) = value.chars().next().filter(|c| c.is_whitespace()) {
        value = &value[space.len_utf8()..];
    }

    let continues = ends_with_unescaped_backslash(line);
    if continues {
        value = value.strip_suffix('\\').unwrap_or(value);
    }

    Some(KeyValueLine {
        key,
        value,
        continues,
    })
}

fn find_unescaped_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => return Some(index),
            _ => {}
        }
    }
    None
}

/// An odd number of trailing backslashes means the last one is unescaped.
fn ends_with_unescaped_backslash(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Where the decoder is between two lines.
#[derive(Debug, Default, PartialEq, Eq)]
enum DecoderState {
    #[default]
    Idle,
    /// Comment lines seen since the last key or blank line.
    Comment(String),
    /// An entry whose value continues on the next line.
    Continuation(MessageEntry),
}

#[derive(Debug, Default)]
struct Decoder {
    state: DecoderState,
    entries: Translations,
}

impl Decoder {
    fn feed(&mut self, line: &str) {
        let state = mem::take(&mut self.state);
        self.state = match (state, classify_line(line)) {
            (state, LineKind::Comment(text)) => {
                let pending = match state {
                    DecoderState::Continuation(entry) => {
                        self.entries.add_entry(entry);
                        None
                    }
                    DecoderState::Comment(pending) => Some(pending),
                    DecoderState::Idle => None,
                };
                Self::accumulate_comment(pending, text)
            }
            (DecoderState::Continuation(entry), LineKind::Blank) => {
                self.entries.add_entry(entry);
                DecoderState::Idle
            }
            (DecoderState::Continuation(mut entry), _) => {
                entry.singular.push_str(&continuation_fragment(line));
                DecoderState::Continuation(entry)
            }
            (state, LineKind::KeyValue(pair)) => {
                let comment = match state {
                    DecoderState::Comment(pending) => pending,
                    _ => String::new(),
                };
                self.start_entry(pair, comment)
            }
            (_, LineKind::Blank) => DecoderState::Idle,
            (_, LineKind::Other) => {
                trace!(line, "skipping unrecognized properties line");
                DecoderState::Idle
            }
        };
    }

    fn accumulate_comment(pending: Option<String>, text: &str) -> DecoderState {
        if text.trim() == PLACEHOLDER_COMMENT {
            return DecoderState::Idle;
        }
        let text = unicode_unescape(text);
        match pending {
            Some(mut comment) => {
                comment.push('\n');
                comment.push_str(&text);
                DecoderState::Comment(comment)
            }
            None => DecoderState::Comment(text),
        }
    }

    fn start_entry(&mut self, pair: KeyValueLine<'_>, comment: String) -> DecoderState {
        let key = unescape_key(&unicode_unescape(pair.key));
        let key = key.trim_end();
        // `\ = value` survives the split but resolves to nothing.
        if key.is_empty() {
            trace!(raw_key = pair.key, "skipping entry with empty key");
            return DecoderState::Idle;
        }

        let entry = MessageEntry {
            context: Some(key.to_string()),
            singular: unicode_unescape(pair.value),
            translations: Vec::new(),
            extracted_comments: comment,
        };

        if pair.continues {
            DecoderState::Continuation(entry)
        } else {
            self.entries.add_entry(entry);
            DecoderState::Idle
        }
    }

    fn finish(mut self) -> Translations {
        if let DecoderState::Continuation(entry) = mem::take(&mut self.state) {
            self.entries.add_entry(entry);
        }
        self.entries
    }
}

/// Body of a continuation line: continuation backslash and leading
/// whitespace removed, escapes decoded.
fn continuation_fragment(line: &str) -> String {
    let body = if ends_with_unescaped_backslash(line) {
        &line[..line.len() - 1]
    } else {
        line
    };
    unicode_unescape(body.trim_start())
}

impl Parser for Translations {
    /// Reads the whole input as Latin-1 and decodes it.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = SourceEncoding::Latin1.decode(&bytes)?;
        Ok(decode(&text))
    }

    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        writer
            .write_all(encode(&self.entries).as_bytes())
            .map_err(Error::Io)
    }
}
