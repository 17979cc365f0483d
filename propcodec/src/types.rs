//! Core types for propcodec.
//! The decoder produces these; the encoder serializes these.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser};

impl Parser for Vec<MessageEntry> {
    /// Parse a JSON array of entries from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write the entries as a pretty JSON array.
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Parse)
    }
}

/// A single translatable message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct MessageEntry {
    /// Disambiguation string. When present and non-empty it is the
    /// properties key; otherwise `singular` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub context: Option<String>,

    /// Source message text, in decoded form.
    #[serde(default)]
    pub singular: String,

    /// Translated strings. Only the first one is ever written.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub translations: Vec<String>,

    /// Comment block for translators, may be empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub extracted_comments: String,
}

impl MessageEntry {
    pub fn new(singular: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            ..Self::default()
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translations.push(translation.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.extracted_comments = comment.into();
        self
    }

    /// The context, or an empty string when there is none.
    pub fn context_str(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }

    /// The properties key this entry is written under.
    pub fn key(&self) -> &str {
        match self.context.as_deref() {
            Some(context) if !context.is_empty() => context,
            _ => &self.singular,
        }
    }

    pub fn has_comment(&self) -> bool {
        !self.extracted_comments.trim().is_empty()
    }
}

impl Display for MessageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MessageEntry {{ key: {}, singular: {}, translation: {} }}",
            self.key(),
            self.singular,
            self.translations.first().map(String::as_str).unwrap_or("-")
        )
    }
}

/// An insertion-ordered collection of entries.
///
/// Duplicates are allowed; nothing here enforces key uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Translations {
    pub entries: Vec<MessageEntry>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, entry: MessageEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageEntry> {
        self.entries.iter()
    }

    /// First entry whose context equals `context` exactly.
    pub fn find_by_context(&self, context: &str) -> Option<&MessageEntry> {
        self.entries.iter().find(|e| e.context_str() == context)
    }
}

impl From<Vec<MessageEntry>> for Translations {
    fn from(entries: Vec<MessageEntry>) -> Self {
        Self { entries }
    }
}

impl From<Translations> for Vec<MessageEntry> {
    fn from(value: Translations) -> Self {
        value.entries
    }
}

impl FromIterator<MessageEntry> for Translations {
    fn from_iter<I: IntoIterator<Item = MessageEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Translations {
    type Item = MessageEntry;
    type IntoIter = std::vec::IntoIter<MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Translations {
    type Item = &'a MessageEntry;
    type IntoIter = std::slice::Iter<'a, MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
