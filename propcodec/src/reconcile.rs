//! Matching decoded translations back to their original messages.
//!
//! A translation file is decoded with the same reader as an originals file,
//! so every entry first has its key in `context` and the translated text in
//! `singular`. Reconciliation moves the text into `translations` and restores
//! the canonical original from a catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::types::{MessageEntry, Translations};

/// Source of the original messages of a project.
pub trait OriginalCatalog {
    /// All original entries of the given project.
    fn by_project_id(&self, project_id: u64) -> Vec<MessageEntry>;
}

impl OriginalCatalog for HashMap<u64, Vec<MessageEntry>> {
    fn by_project_id(&self, project_id: u64) -> Vec<MessageEntry> {
        self.get(&project_id).cloned().unwrap_or_default()
    }
}

/// A catalog held in memory, one entry list per project.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    projects: HashMap<u64, Vec<MessageEntry>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the originals of a project, replacing any previous set.
    pub fn with_project(mut self, project_id: u64, originals: impl Into<Vec<MessageEntry>>) -> Self {
        self.projects.insert(project_id, originals.into());
        self
    }
}

impl OriginalCatalog for MemoryCatalog {
    fn by_project_id(&self, project_id: u64) -> Vec<MessageEntry> {
        self.projects.by_project_id(project_id)
    }
}

/// A decoded translation whose context has no original in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingOriginal {
    pub context: String,
    pub project_id: u64,
}

impl std::fmt::Display for MissingOriginal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Missing context {} in project #{}",
            self.context, self.project_id
        )
    }
}

/// Outcome of [`reconcile`]: the matched translations and what was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciled {
    pub translations: Translations,
    pub missing: Vec<MissingOriginal>,
}

impl Reconciled {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Turns decoded entries into translations of the given originals.
///
/// Each entry's `singular` becomes its only translation, unless it equals the
/// context (an untranslated export echoes the key), in which case the entry
/// carries no translation. The entry then takes `singular` and `context` from
/// the first original with the same context. Entries without such an original
/// are dropped and reported in [`Reconciled::missing`].
///
/// # Example
/// ```rust
/// use propcodec::{MessageEntry, reconcile::reconcile};
/// let decoded = vec![MessageEntry::new("Bonjour").with_context("greeting")];
/// let originals = vec![MessageEntry::new("Hello").with_context("greeting")];
/// let reconciled = reconcile(decoded, &originals, 1);
/// let entry = &reconciled.translations.entries[0];
/// assert_eq!(entry.singular, "Hello");
/// assert_eq!(entry.translations, vec!["Bonjour".to_string()]);
/// ```
pub fn reconcile(
    decoded: impl IntoIterator<Item = MessageEntry>,
    originals: &[MessageEntry],
    project_id: u64,
) -> Reconciled {
    let mut by_context: HashMap<&str, &MessageEntry> = HashMap::with_capacity(originals.len());
    for original in originals {
        by_context.entry(original.context_str()).or_insert(original);
    }

    let mut reconciled = Reconciled::default();
    for mut entry in decoded {
        let translated = std::mem::take(&mut entry.singular);
        entry.translations = if entry.context_str() == translated {
            Vec::new()
        } else {
            vec![translated]
        };

        match by_context.get(entry.context_str()) {
            Some(original) => {
                entry.singular = original.singular.clone();
                entry.context = original.context.clone();
                reconciled.translations.add_entry(entry);
            }
            None => {
                let missing = MissingOriginal {
                    context: entry.context_str().to_string(),
                    project_id,
                };
                warn!("{}", missing);
                reconciled.missing.push(missing);
            }
        }
    }

    debug!(
        project_id,
        matched = reconciled.translations.len(),
        missing = reconciled.missing.len(),
        "reconciled translations"
    );
    reconciled
}

/// Fetches the project's originals from `catalog` and reconciles against them.
pub fn reconcile_with_catalog<C: OriginalCatalog + ?Sized>(
    decoded: impl IntoIterator<Item = MessageEntry>,
    catalog: &C,
    project_id: u64,
) -> Reconciled {
    let originals = catalog.by_project_id(project_id);
    reconcile(decoded, &originals, project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(context: &str, text: &str) -> MessageEntry {
        MessageEntry::new(text).with_context(context)
    }

    #[test]
    fn test_reconcile_swaps_translation_and_restores_original() {
        let originals = vec![
            MessageEntry::new("Hello")
                .with_context("greeting")
                .with_comment("Home page"),
        ];
        let result = reconcile(
            vec![decoded("greeting", "Bonjour").with_comment("from file")],
            &originals,
            7,
        );

        assert!(result.is_complete());
        assert_eq!(result.translations.len(), 1);
        let entry = &result.translations.entries[0];
        assert_eq!(entry.singular, "Hello");
        assert_eq!(entry.context.as_deref(), Some("greeting"));
        assert_eq!(entry.translations, vec!["Bonjour".to_string()]);
        // The comment read from the file stays with the entry.
        assert_eq!(entry.extracted_comments, "from file");
    }

    #[test]
    fn test_reconcile_value_equal_to_context_means_untranslated() {
        let originals = vec![MessageEntry::new("Hello").with_context("greeting")];
        let result = reconcile(vec![decoded("greeting", "greeting")], &originals, 1);
        let entry = &result.translations.entries[0];
        assert!(entry.translations.is_empty());
        assert_eq!(entry.singular, "Hello");
    }

    #[test]
    fn test_reconcile_drops_and_reports_missing() {
        let originals = vec![MessageEntry::new("Hello").with_context("greeting")];
        let result = reconcile(
            vec![decoded("unknown", "Inconnu"), decoded("greeting", "Salut")],
            &originals,
            42,
        );

        assert_eq!(result.translations.len(), 1);
        assert_eq!(result.translations.entries[0].translations, vec!["Salut"]);
        assert_eq!(
            result.missing,
            vec![MissingOriginal {
                context: "unknown".to_string(),
                project_id: 42,
            }]
        );
        assert_eq!(
            result.missing[0].to_string(),
            "Missing context unknown in project #42"
        );
    }

    #[test]
    fn test_reconcile_first_original_wins() {
        let originals = vec![
            MessageEntry::new("First").with_context("dup"),
            MessageEntry::new("Second").with_context("dup"),
        ];
        let result = reconcile(vec![decoded("dup", "x")], &originals, 1);
        assert_eq!(result.translations.entries[0].singular, "First");
    }

    #[test]
    fn test_reconcile_keeps_decoded_order() {
        let originals = vec![
            MessageEntry::new("A").with_context("a"),
            MessageEntry::new("B").with_context("b"),
        ];
        let result = reconcile(vec![decoded("b", "bb"), decoded("a", "aa")], &originals, 1);
        let singulars: Vec<&str> = result
            .translations
            .iter()
            .map(|e| e.singular.as_str())
            .collect();
        assert_eq!(singulars, vec!["B", "A"]);
    }

    #[test]
    fn test_reconcile_with_memory_catalog() {
        let catalog = MemoryCatalog::new()
            .with_project(1, vec![MessageEntry::new("Hello").with_context("greeting")])
            .with_project(2, vec![MessageEntry::new("Bye").with_context("farewell")]);

        let result = reconcile_with_catalog(vec![decoded("greeting", "Hola")], &catalog, 1);
        assert_eq!(result.translations.len(), 1);

        let result = reconcile_with_catalog(vec![decoded("greeting", "Hola")], &catalog, 2);
        assert!(result.translations.is_empty());
        assert_eq!(result.missing.len(), 1);
    }

    #[test]
    fn test_hash_map_catalog_unknown_project_is_empty() {
        let catalog: HashMap<u64, Vec<MessageEntry>> = HashMap::new();
        assert!(catalog.by_project_id(99).is_empty());
    }
}
