#![forbid(unsafe_code)]
//! Java `.properties` codec for translatable message catalogs.
//!
//! Reads and writes the legacy Latin-1 flavour of `.properties` files, where
//! anything outside ASCII travels as a `\uXXXX` escape, and maps each
//! property to a [`MessageEntry`].
//!
//! # Quick Start
//!
//! ```rust
//! use propcodec::{MessageEntry, decode, encode, reconcile::reconcile};
//!
//! // Export: untranslated entries echo their context as the value.
//! let originals = vec![
//!     MessageEntry::new("Hello").with_context("greeting").with_comment("Home page"),
//! ];
//! let text = encode(&originals);
//! assert_eq!(text, "# Home page\ngreeting = greeting\n\n");
//!
//! // Import a translated file and match it back to the originals.
//! let decoded = decode("# Home page\ngreeting = Bonjour\n");
//! let reconciled = reconcile(decoded, &originals, 1);
//! assert_eq!(reconciled.translations.entries[0].translations, vec!["Bonjour"]);
//! ```
//!
//! # Modules
//!
//! - [`formats`]: the encoder and the line-driven decoder
//! - [`escape`]: `\uXXXX` and key escaping helpers
//! - [`reconcile`]: matching translations to an originals catalog
//! - [`codec`]: file-level reading/writing and export file naming

pub mod codec;
pub mod error;
pub mod escape;
pub mod formats;
pub mod read_options;
pub mod reconcile;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    formats::{decode, encode},
    read_options::{ReadOptions, SourceEncoding},
    reconcile::{MemoryCatalog, MissingOriginal, OriginalCatalog, Reconciled},
    types::{MessageEntry, Translations},
};
