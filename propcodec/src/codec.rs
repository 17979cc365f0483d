//! File-level reading and writing of `.properties` catalogs.
//!
//! These functions are the boundary to the filesystem: they turn unreadable
//! files into [`Error::Io`] and hand decoded text to [`crate::formats`].
//! Exported files are named `<project>_<locale>.properties`, where the locale
//! is a BCP 47 tag using `-` (e.g. `pt-BR`).

use std::{fs, path::Path};

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::{
    error::Error,
    formats::{PROPERTIES, decode, encode},
    read_options::ReadOptions,
    reconcile::{OriginalCatalog, Reconciled, reconcile_with_catalog},
    types::{MessageEntry, Translations},
};

/// Reads a file of original messages; every key becomes an entry context.
///
/// # Example
///
/// ```rust,no_run
/// use propcodec::{ReadOptions, codec::read_originals_from_file};
/// let originals = read_originals_from_file("app_en.properties", &ReadOptions::new())?;
/// println!("{} originals", originals.len());
/// # Ok::<(), propcodec::Error>(())
/// ```
pub fn read_originals_from_file<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<Translations, Error> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let text = options.encoding.decode(&bytes)?;
    let entries = decode(&text);

    debug!(
        path = %path.display(),
        encoding = %options.encoding,
        entries = entries.len(),
        "read properties originals"
    );
    Ok(entries)
}

/// Reads a translated file and reconciles it against the project's originals.
///
/// Entries whose key is not an original context are left out and listed in
/// [`Reconciled::missing`]; only an unreadable file is an error.
pub fn read_translations_from_file<P, C>(
    path: P,
    project_id: u64,
    catalog: &C,
    options: &ReadOptions,
) -> Result<Reconciled, Error>
where
    P: AsRef<Path>,
    C: OriginalCatalog + ?Sized,
{
    let decoded = read_originals_from_file(path, options)?;
    Ok(reconcile_with_catalog(decoded, catalog, project_id))
}

/// Encodes `entries` and writes them to `path`.
pub fn write_to_file<P: AsRef<Path>>(path: P, entries: &[MessageEntry]) -> Result<(), Error> {
    let path = path.as_ref();
    fs::write(path, encode(entries))?;
    debug!(path = %path.display(), entries = entries.len(), "wrote properties file");
    Ok(())
}

/// File name for exporting `project` in `locale`.
///
/// # Example
/// ```rust
/// use propcodec::codec::export_file_name;
/// assert_eq!(export_file_name("my-app", "pt-BR").unwrap(), "my-app_pt-BR.properties");
/// assert!(export_file_name("my-app", "not a locale").is_err());
/// ```
pub fn export_file_name(project: &str, locale: &str) -> Result<String, Error> {
    if project.trim().is_empty() {
        return Err(Error::DataMismatch(
            "project name must not be empty".to_string(),
        ));
    }
    validate_locale(locale)?;
    Ok(PROPERTIES.file_name(project, locale))
}

/// Recovers the locale from a `<project>_<locale>.properties` path.
///
/// Returns `None` if the extension is not `properties`, there is no `_`, or
/// the part after the last `_` is not a valid locale.
pub fn infer_locale_from_path<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();
    let extension = path.extension()?.to_str()?;
    if !extension.eq_ignore_ascii_case(PROPERTIES.extension) {
        return None;
    }

    let stem = path.file_stem()?.to_str()?;
    let (project, locale) = stem.rsplit_once('_')?;
    if project.is_empty() {
        return None;
    }
    validate_locale(locale).ok()?;
    Some(locale.to_string())
}

fn validate_locale(locale: &str) -> Result<LanguageIdentifier, Error> {
    if locale.is_empty() {
        return Err(Error::InvalidLocale(locale.to_string()));
    }
    locale
        .parse::<LanguageIdentifier>()
        .map_err(|_| Error::InvalidLocale(locale.to_string()))
}
