use propcodec::codec::{infer_locale_from_path, read_originals_from_file, read_translations_from_file};
use propcodec::{MemoryCatalog, ReadOptions, SourceEncoding, Translations, encode};
use std::path::{Path, PathBuf};

struct ExpectedEntry {
    context: &'static str,
    singular: &'static str,
    comment: &'static str,
}

fn corpus_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("tests")
        .join("data")
        .join("lib")
        .join("corpus")
}

fn read_corpus(file_name: &str, encoding: SourceEncoding) -> Translations {
    let path = corpus_root().join(file_name);
    read_originals_from_file(&path, &ReadOptions::new().with_encoding(encoding))
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn expected_en_entries() -> Vec<ExpectedEntry> {
    vec![
        ExpectedEntry {
            context: "landing.title",
            singular: "Welcome to the shop",
            comment: "Title of the landing page",
        },
        ExpectedEntry {
            context: "cart.header",
            singular: "Your cart",
            comment: "Shown above the cart\nwhen it has items",
        },
        ExpectedEntry {
            context: "cart.empty",
            singular: "Nothing here yet",
            comment: "",
        },
        ExpectedEntry {
            context: "checkout.legal",
            singular: "By placing an order you agree to our terms of service and privacy policy.",
            comment: "",
        },
        ExpectedEntry {
            context: "currency symbol",
            singular: "€",
            comment: "Exclamation comments are comments too",
        },
        ExpectedEntry {
            context: "accent.text",
            singular: "Café crème brûlée",
            comment: "",
        },
        ExpectedEntry {
            context: "emoji.smile",
            singular: "😀",
            comment: "",
        },
    ]
}

#[test]
fn corpus_en_utf8_decodes_every_entry() {
    let entries = read_corpus("webapp_en.properties", SourceEncoding::Utf8);
    let expected = expected_en_entries();

    assert_eq!(entries.len(), expected.len());
    for (actual, expected) in entries.iter().zip(&expected) {
        assert_eq!(actual.context_str(), expected.context);
        assert_eq!(actual.singular, expected.singular, "value of {}", expected.context);
        assert_eq!(
            actual.extracted_comments, expected.comment,
            "comment of {}",
            expected.context
        );
        assert!(actual.translations.is_empty());
    }
}

#[test]
fn corpus_fr_latin1_bytes_decode_to_unicode() {
    let entries = read_corpus("webapp_fr.properties", SourceEncoding::Latin1);
    assert_eq!(entries.len(), 4);

    let title = entries.find_by_context("landing.title").unwrap();
    assert_eq!(title.extracted_comments, "Entête de la page d'accueil");

    let accent = entries.find_by_context("accent.text").unwrap();
    assert_eq!(accent.singular, "Café crème brûlée");
}

#[test]
fn corpus_fr_reconciles_against_en_originals() {
    let originals = read_corpus("webapp_en.properties", SourceEncoding::Utf8);
    let catalog = MemoryCatalog::new().with_project(1, originals.entries);

    let reconciled = read_translations_from_file(
        corpus_root().join("webapp_fr.properties"),
        1,
        &catalog,
        &ReadOptions::new(),
    )
    .unwrap();

    assert!(reconciled.is_complete());
    assert_eq!(reconciled.translations.len(), 4);

    let title = reconciled.translations.find_by_context("landing.title").unwrap();
    assert_eq!(title.singular, "Welcome to the shop");
    assert_eq!(title.translations, vec!["Bienvenue dans la boutique"]);

    // The value mirrors the key, so nothing was translated.
    let empty = reconciled.translations.find_by_context("cart.empty").unwrap();
    assert_eq!(empty.singular, "Nothing here yet");
    assert!(empty.translations.is_empty());
}

#[test]
fn corpus_de_bom_needs_auto_encoding() {
    let auto = read_corpus("webapp_de.properties", SourceEncoding::Auto);
    assert_eq!(auto.len(), 2);
    assert_eq!(auto.entries[0].extracted_comments, "Titel");
    assert_eq!(auto.entries[1].singular, "Grüße");

    // Read as Latin-1 the BOM hides the first comment marker and the UTF-8
    // bytes come out as mojibake.
    let latin1 = read_corpus("webapp_de.properties", SourceEncoding::Latin1);
    assert_eq!(latin1.len(), 2);
    assert_eq!(latin1.entries[0].extracted_comments, "");
    assert_eq!(latin1.entries[1].singular, "Gr\u{c3}\u{bc}\u{c3}\u{9f}e");
}

#[test]
fn corpus_reexport_is_stable() {
    let entries = read_corpus("webapp_en.properties", SourceEncoding::Utf8);
    let first = encode(&entries.entries);
    let second = encode(&propcodec::decode(&first).entries);
    assert_eq!(first, second);
}

#[test]
fn corpus_file_names_carry_locale() {
    assert_eq!(
        infer_locale_from_path(corpus_root().join("webapp_fr.properties")),
        Some("fr".to_string())
    );
    assert_eq!(
        infer_locale_from_path(corpus_root().join("webapp_en.properties")),
        Some("en".to_string())
    );
}
