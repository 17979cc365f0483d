use propcodec::{ReadOptions, SourceEncoding, codec::read_originals_from_file};

const TRUNCATE_AT: usize = 50;

/// Print a view of the entries in a .properties file.
pub fn print_view(input: &str, encoding: SourceEncoding, full: bool) -> Result<(), String> {
    let options = ReadOptions::new().with_encoding(encoding);
    let entries = read_originals_from_file(input, &options)
        .map_err(|e| format!("Error reading {}: {}", input, e))?;

    if entries.is_empty() {
        return Err(format!("No entries found in {}", input));
    }

    println!("=== {} ===", input);
    println!("Entries: {}", entries.len());

    for (i, entry) in entries.iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, entry.key());

        if entry.has_comment() {
            println!("    Comment: {}", entry.extracted_comments.replace('\n', " / "));
        }

        let value = if full {
            entry.singular.clone()
        } else {
            truncate(&entry.singular, TRUNCATE_AT)
        };
        println!("    Value: {}", value);
    }
    Ok(())
}

// Counts characters, not bytes, so multi-byte text is never split.
fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        let head: String = value.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}
