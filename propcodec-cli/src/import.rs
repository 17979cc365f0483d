use propcodec::{
    MemoryCatalog, MessageEntry, ReadOptions, Reconciled, SourceEncoding,
    codec::read_translations_from_file, traits::Parser,
};
use std::fs;

/// Reconciles a translated .properties file against a JSON file of originals.
pub fn import_translations(
    input: &str,
    originals: &str,
    project_id: u64,
    encoding: SourceEncoding,
) -> Result<Reconciled, String> {
    let originals = Vec::<MessageEntry>::read_from(originals)
        .map_err(|e| format!("Error reading originals {}: {}", originals, e))?;
    let catalog = MemoryCatalog::new().with_project(project_id, originals);

    let options = ReadOptions::new().with_encoding(encoding);
    read_translations_from_file(input, project_id, &catalog, &options)
        .map_err(|e| format!("Error reading {}: {}", input, e))
}

/// Same as [`import_translations`], rendered as pretty JSON.
pub fn import_to_json(
    input: &str,
    originals: &str,
    project_id: u64,
    encoding: SourceEncoding,
) -> Result<(String, Reconciled), String> {
    let reconciled = import_translations(input, originals, project_id, encoding)?;
    let json = serde_json::to_string_pretty(&reconciled.translations)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;
    Ok((json, reconciled))
}

/// Run the import command. Missing originals are reported, not fatal.
pub fn run_import_command(
    input: &str,
    originals: &str,
    project_id: u64,
    output: Option<&str>,
    encoding: SourceEncoding,
) -> Result<(), String> {
    let (json, reconciled) = import_to_json(input, originals, project_id, encoding)?;

    for missing in &reconciled.missing {
        eprintln!("⚠️  {}", missing);
    }

    match output {
        Some(output_path) => {
            fs::write(output_path, json)
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            eprintln!(
                "✅ Imported {} translations ({} skipped) to: {}",
                reconciled.translations.len(),
                reconciled.missing.len(),
                output_path
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
