use propcodec::{ReadOptions, SourceEncoding, codec::read_originals_from_file};
use std::fs;

/// Decodes a .properties file and renders its entries as pretty JSON.
pub fn decode_to_json(input: &str, encoding: SourceEncoding) -> Result<String, String> {
    let options = ReadOptions::new().with_encoding(encoding);
    let entries = read_originals_from_file(input, &options)
        .map_err(|e| format!("Error reading {}: {}", input, e))?;

    serde_json::to_string_pretty(&entries)
        .map_err(|e| format!("Error serializing to JSON: {}", e))
}

/// Run the decode command: read a .properties file and output its entries as JSON.
pub fn run_decode_command(
    input: &str,
    output: Option<&str>,
    encoding: SourceEncoding,
) -> Result<(), String> {
    let json = decode_to_json(input, encoding)?;

    match output {
        Some(output_path) => {
            fs::write(output_path, json)
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            eprintln!("✅ Decoded entries written to: {}", output_path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
