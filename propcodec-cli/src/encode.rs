use propcodec::{MessageEntry, codec::write_to_file, encode, traits::Parser};

fn read_entries(input: &str) -> Result<Vec<MessageEntry>, String> {
    Vec::<MessageEntry>::read_from(input).map_err(|e| format!("Error reading {}: {}", input, e))
}

/// Reads a JSON array of entries and encodes it as .properties text.
pub fn encode_from_json(input: &str) -> Result<String, String> {
    Ok(encode(&read_entries(input)?))
}

/// Run the encode command: JSON entries in, .properties text out.
pub fn run_encode_command(input: &str, output: Option<&str>) -> Result<(), String> {
    let entries = read_entries(input)?;

    match output {
        Some(output_path) => {
            write_to_file(output_path, &entries)
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            eprintln!(
                "✅ Encoded {} entries to: {}",
                entries.len(),
                output_path
            );
        }
        None => print!("{}", encode(&entries)),
    }
    Ok(())
}
