//! Options controlling how raw file bytes become properties text.

use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    io::Read,
    str::FromStr,
};

use crate::error::Error;

/// How the bytes of a properties file are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceEncoding {
    /// ISO-8859-1: every byte is the code point of the same value.
    #[default]
    Latin1,
    /// UTF-8, with a leading BOM removed.
    Utf8,
    /// Honour a UTF-8/UTF-16 BOM; otherwise UTF-8 if the bytes are valid
    /// UTF-8, Latin-1 if not.
    Auto,
}

impl Display for SourceEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceEncoding::Latin1 => write!(f, "latin1"),
            SourceEncoding::Utf8 => write!(f, "utf8"),
            SourceEncoding::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for SourceEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "latin1" | "iso88591" => Ok(SourceEncoding::Latin1),
            "utf8" => Ok(SourceEncoding::Utf8),
            "auto" => Ok(SourceEncoding::Auto),
            _ => Err(Error::DataMismatch(format!(
                "unknown encoding '{}', expected latin1, utf8 or auto",
                s
            ))),
        }
    }
}

impl SourceEncoding {
    /// Decodes raw file bytes into text.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>, Error> {
        match self {
            SourceEncoding::Latin1 => Ok(Cow::Owned(crate::escape::decode_latin1(bytes))),
            SourceEncoding::Utf8 => Ok(encoding_rs::UTF_8.decode_with_bom_removal(bytes).0),
            SourceEncoding::Auto => {
                // BOM-carrying input is transcoded to UTF-8; anything else passes through.
                let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
                    .bom_sniffing(true)
                    .strip_bom(true)
                    .build(bytes);
                let mut sniffed = Vec::with_capacity(bytes.len());
                decoder.read_to_end(&mut sniffed)?;

                match String::from_utf8(sniffed) {
                    Ok(text) => Ok(Cow::Owned(text)),
                    Err(err) => Ok(Cow::Owned(crate::escape::decode_latin1(err.as_bytes()))),
                }
            }
        }
    }
}

/// Read behavior options for the file-loading APIs in [`crate::codec`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadOptions {
    /// Byte interpretation of the input file.
    pub encoding: SourceEncoding,
}

impl ReadOptions {
    /// Creates default read options (Latin-1 input).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source encoding.
    pub fn with_encoding(mut self, encoding: SourceEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_from_str() {
        assert_eq!(
            SourceEncoding::from_str("latin1").unwrap(),
            SourceEncoding::Latin1
        );
        assert_eq!(
            SourceEncoding::from_str("ISO-8859-1").unwrap(),
            SourceEncoding::Latin1
        );
        assert_eq!(
            SourceEncoding::from_str("UTF-8").unwrap(),
            SourceEncoding::Utf8
        );
        assert_eq!(
            SourceEncoding::from_str(" auto ").unwrap(),
            SourceEncoding::Auto
        );
        assert!(SourceEncoding::from_str("ebcdic").is_err());
    }

    #[test]
    fn test_encoding_display_round_trips() {
        for encoding in [
            SourceEncoding::Latin1,
            SourceEncoding::Utf8,
            SourceEncoding::Auto,
        ] {
            assert_eq!(
                SourceEncoding::from_str(&encoding.to_string()).unwrap(),
                encoding
            );
        }
    }

    #[test]
    fn test_latin1_maps_high_bytes_to_code_points() {
        let decoded = SourceEncoding::Latin1.decode(b"caf\xe9").unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_utf8_strips_bom() {
        let decoded = SourceEncoding::Utf8
            .decode("\u{feff}key = été".as_bytes())
            .unwrap();
        assert_eq!(decoded, "key = été");
    }

    #[test]
    fn test_auto_prefers_utf8_then_latin1() {
        let utf8 = SourceEncoding::Auto.decode("été".as_bytes()).unwrap();
        assert_eq!(utf8, "été");

        let latin1 = SourceEncoding::Auto.decode(b"\xe9t\xe9").unwrap();
        assert_eq!(latin1, "été");
    }

    #[test]
    fn test_auto_transcodes_utf16_bom() {
        // "a=b" in UTF-16LE with BOM
        let bytes = [0xFF, 0xFE, b'a', 0, b'=', 0, b'b', 0];
        let decoded = SourceEncoding::Auto.decode(&bytes).unwrap();
        assert_eq!(decoded, "a=b");
    }

    #[test]
    fn test_read_options_builder() {
        let options = ReadOptions::new().with_encoding(SourceEncoding::Utf8);
        assert_eq!(options.encoding, SourceEncoding::Utf8);
        assert_eq!(ReadOptions::default().encoding, SourceEncoding::Latin1);
    }
}
