//! Reading and writing a whole catalog through `std::io`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// A catalog that has one on-disk representation.
///
/// `.properties` catalogs ([`crate::Translations`]) are read as Latin-1 and
/// written as ASCII; entry lists (`Vec<MessageEntry>`) use JSON, which is how
/// the CLI exchanges originals and decoded files.
///
/// # Example
///
/// ```rust,no_run
/// use propcodec::{MessageEntry, traits::Parser};
/// let originals = Vec::<MessageEntry>::read_from("originals.json")?;
/// propcodec::Translations::from(originals).write_to("messages_en.properties")?;
/// Ok::<(), propcodec::Error>(())
/// ```
pub trait Parser {
    /// Reads the catalog from `reader` until EOF.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Opens `path` and reads the catalog from it.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Writes the whole catalog to `writer`.
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Creates (or truncates) `path` and writes the catalog to it.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
