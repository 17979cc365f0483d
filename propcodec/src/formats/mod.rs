//! Supported file formats.
//!
//! Only Java `.properties` is implemented; [`FormatInfo`] carries the naming
//! conventions collaborators need to place exported files.

pub mod properties;

pub use properties::{PLACEHOLDER_COMMENT, decode, encode};

/// Static description of a file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Human-readable format name.
    pub name: &'static str,
    /// File extension, without the leading dot.
    pub extension: &'static str,
    /// Pattern for the file stem; `{project}` and `{locale}` are substituted.
    pub filename_pattern: &'static str,
}

/// The Java `.properties` format.
pub const PROPERTIES: FormatInfo = FormatInfo {
    name: "Java Properties File (.properties)",
    extension: "properties",
    filename_pattern: "{project}_{locale}",
};

impl FormatInfo {
    /// Builds a full file name from the pattern.
    ///
    /// # Example
    /// ```rust
    /// use propcodec::formats::PROPERTIES;
    /// assert_eq!(PROPERTIES.file_name("app", "fr"), "app_fr.properties");
    /// ```
    pub fn file_name(&self, project: &str, locale: &str) -> String {
        let stem = self
            .filename_pattern
            .replace("{project}", project)
            .replace("{locale}", locale);
        format!("{}.{}", stem, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_format_info() {
        assert_eq!(PROPERTIES.extension, "properties");
        assert_eq!(PROPERTIES.name, "Java Properties File (.properties)");
    }

    #[test]
    fn test_file_name_substitutes_pattern() {
        assert_eq!(
            PROPERTIES.file_name("my-project", "pt-BR"),
            "my-project_pt-BR.properties"
        );
    }
}
