//! # Embedding Source Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The default field separator of embedding files.
pub const DEFAULT_EMBEDDING_SEPARATOR: &str = " ";

/// The default extension of embedding files; preceded by the language code.
pub const DEFAULT_EMBEDDING_EXTENSION: &str = ".vec";

fn default_separator() -> String {
    DEFAULT_EMBEDDING_SEPARATOR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EMBEDDING_EXTENSION.to_string()
}

/// A named directory of per-language embedding files.
///
/// Files are selected by the suffix `{lang}{extension}`; e.g. `wiki.en.vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingSource {
    /// The source name; e.g. `"fasttext"`.
    pub name: String,

    /// The directory holding the embedding files.
    pub dir: PathBuf,

    /// The field separator of word lines.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether to lower-case words on load.
    #[serde(default)]
    pub lower: bool,

    /// The file extension following the language code.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl EmbeddingSource {
    /// Create a new source with the default separator and extension.
    pub fn new<N: Into<String>, P: AsRef<Path>>(
        name: N,
        dir: P,
    ) -> Self {
        Self {
            name: name.into(),
            dir: dir.as_ref().to_path_buf(),
            separator: default_separator(),
            lower: false,
            extension: default_extension(),
        }
    }

    /// Set the separator.
    pub fn with_separator<S: Into<String>>(
        self,
        separator: S,
    ) -> Self {
        Self {
            separator: separator.into(),
            ..self
        }
    }

    /// Set the lower-casing flag.
    pub fn with_lower(
        self,
        lower: bool,
    ) -> Self {
        Self { lower, ..self }
    }

    /// Set the directory.
    pub fn with_dir<P: AsRef<Path>>(
        self,
        dir: P,
    ) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            ..self
        }
    }

    /// Does `file_name` belong to any of the `languages`?
    pub fn matches_file<S: AsRef<str>>(
        &self,
        file_name: &str,
        languages: &[S],
    ) -> bool {
        self.file_language(file_name, languages).is_some()
    }

    /// The first of `languages` whose suffix `file_name` carries, if any.
    pub fn file_language<'a, S: AsRef<str>>(
        &self,
        file_name: &str,
        languages: &'a [S],
    ) -> Option<&'a str> {
        languages.iter().map(AsRef::as_ref).find(|lang| {
            file_name
                .strip_suffix(self.extension.as_str())
                .is_some_and(|stem| stem.ends_with(lang))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let source: EmbeddingSource =
            serde_json::from_str(r#"{"name": "muse", "dir": "/data/muse"}"#).unwrap();
        assert_eq!(source, EmbeddingSource::new("muse", "/data/muse"));
        assert_eq!(source.separator, " ");
        assert!(!source.lower);
    }

    #[test]
    fn test_file_language() {
        let source = EmbeddingSource::new("fasttext", "/tmp");
        let langs = ["en", "fr"];

        assert_eq!(source.file_language("wiki.en.vec", &langs), Some("en"));
        assert_eq!(source.file_language("wiki.fr.vec", &langs), Some("fr"));
        assert_eq!(source.file_language("wiki.ar.vec", &langs), None);
        assert_eq!(source.file_language("wiki.en.bin", &langs), None);
        assert!(source.matches_file("cc.en.vec", &langs));
    }
}
