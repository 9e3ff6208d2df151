//! # Language Configuration

use serde::{Deserialize, Serialize};

use crate::errors::{PTResult, PolytweetError};

/// How the bytes of a language's embedding file are decoded.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TextEncoding {
    /// Strict UTF-8; invalid bytes are a parse error.
    Utf8,

    /// UTF-8 with invalid sequences replaced by `U+FFFD`.
    #[default]
    Utf8Lossy,
}

impl TextEncoding {
    /// Decode a line of bytes.
    ///
    /// ## Arguments
    /// * `bytes` - the raw line, without the trailing newline.
    pub fn decode(
        &self,
        bytes: Vec<u8>,
    ) -> PTResult<String> {
        match self {
            Self::Utf8 => {
                String::from_utf8(bytes).map_err(|e| PolytweetError::Parse(e.to_string()))
            }
            Self::Utf8Lossy => Ok(match String::from_utf8(bytes) {
                Ok(s) => s,
                Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
            }),
        }
    }
}

/// A single language entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSpec {
    /// The short language code; e.g. `"en"`.
    pub code: String,

    /// The name of the language's directory under the data directory.
    pub dir_name: String,

    /// The encoding of the language's embedding files.
    #[serde(default)]
    pub text_encoding: TextEncoding,
}

impl LanguageSpec {
    /// Create a new language entry.
    pub fn new<C: Into<String>, D: Into<String>>(
        code: C,
        dir_name: D,
        text_encoding: TextEncoding,
    ) -> Self {
        Self {
            code: code.into(),
            dir_name: dir_name.into(),
            text_encoding,
        }
    }
}

/// Lookup table of known languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTable {
    languages: Vec<LanguageSpec>,
}

impl From<Vec<LanguageSpec>> for LanguageTable {
    fn from(languages: Vec<LanguageSpec>) -> Self {
        Self { languages }
    }
}

impl LanguageTable {
    /// The English/French/Arabic table of the MLMA hate speech corpus.
    pub fn mlma() -> Self {
        vec![
            LanguageSpec::new("en", "english", TextEncoding::Utf8Lossy),
            LanguageSpec::new("fr", "french", TextEncoding::Utf8),
            LanguageSpec::new("ar", "arabic", TextEncoding::Utf8),
        ]
        .into()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &LanguageSpec> {
        self.languages.iter()
    }

    /// Look up a language by code.
    pub fn get(
        &self,
        code: &str,
    ) -> PTResult<&LanguageSpec> {
        self.languages
            .iter()
            .find(|spec| spec.code == code)
            .ok_or_else(|| PolytweetError::UnknownLanguage(code.to_string()))
    }

    /// Add or replace a language entry.
    pub fn insert(
        &mut self,
        spec: LanguageSpec,
    ) {
        match self.languages.iter_mut().find(|s| s.code == spec.code) {
            Some(existing) => *existing = spec,
            None => self.languages.push(spec),
        }
    }
}
