//! # Corpus Configuration
//!
//! Languages, tasks, and embedding sources are data, not code:
//! a [`PolytweetConfig`] carries all of them, and is passed into the
//! corpus encoder and embedding loader.
//!
//! ```json
//! {
//!   "sentence_column": "tweet",
//!   "languages": [
//!     {"code": "en", "dir_name": "english"},
//!     {"code": "fr", "dir_name": "french", "text_encoding": "utf8"}
//!   ],
//!   "tasks": [
//!     {"name": "sentiment", "kind": "multi_label", "labels": ["hateful", "normal"]},
//!     {"name": "directness", "labels": ["direct", "indirect"]}
//!   ],
//!   "embeddings": [
//!     {"name": "fasttext", "dir": "/data/embeddings/fasttext"}
//!   ]
//! }
//! ```

mod embedding_config;
mod language_config;
mod task_config;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

#[doc(inline)]
pub use embedding_config::*;
#[doc(inline)]
pub use language_config::*;
use serde::{Deserialize, Serialize};
#[doc(inline)]
pub use task_config::*;

use crate::errors::{PTResult, PolytweetError};

/// The default name of the free-text column of data files.
pub const DEFAULT_SENTENCE_COLUMN: &str = "tweet";

fn default_sentence_column() -> String {
    DEFAULT_SENTENCE_COLUMN.to_string()
}

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolytweetConfig {
    /// The name of the free-text column of data files.
    #[serde(default = "default_sentence_column")]
    pub sentence_column: String,

    /// Known languages.
    pub languages: LanguageTable,

    /// Known tasks.
    pub tasks: Vec<TaskSpec>,

    /// Known embedding sources.
    #[serde(default)]
    pub embeddings: Vec<EmbeddingSource>,
}

impl Default for PolytweetConfig {
    fn default() -> Self {
        Self::mlma()
    }
}

impl PolytweetConfig {
    /// Configuration for the MLMA hate speech corpus.
    pub fn mlma() -> Self {
        Self {
            sentence_column: default_sentence_column(),
            languages: LanguageTable::mlma(),
            tasks: TaskSpec::mlma(),
            embeddings: vec![EmbeddingSource::new("fasttext", "embeddings/fasttext")],
        }
    }

    /// Load a JSON config file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> PTResult<Self> {
        let reader = BufReader::new(File::open(path)?);
        Self::read(reader)
    }

    /// Read a JSON config.
    pub fn read<R: Read>(reader: R) -> PTResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Look up an embedding source by name.
    pub fn embedding_source(
        &self,
        name: &str,
    ) -> PTResult<&EmbeddingSource> {
        self.embeddings
            .iter()
            .find(|source| source.name == name)
            .ok_or_else(|| PolytweetError::UnknownEmbeddingSource(name.to_string()))
    }

    /// Look up a task by name.
    pub fn task(
        &self,
        name: &str,
    ) -> PTResult<&TaskSpec> {
        self.tasks
            .iter()
            .find(|task| task.name == name)
            .ok_or_else(|| PolytweetError::UnknownTask(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_config() {
        let json = r#"{
            "languages": [
                {"code": "en", "dir_name": "english"},
                {"code": "fr", "dir_name": "french", "text_encoding": "utf8"}
            ],
            "tasks": [
                {"name": "sentiment", "labels": ["hateful", "normal"]},
                {"name": "directness", "kind": "single_label", "labels": ["direct", "indirect"]}
            ],
            "embeddings": [
                {"name": "fasttext", "dir": "/data/fasttext", "lower": true}
            ]
        }"#;

        let config = PolytweetConfig::read(json.as_bytes()).unwrap();
        assert_eq!(config.sentence_column, DEFAULT_SENTENCE_COLUMN);
        assert_eq!(
            config.languages.get("en").unwrap().text_encoding,
            TextEncoding::Utf8Lossy
        );
        assert_eq!(
            config.languages.get("fr").unwrap().text_encoding,
            TextEncoding::Utf8
        );
        assert_eq!(config.task("sentiment").unwrap().kind(), TaskKind::MultiLabel);
        assert!(config.embedding_source("fasttext").unwrap().lower);
        assert!(matches!(
            config.embedding_source("glove"),
            Err(PolytweetError::UnknownEmbeddingSource(_))
        ));
    }

    #[test]
    fn test_save_load_config() {
        let config = PolytweetConfig::mlma();

        tempdir::TempDir::new("config_test")
            .and_then(|dir| {
                let path = dir.path().join("config.json");
                std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap())?;

                let loaded = PolytweetConfig::load_path(&path).expect("Failed to load config");
                assert_eq!(loaded, config);

                Ok(())
            })
            .unwrap();
    }
}
