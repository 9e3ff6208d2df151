//! # Error Types

use std::path::PathBuf;

/// Errors from polytweet operations.
#[derive(Debug, thiserror::Error)]
pub enum PolytweetError {
    /// A language data directory does not exist.
    #[error("language path {} does not exist", path.display())]
    LanguageDirNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// A language data directory holds no data file.
    #[error("no data file found in {}", path.display())]
    DataFileNotFound {
        /// The empty directory.
        path: PathBuf,
    },

    /// A language data directory holds more than one data file.
    #[error("expected one data file in {}, found {count}", path.display())]
    AmbiguousDataFile {
        /// The directory.
        path: PathBuf,
        /// The number of candidate files.
        count: usize,
    },

    /// An embedding directory does not exist.
    #[error("embedding directory {} does not exist", path.display())]
    EmbeddingDirNotFound {
        /// The missing directory.
        path: PathBuf,
    },

    /// A language code with no configuration entry.
    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),

    /// An embedding source name with no configuration entry.
    #[error("unknown embedding source: {0:?}")]
    UnknownEmbeddingSource(String),

    /// A task name with no label map.
    #[error("unknown task: {0:?}")]
    UnknownTask(String),

    /// A label absent from its task's label map.
    #[error("unknown label {label:?} for task {task:?}")]
    UnknownLabel {
        /// The task being encoded.
        task: String,
        /// The unseen label.
        label: String,
    },

    /// A record lacks a required column.
    #[error("missing field {field:?} in {}", path.display())]
    MissingField {
        /// The column name.
        field: String,
        /// The file being read.
        path: PathBuf,
    },

    /// A score map lacks an entry for a task.
    #[error("missing {split} score for task {task:?}")]
    MissingScore {
        /// The split (train, dev, test) of the score map.
        split: &'static str,
        /// The task name.
        task: String,
    },

    /// An average was requested over no scores.
    #[error("cannot average an empty score map")]
    EmptyScores,

    /// Embedding files disagree on vector dimensionality.
    #[error("embedding dimension mismatch in {}: expected {expected}, found {found}", path.display())]
    EmbeddingDimensionMismatch {
        /// The offending file.
        path: PathBuf,
        /// The dimension of previously loaded files.
        expected: usize,
        /// The dimension declared by this file.
        found: usize,
    },

    /// The vocabulary exceeds the capacity of the id type.
    #[error("vocab size ({size}) exceeds id type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Parse error (header, float, integer, text encoding, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV read or write error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Config (de)serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for polytweet operations.
pub type PTResult<T> = core::result::Result<T, PolytweetError>;
