//! # Embedding Table

use crate::types::{PTHashMap, hash_map_new};

/// `{ word -> vector }` pretrained embedding table.
///
/// All vectors share [`Self::dim`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingTable {
    /// The map of words to vectors.
    vectors: PTHashMap<String, Vec<f32>>,

    /// The shared vector dimensionality.
    dim: usize,

    /// The sum of the word counts declared by every loaded file.
    declared_words: usize,
}

impl EmbeddingTable {
    /// Create an empty table of the given dimension.
    pub fn new(dim: usize) -> Self {
        Self {
            vectors: hash_map_new(),
            dim,
            declared_words: 0,
        }
    }

    /// Get the vector dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Get the sum of the word counts declared by file headers.
    pub fn declared_words(&self) -> usize {
        self.declared_words
    }

    pub(crate) fn add_declared_words(
        &mut self,
        count: usize,
    ) {
        self.declared_words += count;
    }

    pub(crate) fn set_dim(
        &mut self,
        dim: usize,
    ) {
        self.dim = dim;
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Get the vector of `word`, if present.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    /// Insert a vector; replacing any previous vector of `word`.
    ///
    /// ## Returns
    /// The replaced vector, if any.
    pub fn insert(
        &mut self,
        word: String,
        vector: Vec<f32>,
    ) -> Option<Vec<f32>> {
        debug_assert_eq!(vector.len(), self.dim);
        self.vectors.insert(word, vector)
    }

    /// Iterate over `(word, vector)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.vectors
            .iter()
            .map(|(word, vector)| (word.as_str(), vector.as_slice()))
    }
}
