//! # Word Indexers
//!
//! A [`WordIndexer`] maps words to vocabulary ids while a corpus is encoded.
//!
//! * [`GrowingWordIndexer`] registers new words; used for training data.
//! * [`FrozenWordIndexer`] maps unseen words to the sentinel; used for
//!   evaluation data.

use crate::{errors::PTResult, types::IdType, vocab::WordVocab};

/// Maps words to ids.
pub trait WordIndexer<T: IdType> {
    /// Get the id for `word`.
    fn index_word(
        &mut self,
        word: &str,
    ) -> PTResult<T>;

    /// Whitespace-split `sentence` and index each token.
    fn index_sentence(
        &mut self,
        sentence: &str,
    ) -> PTResult<Vec<T>> {
        sentence
            .split_whitespace()
            .map(|word| self.index_word(word))
            .collect()
    }
}

/// A [`WordIndexer`] which grows its vocab with every new word.
#[derive(Debug)]
pub struct GrowingWordIndexer<'a, T: IdType> {
    vocab: &'a mut WordVocab<T>,
}

impl<'a, T: IdType> GrowingWordIndexer<'a, T> {
    /// Wrap a vocab.
    pub fn new(vocab: &'a mut WordVocab<T>) -> Self {
        Self { vocab }
    }
}

impl<T: IdType> WordIndexer<T> for GrowingWordIndexer<'_, T> {
    fn index_word(
        &mut self,
        word: &str,
    ) -> PTResult<T> {
        self.vocab.insert(word)
    }
}

/// A read-only [`WordIndexer`]; unseen words map to the sentinel id.
#[derive(Debug, Clone, Copy)]
pub struct FrozenWordIndexer<'a, T: IdType> {
    vocab: &'a WordVocab<T>,
}

impl<'a, T: IdType> FrozenWordIndexer<'a, T> {
    /// Wrap a vocab.
    pub fn new(vocab: &'a WordVocab<T>) -> Self {
        Self { vocab }
    }
}

impl<T: IdType> WordIndexer<T> for FrozenWordIndexer<'_, T> {
    fn index_word(
        &mut self,
        word: &str,
    ) -> PTResult<T> {
        Ok(self.vocab.lookup(word))
    }
}
