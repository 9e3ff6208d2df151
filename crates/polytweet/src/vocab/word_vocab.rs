//! # Word Vocabulary

use crate::{
    errors::{PTResult, PolytweetError},
    types::{IdType, PTHashMap, hash_map_new},
};

/// The reserved out-of-vocabulary word.
pub const UNK_WORD: &str = "<unk>";

/// `{ String -> T }` word vocabulary.
///
/// Id `0` is always [`UNK_WORD`], the out-of-vocabulary sentinel;
/// other ids are assigned densely in first-seen order, and are never
/// reassigned or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: IdType> {
    /// The map of words to ids.
    word_map: PTHashMap<String, T>,

    /// The words, in id order.
    words: Vec<String>,
}

impl<T: IdType> Default for WordVocab<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IdType> WordVocab<T> {
    /// Create a vocab holding only the sentinel.
    pub fn new() -> Self {
        let mut word_map = hash_map_new();
        word_map.insert(UNK_WORD.to_string(), T::zero());
        Self {
            word_map,
            words: vec![UNK_WORD.to_string()],
        }
    }

    /// The sentinel id.
    pub fn unk_id(&self) -> T {
        T::zero()
    }

    /// Get the number of words in the vocab, including the sentinel.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the vocab empty?
    ///
    /// Always false; the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Is `word` in the vocab?
    pub fn contains(
        &self,
        word: &str,
    ) -> bool {
        self.word_map.contains_key(word)
    }

    /// Get the id of `word`, if present.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<T> {
        self.word_map.get(word).copied()
    }

    /// Get the id of `word`; or the sentinel id.
    pub fn lookup(
        &self,
        word: &str,
    ) -> T {
        self.get(word).unwrap_or_else(|| self.unk_id())
    }

    /// Get the word for `id`, if any.
    pub fn word(
        &self,
        id: T,
    ) -> Option<&str> {
        self.words.get(id.to_usize()?).map(String::as_str)
    }

    /// Get the id of `word`, assigning the next id if it is new.
    pub fn insert(
        &mut self,
        word: &str,
    ) -> PTResult<T> {
        if let Some(id) = self.get(word) {
            return Ok(id);
        }

        let size = self.words.len();
        let id = T::from_usize(size).ok_or(PolytweetError::VocabSizeOverflow { size })?;
        self.word_map.insert(word.to_string(), id);
        self.words.push(word.to_string());
        Ok(id)
    }

    /// Iterate over `(word, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        let ids = (0..self.words.len()).map_while(T::from_usize);
        self.words.iter().map(String::as_str).zip(ids)
    }

    /// Rebuild a vocab from words listed in id order.
    ///
    /// The first word must be [`UNK_WORD`] and words must be unique.
    pub fn from_ordered_words<I, S>(words: I) -> PTResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words.into_iter();
        match words.next() {
            Some(first) if first.as_ref() == UNK_WORD => {}
            _ => {
                return Err(PolytweetError::VocabConflict(format!(
                    "first vocab word must be {UNK_WORD:?}"
                )));
            }
        }

        let mut vocab = Self::new();
        for word in words {
            let word = word.as_ref();
            if vocab.contains(word) {
                return Err(PolytweetError::VocabConflict(format!(
                    "duplicate vocab word {word:?}"
                )));
            }
            vocab.insert(word)?;
        }
        Ok(vocab)
    }
}
