//! # Word Normalization

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// The placeholder which replaces numeric words.
pub const NUM_WORD: &str = "<num>";

/// The pattern of numeric words; e.g. `42`, `-3.5`, `1,000,000`.
pub const NUMBER_PATTERN: &str = r"^[+-]?\d+([.,]\d+)*$";

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(NUMBER_PATTERN).unwrap());

/// Normalize a word by lower-casing it, or replacing it with [`NUM_WORD`]
/// if it is a number.
pub fn normalize_word(word: &str) -> Cow<'_, str> {
    if NUMBER_REGEX.is_match(word) {
        Cow::Borrowed(NUM_WORD)
    } else if word.chars().any(char::is_uppercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}
