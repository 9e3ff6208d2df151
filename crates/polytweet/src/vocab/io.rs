//! # Word Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{PTResult, PolytweetError},
    types::IdType,
    vocab::WordVocab,
};

/// Load a [`WordVocab`] from a vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD}\t{ID}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_word_vocab_path<T, P>(path: P) -> PTResult<WordVocab<T>>
where
    T: IdType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_word_vocab(reader)
}

/// Read a [`WordVocab`] from a vocab line reader.
///
/// Ids must be dense, ascending, and start with the sentinel at `0`.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_word_vocab<T, R>(reader: R) -> PTResult<WordVocab<T>>
where
    T: IdType,
    R: BufRead,
{
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line?;

        let (word, id) = line
            .rsplit_once('\t')
            .ok_or_else(|| PolytweetError::Parse(format!("malformed vocab line: {line:?}")))?;

        let id: usize = id
            .parse()
            .map_err(|e: core::num::ParseIntError| PolytweetError::Parse(e.to_string()))?;
        if id != words.len() {
            return Err(PolytweetError::VocabConflict(format!(
                "expected id {} for {word:?}, found {id}",
                words.len()
            )));
        }

        words.push(word.to_string());
    }

    WordVocab::from_ordered_words(words)
}

/// Save a [`WordVocab`] to a vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_word_vocab_path<T: IdType, P: AsRef<Path>>(
    vocab: &WordVocab<T>,
    path: P,
) -> PTResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_word_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordVocab`] to a [`Write`] writer, in id order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_word_vocab<T, W>(
    vocab: &WordVocab<T>,
    writer: &mut W,
) -> PTResult<()>
where
    T: IdType,
    W: Write,
{
    for (word, id) in vocab.iter() {
        writeln!(writer, "{word}\t{id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::UNK_WORD;

    #[test]
    fn test_save_load_vocab() {
        type T = u32;

        let mut vocab: WordVocab<T> = WordVocab::new();
        vocab.insert("apple").unwrap();
        vocab.insert("banana").unwrap();
        vocab.insert("pear").unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("vocab.tsv");

                save_word_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: WordVocab<T> =
                    load_word_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_read_rejects_gaps() {
        type T = u32;

        let data = format!("{UNK_WORD}\t0\napple\t2\n");
        assert!(matches!(
            read_word_vocab::<T, _>(data.as_bytes()),
            Err(PolytweetError::VocabConflict(_))
        ));

        let data = "apple\t0\n";
        assert!(read_word_vocab::<T, _>(data.as_bytes()).is_err());

        let data = format!("{UNK_WORD}\t0\napple 1\n");
        assert!(matches!(
            read_word_vocab::<T, _>(data.as_bytes()),
            Err(PolytweetError::Parse(_))
        ));
    }
}
