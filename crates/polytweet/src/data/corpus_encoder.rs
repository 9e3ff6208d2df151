//! # Corpus Encoder

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    config::PolytweetConfig,
    data::records::{CorpusRecord, language_data_file, load_records_path},
    errors::PTResult,
    types::IdType,
    vocab::{
        FrozenWordIndexer,
        GrowingWordIndexer,
        LabelSpace,
        TaskLabels,
        WordIndexer,
        WordVocab,
        normalize_word,
    },
};

/// `{ task name -> encoded labels }` for one example.
///
/// ## Style Hints
/// Instance names should prefer `task_labels`.
pub type TaskEncodings<T> = BTreeMap<String, Vec<T>>;

/// Options for [`CorpusEncoder`].
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct EncodeOptions {
    /// Normalize words with [`normalize_word`] before indexing.
    pub normalize: bool,
}

impl EncodeOptions {
    /// Set the normalize flag.
    pub fn with_normalize(
        self,
        normalize: bool,
    ) -> Self {
        Self { normalize }
    }
}

/// Per-language encoding counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSummary {
    /// The language code.
    pub language: String,

    /// The data file the language was read from.
    pub path: PathBuf,

    /// The number of sentences encoded.
    pub sentences: usize,

    /// The number of tokens encoded.
    pub tokens: usize,
}

/// A borrowed view of one encoded example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EncodedExample<'a, T: IdType> {
    /// The word ids.
    pub words: &'a [T],

    /// The encoded labels of each task.
    pub labels: &'a TaskEncodings<T>,
}

/// An encoded corpus; parallel word id sequences and task encodings.
///
/// Examples are ordered by language, in the order the languages were
/// requested, then by file order.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedCorpus<T: IdType> {
    /// The word id sequence of each example.
    pub word_ids: Vec<Vec<T>>,

    /// The task encodings of each example.
    pub labels: Vec<TaskEncodings<T>>,

    /// Per-language counts, in encoding order.
    pub summaries: Vec<LanguageSummary>,
}

impl<T: IdType> Default for EncodedCorpus<T> {
    fn default() -> Self {
        Self {
            word_ids: Vec::new(),
            labels: Vec::new(),
            summaries: Vec::new(),
        }
    }
}

impl<T: IdType> EncodedCorpus<T> {
    /// Get the number of examples.
    pub fn len(&self) -> usize {
        self.word_ids.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.word_ids.is_empty()
    }

    /// Iterate over the examples.
    pub fn examples(&self) -> impl Iterator<Item = EncodedExample<'_, T>> {
        self.word_ids
            .iter()
            .zip(self.labels.iter())
            .map(|(words, labels)| EncodedExample { words, labels })
    }

    /// The encoded labels of one task, in example order.
    pub fn task_column(
        &self,
        task: &str,
    ) -> Vec<&[T]> {
        self.labels
            .iter()
            .filter_map(|labels| labels.get(task).map(Vec::as_slice))
            .collect()
    }
}

/// Encodes per-language CSV data into word ids and task label encodings.
///
/// The label space is read-only; the word vocabulary is either built
/// ([`Self::encode_train`]) or reused ([`Self::encode_eval`]).
#[derive(Debug, Clone)]
pub struct CorpusEncoder<'a> {
    config: &'a PolytweetConfig,
    label_space: &'a LabelSpace,
    data_dir: PathBuf,
    options: EncodeOptions,
}

impl<'a> CorpusEncoder<'a> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `config` - the language table and sentence column.
    /// * `label_space` - the complete label maps of every task.
    /// * `data_dir` - the directory holding one sub-directory per language.
    pub fn new<P: AsRef<Path>>(
        config: &'a PolytweetConfig,
        label_space: &'a LabelSpace,
        data_dir: P,
    ) -> Self {
        Self {
            config,
            label_space,
            data_dir: data_dir.as_ref().to_path_buf(),
            options: EncodeOptions::default(),
        }
    }

    /// Set the options.
    pub fn with_options(
        self,
        options: EncodeOptions,
    ) -> Self {
        Self { options, ..self }
    }

    /// Get the options.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve the data file of a language code.
    pub fn language_file(
        &self,
        language: &str,
    ) -> PTResult<PathBuf> {
        language_data_file(&self.data_dir, self.config.languages.get(language)?)
    }

    /// Encode training data; building a fresh word vocabulary.
    ///
    /// ## Returns
    /// The encoded corpus and the vocabulary built while encoding it.
    pub fn encode_train<T, L, S>(
        &self,
        languages: &[L],
        task_names: &[S],
    ) -> PTResult<(EncodedCorpus<T>, WordVocab<T>)>
    where
        T: IdType,
        L: AsRef<str>,
        S: AsRef<str>,
    {
        let mut vocab = WordVocab::new();
        let corpus = self.encode_with(
            languages,
            task_names,
            &mut GrowingWordIndexer::new(&mut vocab),
        )?;
        Ok((corpus, vocab))
    }

    /// Encode evaluation data against a frozen word vocabulary.
    ///
    /// Words absent from `vocab` are encoded as its sentinel id.
    pub fn encode_eval<T, L, S>(
        &self,
        languages: &[L],
        task_names: &[S],
        vocab: &WordVocab<T>,
    ) -> PTResult<EncodedCorpus<T>>
    where
        T: IdType,
        L: AsRef<str>,
        S: AsRef<str>,
    {
        self.encode_with(languages, task_names, &mut FrozenWordIndexer::new(vocab))
    }

    /// Encode the data of `languages`, in order, with the given indexer.
    ///
    /// ## Errors
    /// Unknown languages or tasks, missing directories or columns, and
    /// labels absent from the label space are all returned unchanged.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode_with<T, L, S, I>(
        &self,
        languages: &[L],
        task_names: &[S],
        indexer: &mut I,
    ) -> PTResult<EncodedCorpus<T>>
    where
        T: IdType,
        L: AsRef<str>,
        S: AsRef<str>,
        I: WordIndexer<T>,
    {
        let tasks = self.label_space.select(task_names)?;
        let task_columns: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();

        let mut corpus = EncodedCorpus::default();
        for language in languages {
            let language = language.as_ref();
            let path = self.language_file(language)?;
            log::debug!("{language}: reading {}", path.display());

            let records = load_records_path(&path, &self.config.sentence_column, &task_columns)?;

            let before = corpus.len();
            let tokens = self.encode_records(&records, &tasks, indexer, &mut corpus)?;
            let sentences = corpus.len() - before;

            log::info!("{language}: encoded {sentences} sentences, {tokens} tokens");
            corpus.summaries.push(LanguageSummary {
                language: language.to_string(),
                path,
                sentences,
                tokens,
            });
        }

        assert_eq!(corpus.word_ids.len(), corpus.labels.len());
        Ok(corpus)
    }

    /// Encode in-memory records, appending to `corpus`.
    ///
    /// `records[i].fields` must be ordered as `tasks`.
    ///
    /// ## Returns
    /// The number of tokens encoded.
    pub fn encode_records<T, I>(
        &self,
        records: &[CorpusRecord],
        tasks: &[&TaskLabels],
        indexer: &mut I,
        corpus: &mut EncodedCorpus<T>,
    ) -> PTResult<usize>
    where
        T: IdType,
        I: WordIndexer<T>,
    {
        let mut num_tokens = 0;

        for record in records {
            let word_ids = if self.options.normalize {
                record
                    .sentence
                    .split_whitespace()
                    .map(|word| indexer.index_word(&normalize_word(word)))
                    .collect::<PTResult<Vec<T>>>()?
            } else {
                indexer.index_sentence(&record.sentence)?
            };
            num_tokens += word_ids.len();

            let mut task_labels = TaskEncodings::new();
            for (task, raw) in tasks.iter().zip(record.fields.iter()) {
                task_labels.insert(task.name.clone(), task.encode(raw)?);
            }

            corpus.word_ids.push(word_ids);
            corpus.labels.push(task_labels);
        }

        Ok(num_tokens)
    }
}
