//! # Embedding Loader

use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::{
    config::{EmbeddingSource, LanguageTable, PolytweetConfig, TextEncoding},
    embeddings::EmbeddingTable,
    errors::{PTResult, PolytweetError},
};

/// Loading progress is logged every `PROGRESS_INTERVAL` words.
pub const PROGRESS_INTERVAL: usize = 100_000;

/// An embedding file selected for loading.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingFile {
    /// The file path.
    pub path: PathBuf,

    /// The language code the file name matched.
    pub language: String,

    /// The file's text encoding.
    pub text_encoding: TextEncoding,
}

/// List the files of `source` which belong to any of `languages`.
///
/// Files are sorted by name; and take their text encoding from `language_table`,
/// falling back to [`TextEncoding::default`] for unlisted languages.
pub fn list_embedding_files<L: AsRef<str>>(
    source: &EmbeddingSource,
    language_table: &LanguageTable,
    languages: &[L],
) -> PTResult<Vec<EmbeddingFile>> {
    if !source.dir.is_dir() {
        return Err(PolytweetError::EmbeddingDirNotFound {
            path: source.dir.clone(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&source.dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(language) = source.file_language(&name.to_string_lossy(), languages) else {
            continue;
        };

        files.push(EmbeddingFile {
            path: entry.path(),
            language: language.to_string(),
            text_encoding: language_table
                .get(language)
                .map(|spec| spec.text_encoding)
                .unwrap_or_default(),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Load and merge the `languages` files of the named embedding source.
///
/// Later files replace the vectors of words already loaded.
pub fn load_embeddings<L: AsRef<str>>(
    config: &PolytweetConfig,
    source_name: &str,
    languages: &[L],
) -> PTResult<EmbeddingTable> {
    let source = config.embedding_source(source_name)?;
    load_embedding_source(source, &config.languages, languages)
}

/// Load and merge the `languages` files of an embedding source.
///
/// Later files replace the vectors of words already loaded.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn load_embedding_source<L: AsRef<str>>(
    source: &EmbeddingSource,
    language_table: &LanguageTable,
    languages: &[L],
) -> PTResult<EmbeddingTable> {
    let files = list_embedding_files(source, language_table, languages)?;
    if files.is_empty() {
        log::warn!(
            "no embedding files for {:?} in {}",
            languages.iter().map(AsRef::as_ref).collect::<Vec<_>>(),
            source.dir.display()
        );
    }

    let reader = EmbeddingReader::from_source(source);
    let mut table: Option<EmbeddingTable> = None;
    for file in &files {
        log::info!("Loading {}", file.path.display());
        let stream = BufReader::new(File::open(&file.path)?);
        reader.read_into(stream, &file.path, file.text_encoding, &mut table)?;
    }

    let table = table.unwrap_or_else(|| EmbeddingTable::new(0));
    log::info!(
        "Loaded pre-trained embeddings of dimension: {}, size: {}, lower: {}",
        table.dim(),
        table.declared_words(),
        reader.lower
    );
    Ok(table)
}

/// Parser for the embedding file format.
///
/// ```terminaloutput
/// {WORD_COUNT} {DIM}
/// {WORD}{SEP}{V_1}{SEP}...{SEP}{V_DIM}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingReader {
    /// The field separator of word lines.
    pub separator: String,

    /// Whether to lower-case words.
    pub lower: bool,
}

impl Default for EmbeddingReader {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            lower: false,
        }
    }
}

impl EmbeddingReader {
    /// Build a reader with the separator and lower flag of a source.
    pub fn from_source(source: &EmbeddingSource) -> Self {
        Self {
            separator: source.separator.clone(),
            lower: source.lower,
        }
    }

    /// Read one embedding file into a new table.
    ///
    /// # Arguments
    /// * `reader` - the file's line reader.
    /// * `source` - the file's path; used in error reports.
    /// * `encoding` - the file's text encoding.
    pub fn read<R: BufRead>(
        &self,
        reader: R,
        source: &Path,
        encoding: TextEncoding,
    ) -> PTResult<EmbeddingTable> {
        let mut table = None;
        self.read_into(reader, source, encoding, &mut table)?;
        Ok(table.unwrap_or_else(|| EmbeddingTable::new(0)))
    }

    /// Read one embedding file, merging it into `table`.
    ///
    /// When `table` is `None`, a table of the file's declared dimension is created.
    ///
    /// # Arguments
    /// * `reader` - the file's line reader.
    /// * `source` - the file's path; used in error reports.
    /// * `encoding` - the file's text encoding.
    /// * `table` - the table to extend.
    ///
    /// ## Errors
    /// * [`PolytweetError::Parse`] - a malformed header, or a word line whose
    ///   vector length differs from the declared dimension.
    /// * [`PolytweetError::EmbeddingDimensionMismatch`] - the declared
    ///   dimension differs from `table`'s.
    pub fn read_into<R: BufRead>(
        &self,
        reader: R,
        source: &Path,
        encoding: TextEncoding,
        table: &mut Option<EmbeddingTable>,
    ) -> PTResult<()> {
        let mut lines = reader.split(b'\n');

        let header = match lines.next() {
            Some(line) => encoding.decode(strip_cr(line?))?,
            None => {
                return Err(PolytweetError::Parse(format!(
                    "{}: missing embedding header",
                    source.display()
                )));
            }
        };
        let (num_words, dim) = parse_header(&header).ok_or_else(|| {
            PolytweetError::Parse(format!("{}: bad header {header:?}", source.display()))
        })?;

        if let Some(existing) = table.as_ref()
            && existing.dim() != dim
            && !existing.is_empty()
        {
            return Err(PolytweetError::EmbeddingDimensionMismatch {
                path: source.to_path_buf(),
                expected: existing.dim(),
                found: dim,
            });
        }
        let table = table.get_or_insert_with(|| EmbeddingTable::new(dim));
        table.set_dim(dim);
        table.add_declared_words(num_words);

        for (idx, line) in lines.enumerate() {
            if (idx + 1) % PROGRESS_INTERVAL == 0 {
                log::info!("Loading {}/{} words", idx + 1, num_words);
            }

            let line = encoding.decode(strip_cr(line?))?;
            let (word, vector) = self.parse_word_line(&line, dim).map_err(|msg| {
                PolytweetError::Parse(format!("{}:{}: {msg}", source.display(), idx + 2))
            })?;

            table.insert(word, vector);
        }

        Ok(())
    }

    fn parse_word_line(
        &self,
        line: &str,
        dim: usize,
    ) -> Result<(String, Vec<f32>), String> {
        let mut fields: Vec<&str> = line.split(self.separator.as_str()).collect();
        // Tolerate a trailing separator.
        if fields.len() > 1 && fields.last() == Some(&"") {
            fields.pop();
        }

        let (word, components) = fields
            .split_first()
            .ok_or_else(|| "empty line".to_string())?;
        if components.len() != dim {
            return Err(format!(
                "expected {dim} components for {word:?}, found {}",
                components.len()
            ));
        }

        let vector = components
            .iter()
            .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{c:?}: {e}")))
            .collect::<Result<Vec<_>, _>>()?;

        let word = if self.lower {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        Ok((word, vector))
    }
}

fn strip_cr(mut line: Vec<u8>) -> Vec<u8> {
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    line
}

fn parse_header(header: &str) -> Option<(usize, usize)> {
    let mut parts = header.split_whitespace();
    let num_words = parts.next()?.parse().ok()?;
    let dim = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((num_words, dim))
}
