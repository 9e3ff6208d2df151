//! # Language Data Records

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    config::LanguageSpec,
    errors::{PTResult, PolytweetError},
};

/// One row of a language data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusRecord {
    /// The free-text field.
    pub sentence: String,

    /// The raw task fields, in the order the task columns were requested.
    pub fields: Vec<String>,
}

/// Resolve the data file of a language.
///
/// The file is the single regular file in `{data_dir}/{spec.dir_name}`.
///
/// ## Errors
/// * [`PolytweetError::LanguageDirNotFound`] - the directory does not exist.
/// * [`PolytweetError::DataFileNotFound`] - the directory has no files.
/// * [`PolytweetError::AmbiguousDataFile`] - the directory has several files.
pub fn language_data_file<P: AsRef<Path>>(
    data_dir: P,
    spec: &LanguageSpec,
) -> PTResult<PathBuf> {
    let language_path = data_dir.as_ref().join(&spec.dir_name);
    if !language_path.is_dir() {
        return Err(PolytweetError::LanguageDirNotFound {
            path: language_path,
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(&language_path)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    match files.len() {
        0 => Err(PolytweetError::DataFileNotFound {
            path: language_path,
        }),
        1 => Ok(files.remove(0)),
        count => Err(PolytweetError::AmbiguousDataFile {
            path: language_path,
            count,
        }),
    }
}

/// Load every record of a CSV data file.
///
/// # Arguments
/// * `path` - the CSV file; the first row holds the column names.
/// * `sentence_column` - the free-text column.
/// * `task_columns` - the task columns, in output order.
pub fn load_records_path<P, S>(
    path: P,
    sentence_column: &str,
    task_columns: &[S],
) -> PTResult<Vec<CorpusRecord>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    read_records(
        fs::File::open(path)?,
        path,
        sentence_column,
        task_columns,
    )
}

/// Read every record of a CSV stream.
///
/// # Arguments
/// * `reader` - the CSV stream; the first row holds the column names.
/// * `source` - the stream's path; used in error reports.
/// * `sentence_column` - the free-text column.
/// * `task_columns` - the task columns, in output order.
pub fn read_records<R, S>(
    reader: R,
    source: &Path,
    sentence_column: &str,
    task_columns: &[S],
) -> PTResult<Vec<CorpusRecord>>
where
    R: Read,
    S: AsRef<str>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> PTResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PolytweetError::MissingField {
                field: name.to_string(),
                path: source.to_path_buf(),
            })
    };

    let sentence_idx = column(sentence_column)?;
    let task_idxs = task_columns
        .iter()
        .map(|name| column(name.as_ref()))
        .collect::<PTResult<Vec<_>>>()?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let field = |idx: usize| row.get(idx).unwrap_or_default().to_string();

        records.push(CorpusRecord {
            sentence: field(sentence_idx),
            fields: task_idxs.iter().map(|&idx| field(idx)).collect(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextEncoding;

    const DATA: &str = "\
HITId,tweet,sentiment,directness
1,\"hello, world\",normal,direct
2,you are awful,hateful_offensive,indirect
";

    #[test]
    fn test_read_records() {
        let records = read_records(
            DATA.as_bytes(),
            Path::new("en.csv"),
            "tweet",
            &["directness", "sentiment"],
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                CorpusRecord {
                    sentence: "hello, world".to_string(),
                    fields: vec!["direct".to_string(), "normal".to_string()],
                },
                CorpusRecord {
                    sentence: "you are awful".to_string(),
                    fields: vec!["indirect".to_string(), "hateful_offensive".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_missing_field() {
        let err = read_records(DATA.as_bytes(), Path::new("en.csv"), "tweet", &["target"])
            .unwrap_err();
        assert!(matches!(
            err,
            PolytweetError::MissingField { field, .. } if field == "target"
        ));

        let err = read_records::<_, &str>(DATA.as_bytes(), Path::new("en.csv"), "text", &[])
            .unwrap_err();
        assert!(matches!(err, PolytweetError::MissingField { .. }));
    }

    #[test]
    fn test_language_data_file() {
        let spec = LanguageSpec::new("en", "english", TextEncoding::Utf8Lossy);

        tempdir::TempDir::new("records_test")
            .and_then(|dir| {
                assert!(matches!(
                    language_data_file(dir.path(), &spec),
                    Err(PolytweetError::LanguageDirNotFound { .. })
                ));

                let lang_dir = dir.path().join("english");
                fs::create_dir(&lang_dir)?;
                assert!(matches!(
                    language_data_file(dir.path(), &spec),
                    Err(PolytweetError::DataFileNotFound { .. })
                ));

                fs::write(lang_dir.join("en_dataset.csv"), DATA)?;
                assert_eq!(
                    language_data_file(dir.path(), &spec).unwrap(),
                    lang_dir.join("en_dataset.csv")
                );

                fs::write(lang_dir.join("extra.csv"), DATA)?;
                assert!(matches!(
                    language_data_file(dir.path(), &spec),
                    Err(PolytweetError::AmbiguousDataFile { count: 2, .. })
                ));

                Ok(())
            })
            .unwrap();
    }
}
