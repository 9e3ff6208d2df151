//! # Score Reports
//!
//! Reports are CSV files under a log directory, one file per run shape:
//! ```terminaloutput
//! {log_dir}/STSL/{lang}_{task}.csv
//! {log_dir}/STML/{task}.csv
//! {log_dir}/MTSL/{lang}.csv
//! {log_dir}/MTML/log.csv
//! ```
//!
//! Rows are appended; the header row is written only into an empty file.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{PTResult, PolytweetError},
    metrics::ScoreMap,
};

/// The report field delimiter.
pub const REPORT_DELIMITER: u8 = b',';

/// The report quote character.
pub const REPORT_QUOTE: u8 = b'|';

/// The multi-task, multi-language report file name.
pub const MTML_FILE_NAME: &str = "log.csv";

/// The shape of a run; which selects its report directory.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
pub enum ReportLayout {
    /// One task, one language.
    #[strum(serialize = "STSL")]
    SingleTaskSingleLanguage,

    /// One task, several languages.
    #[strum(serialize = "STML")]
    SingleTaskMultiLanguage,

    /// Several tasks, one language.
    #[strum(serialize = "MTSL")]
    MultiTaskSingleLanguage,

    /// Several tasks, several languages.
    #[strum(serialize = "MTML")]
    MultiTaskMultiLanguage,
}

impl ReportLayout {
    /// Select the layout of a run.
    pub fn select<S: AsRef<str>, L: AsRef<str>>(
        task_names: &[S],
        languages: &[L],
    ) -> Self {
        match (task_names.len() == 1, languages.len() == 1) {
            (true, true) => Self::SingleTaskSingleLanguage,
            (true, false) => Self::SingleTaskMultiLanguage,
            (false, true) => Self::MultiTaskSingleLanguage,
            (false, false) => Self::MultiTaskMultiLanguage,
        }
    }

    /// Get the report path of a run under `log_dir`.
    pub fn path<P: AsRef<Path>, S: AsRef<str>, L: AsRef<str>>(
        log_dir: P,
        task_names: &[S],
        languages: &[L],
    ) -> PathBuf {
        let layout = Self::select(task_names, languages);
        let file_name = match (task_names, languages) {
            ([task], [lang]) => format!("{}_{}.csv", lang.as_ref(), task.as_ref()),
            ([task], _) => format!("{}.csv", task.as_ref()),
            (_, [lang]) => format!("{}.csv", lang.as_ref()),
            _ => MTML_FILE_NAME.to_string(),
        };
        log_dir.as_ref().join(layout.to_string()).join(file_name)
    }
}

/// A per-epoch train/dev snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FitRecord<'a> {
    /// The epoch number.
    pub epoch: usize,

    /// The training languages.
    pub languages: &'a [String],

    /// The evaluation language.
    pub test_lang: &'a str,

    /// The tasks of the run, in column order.
    pub task_names: &'a [String],

    /// Training scores.
    pub train: &'a ScoreMap,

    /// Development scores.
    pub dev: &'a ScoreMap,
}

/// An end-of-run train/dev/test summary, with its run parameters.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRecord<'a> {
    /// The embedding source name.
    pub embeds: &'a str,

    /// The training languages.
    pub languages: &'a [String],

    /// The evaluation language.
    pub test_lang: &'a str,

    /// The tasks of the run, in column order.
    pub task_names: &'a [String],

    /// The hidden dimension.
    pub h_dim: usize,

    /// The cross-stitch initialization scheme.
    pub cross_stitch_init: &'a str,

    /// The constraint weight.
    pub constraint_weight: f64,

    /// The sigma parameter.
    pub sigma: f64,

    /// The optimizer name.
    pub optimizer: &'a str,

    /// Training scores.
    pub train: &'a ScoreMap,

    /// Development scores.
    pub dev: &'a ScoreMap,

    /// Test scores.
    pub test: &'a ScoreMap,
}

/// Append a per-epoch row to the run's report.
///
/// ## Returns
/// The report path.
///
/// ## Errors
/// * [`PolytweetError::MissingScore`] - a task of `record` has no score;
///   nothing is written.
pub fn log_fit<P: AsRef<Path>>(
    log_dir: P,
    record: &FitRecord,
) -> PTResult<PathBuf> {
    let splits = [("train", record.train), ("dev", record.dev)];

    let mut header = vec!["epoch".to_string(), "test_lang".to_string()];
    header.extend(score_columns(record.task_names, &splits));

    let mut row = vec![record.epoch.to_string(), record.test_lang.to_string()];
    row.extend(score_cells(record.task_names, &splits)?);

    let path = ReportLayout::path(log_dir, record.task_names, record.languages);
    append_report(&path, &header, &row)?;
    Ok(path)
}

/// Append an end-of-run row to the run's report.
///
/// ## Returns
/// The report path.
///
/// ## Errors
/// * [`PolytweetError::MissingScore`] - a task of `record` has no score;
///   nothing is written.
pub fn log_score<P: AsRef<Path>>(
    log_dir: P,
    record: &ScoreRecord,
) -> PTResult<PathBuf> {
    let splits = [
        ("train", record.train),
        ("dev", record.dev),
        ("test", record.test),
    ];

    let mut header: Vec<String> = [
        "embeds",
        "test_lang",
        "h_dim",
        "cross_stitch_init",
        "constraint_weight",
        "sigma",
        "optimizer",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();
    header.extend(score_columns(record.task_names, &splits));

    let mut row = vec![
        record.embeds.to_string(),
        record.test_lang.to_string(),
        record.h_dim.to_string(),
        record.cross_stitch_init.to_string(),
        format_float(record.constraint_weight),
        format_float(record.sigma),
        record.optimizer.to_string(),
    ];
    row.extend(score_cells(record.task_names, &splits)?);

    let path = ReportLayout::path(log_dir, record.task_names, record.languages);
    append_report(&path, &header, &row)?;
    Ok(path)
}

fn score_columns(
    task_names: &[String],
    splits: &[(&'static str, &ScoreMap)],
) -> Vec<String> {
    let mut columns = Vec::with_capacity(task_names.len() * splits.len() * 2);
    for task in task_names {
        for (split, _) in splits {
            columns.push(format!("{task}-{split}-micro-f1"));
            columns.push(format!("{task}-{split}-macro-f1"));
        }
    }
    columns
}

fn score_cells(
    task_names: &[String],
    splits: &[(&'static str, &ScoreMap)],
) -> PTResult<Vec<String>> {
    let mut cells = Vec::with_capacity(task_names.len() * splits.len() * 2);
    for task in task_names {
        for &(split, scores) in splits {
            let score = scores.get(task).ok_or_else(|| PolytweetError::MissingScore {
                split,
                task: task.clone(),
            })?;
            cells.push(format_float(score.micro_f1));
            cells.push(format_float(score.macro_f1));
        }
    }
    Ok(cells)
}

/// Floats always carry a decimal point; `1.0` rather than `1`.
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Append `row` to `path`; preceded by `header` when the file is empty.
///
/// Both rows go out in a single write.
fn append_report(
    path: &Path,
    header: &[String],
    row: &[String],
) -> PTResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(REPORT_DELIMITER)
        .quote(REPORT_QUOTE)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    let fresh = file.metadata()?.len() == 0;
    if fresh {
        writer.write_record(header)?;
    }
    writer.write_record(row)?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    file.write_all(&bytes)?;

    log::debug!(
        "appended report row to {}{}",
        path.display(),
        if fresh { " (with header)" } else { "" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::TaskScore;

    fn scores(entries: &[(&str, f64, f64)]) -> ScoreMap {
        entries
            .iter()
            .map(|&(task, micro, macro_)| (task.to_string(), TaskScore::new(micro, macro_)))
            .collect()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_layout_paths() {
        let en = strings(&["en"]);
        let en_fr = strings(&["en", "fr"]);
        let one = strings(&["target"]);
        let two = strings(&["target", "group"]);

        assert_eq!(
            ReportLayout::select(&one, &en),
            ReportLayout::SingleTaskSingleLanguage
        );
        assert_eq!(
            ReportLayout::select(&two, &en_fr),
            ReportLayout::MultiTaskMultiLanguage
        );

        let log_dir = Path::new("logs");
        assert_eq!(
            ReportLayout::path(log_dir, &one, &en),
            log_dir.join("STSL").join("en_target.csv")
        );
        assert_eq!(
            ReportLayout::path(log_dir, &one, &en_fr),
            log_dir.join("STML").join("target.csv")
        );
        assert_eq!(
            ReportLayout::path(log_dir, &two, &en),
            log_dir.join("MTSL").join("en.csv")
        );
        assert_eq!(
            ReportLayout::path(log_dir, &two, &en_fr),
            log_dir.join("MTML").join("log.csv")
        );
    }

    #[test]
    fn test_log_fit_header_once() {
        let languages = strings(&["en"]);
        let task_names = strings(&["target"]);
        let train = scores(&[("target", 0.5, 0.25)]);
        let dev = scores(&[("target", 1.0, 0.75)]);

        tempdir::TempDir::new("report_test")
            .and_then(|dir| {
                let mut record = FitRecord {
                    epoch: 1,
                    languages: &languages,
                    test_lang: "en",
                    task_names: &task_names,
                    train: &train,
                    dev: &dev,
                };

                let path = log_fit(dir.path(), &record).unwrap();
                assert_eq!(path, dir.path().join("STSL").join("en_target.csv"));
                assert_eq!(
                    fs::read_to_string(&path)?,
                    "epoch,test_lang,target-train-micro-f1,target-train-macro-f1,\
                     target-dev-micro-f1,target-dev-macro-f1\r\n\
                     1,en,0.5,0.25,1.0,0.75\r\n"
                );

                record.epoch = 2;
                log_fit(dir.path(), &record).unwrap();

                let content = fs::read_to_string(&path)?;
                let lines: Vec<&str> = content.lines().collect();
                assert_eq!(lines.len(), 3);
                assert!(lines[0].starts_with("epoch,"));
                assert_eq!(lines[2], "2,en,0.5,0.25,1.0,0.75");
                assert_eq!(content.matches("epoch").count(), 1);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_log_fit_empty_file_gets_header() {
        let languages = strings(&["en"]);
        let task_names = strings(&["target"]);
        let train = scores(&[("target", 0.5, 0.25)]);

        tempdir::TempDir::new("report_test")
            .and_then(|dir| {
                let path = ReportLayout::path(dir.path(), &task_names, &languages);
                fs::create_dir_all(dir.path().join("STSL"))?;
                fs::write(&path, "")?;

                let record = FitRecord {
                    epoch: 1,
                    languages: &languages,
                    test_lang: "en",
                    task_names: &task_names,
                    train: &train,
                    dev: &train,
                };
                assert_eq!(log_fit(dir.path(), &record).unwrap(), path);

                let content = fs::read_to_string(&path)?;
                let lines: Vec<&str> = content.lines().collect();
                assert_eq!(lines.len(), 2);
                assert!(lines[0].starts_with("epoch,test_lang,"));
                assert_eq!(lines[1], "1,en,0.5,0.25,0.5,0.25");

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_log_fit_multi_task() {
        let languages = strings(&["en", "fr"]);
        let task_names = strings(&["target", "group"]);
        let train = scores(&[("target", 0.5, 0.5), ("group", 0.25, 0.25)]);
        let dev = scores(&[("target", 0.75, 0.75), ("group", 1.0, 1.0)]);

        tempdir::TempDir::new("report_test")
            .and_then(|dir| {
                let record = FitRecord {
                    epoch: 3,
                    languages: &languages,
                    test_lang: "fr",
                    task_names: &task_names,
                    train: &train,
                    dev: &dev,
                };

                let path = log_fit(dir.path(), &record).unwrap();
                assert_eq!(path, dir.path().join("MTML").join("log.csv"));

                let content = fs::read_to_string(&path)?;
                let lines: Vec<&str> = content.lines().collect();
                assert_eq!(
                    lines[0],
                    "epoch,test_lang,\
                     target-train-micro-f1,target-train-macro-f1,\
                     target-dev-micro-f1,target-dev-macro-f1,\
                     group-train-micro-f1,group-train-macro-f1,\
                     group-dev-micro-f1,group-dev-macro-f1"
                );
                assert_eq!(lines[1], "3,fr,0.5,0.5,0.75,0.75,0.25,0.25,1.0,1.0");

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_log_score() {
        let languages = strings(&["en"]);
        let task_names = strings(&["group", "target"]);
        let split = scores(&[("group", 0.5, 0.5), ("target", 0.25, 0.125)]);

        tempdir::TempDir::new("report_test")
            .and_then(|dir| {
                let record = ScoreRecord {
                    embeds: "fasttext",
                    languages: &languages,
                    test_lang: "en",
                    task_names: &task_names,
                    h_dim: 100,
                    cross_stitch_init: "imbalanced,0.9",
                    constraint_weight: 0.0,
                    sigma: 0.1,
                    optimizer: "sgd",
                    train: &split,
                    dev: &split,
                    test: &split,
                };

                let path = log_score(dir.path(), &record).unwrap();
                assert_eq!(path, dir.path().join("MTSL").join("en.csv"));
                log_score(dir.path(), &record).unwrap();

                let content = fs::read_to_string(&path)?;
                let lines: Vec<&str> = content.lines().collect();
                assert_eq!(lines.len(), 3);

                let header: Vec<&str> = lines[0].split(',').collect();
                assert_eq!(header.len(), 7 + 2 * 6);
                assert_eq!(
                    &header[..8],
                    &[
                        "embeds",
                        "test_lang",
                        "h_dim",
                        "cross_stitch_init",
                        "constraint_weight",
                        "sigma",
                        "optimizer",
                        "group-train-micro-f1",
                    ]
                );
                assert_eq!(header[18], "target-test-macro-f1");

                assert_eq!(
                    lines[1],
                    "fasttext,en,100,|imbalanced,0.9|,0.0,0.1,sgd,\
                     0.5,0.5,0.5,0.5,0.5,0.5,\
                     0.25,0.125,0.25,0.125,0.25,0.125"
                );
                assert_eq!(lines[1], lines[2]);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_score() {
        let languages = strings(&["en", "fr"]);
        let task_names = strings(&["target"]);
        let train = scores(&[("target", 0.5, 0.5)]);
        let dev = ScoreMap::new();

        tempdir::TempDir::new("report_test")
            .and_then(|dir| {
                let record = FitRecord {
                    epoch: 1,
                    languages: &languages,
                    test_lang: "en",
                    task_names: &task_names,
                    train: &train,
                    dev: &dev,
                };

                let err = log_fit(dir.path(), &record).unwrap_err();
                assert!(matches!(
                    err,
                    PolytweetError::MissingScore { split: "dev", ref task } if task == "target"
                ));
                assert!(!dir.path().join("STML").exists());

                Ok(())
            })
            .unwrap();
    }
}
