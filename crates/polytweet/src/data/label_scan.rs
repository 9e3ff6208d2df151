//! # Label Space Scanning
//!
//! Builds a [`LabelSpace`] from the labels which actually occur in a
//! training corpus, rather than from configured label enumerations.

use std::path::Path;

use crate::{
    config::PolytweetConfig,
    data::records::{CorpusRecord, language_data_file, load_records_path},
    errors::PTResult,
    vocab::{LabelSpace, TaskLabelMap, TaskLabels},
};

/// Register every label of `records` into `tasks`.
///
/// `records[i].fields` must be ordered as `tasks`.
/// Labels are registered in first-seen order.
pub fn observe_labels(
    tasks: &mut [TaskLabels],
    records: &[CorpusRecord],
) {
    for record in records {
        for (task, raw) in tasks.iter_mut().zip(record.fields.iter()) {
            for label in task.kind.split_labels(raw) {
                task.label_map.register(label);
            }
        }
    }
}

/// Scan the data of `languages` and build a label space over `task_names`.
///
/// Task kinds come from `config.tasks`.
pub fn scan_label_space<P, L, S>(
    config: &PolytweetConfig,
    data_dir: P,
    languages: &[L],
    task_names: &[S],
) -> PTResult<LabelSpace>
where
    P: AsRef<Path>,
    L: AsRef<str>,
    S: AsRef<str>,
{
    let mut tasks = task_names
        .iter()
        .map(|name| {
            let spec = config.task(name.as_ref())?;
            Ok(TaskLabels::new(
                spec.name.clone(),
                spec.kind(),
                TaskLabelMap::default(),
            ))
        })
        .collect::<PTResult<Vec<_>>>()?;
    let task_columns: Vec<String> = tasks.iter().map(|t| t.name.clone()).collect();

    for language in languages {
        let spec = config.languages.get(language.as_ref())?;
        let path = language_data_file(data_dir.as_ref(), spec)?;
        let records = load_records_path(&path, &config.sentence_column, &task_columns)?;
        observe_labels(&mut tasks, &records);
    }

    let mut space = LabelSpace::default();
    for task in tasks {
        log::debug!("{}: {} labels", task.name, task.label_map.len());
        space.insert(task);
    }
    Ok(space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaskKind;

    #[test]
    fn test_observe_labels() {
        let mut tasks = vec![
            TaskLabels::new("sentiment", TaskKind::MultiLabel, TaskLabelMap::default()),
            TaskLabels::new("target", TaskKind::SingleLabel, TaskLabelMap::default()),
        ];

        let records = vec![
            CorpusRecord {
                sentence: "a".to_string(),
                fields: vec!["offensive_hateful".to_string(), "origin".to_string()],
            },
            CorpusRecord {
                sentence: "b".to_string(),
                fields: vec!["normal".to_string(), "sexual_orientation".to_string()],
            },
        ];

        observe_labels(&mut tasks, &records);

        assert_eq!(
            tasks[0].label_map.labels(),
            &["offensive", "hateful", "normal"]
        );
        assert_eq!(
            tasks[1].label_map.labels(),
            &["origin", "sexual_orientation"]
        );
    }
}
