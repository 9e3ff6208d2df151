//! # Task Configuration

use serde::{Deserialize, Serialize};

/// The delimiter joining the labels of a multi-label field.
pub const MULTI_LABEL_DELIMITER: char = '_';

/// The name fragment which marks a task as multi-label in legacy configs.
pub const LEGACY_MULTI_LABEL_MARKER: &str = "sentiment";

/// How a task's raw label field is encoded.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskKind {
    /// Exactly one label per example; encoded as `[label_id]`.
    SingleLabel,

    /// Zero or more [`MULTI_LABEL_DELIMITER`]-joined labels per example;
    /// encoded as a multi-hot vector over the task's labels.
    MultiLabel,
}

impl TaskKind {
    /// Infer the kind from a task name.
    ///
    /// Names containing [`LEGACY_MULTI_LABEL_MARKER`] are multi-label.
    pub fn infer_from_name(name: &str) -> Self {
        if name.contains(LEGACY_MULTI_LABEL_MARKER) {
            Self::MultiLabel
        } else {
            Self::SingleLabel
        }
    }

    /// Split a raw label field into its labels.
    pub fn split_labels<'a>(
        &self,
        raw: &'a str,
    ) -> Vec<&'a str> {
        match self {
            Self::SingleLabel => vec![raw],
            Self::MultiLabel => raw.split(MULTI_LABEL_DELIMITER).collect(),
        }
    }
}

/// A task and its label enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// The task name; also the name of the task's data column.
    pub name: String,

    /// The task kind; inferred from the name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskKind>,

    /// The labels, in id order.
    pub labels: Vec<String>,
}

impl TaskSpec {
    /// Create a new task spec.
    pub fn new<N, L, S>(
        name: N,
        kind: TaskKind,
        labels: L,
    ) -> Self
    where
        N: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: Some(kind),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The resolved task kind.
    pub fn kind(&self) -> TaskKind {
        self.kind
            .unwrap_or_else(|| TaskKind::infer_from_name(&self.name))
    }

    /// The five annotation tasks of the MLMA hate speech corpus.
    pub fn mlma() -> Vec<TaskSpec> {
        use TaskKind::*;
        vec![
            TaskSpec::new(
                "sentiment",
                MultiLabel,
                [
                    "abusive",
                    "disrespectful",
                    "fearful",
                    "hateful",
                    "normal",
                    "offensive",
                ],
            ),
            TaskSpec::new("directness", SingleLabel, ["direct", "indirect"]),
            TaskSpec::new(
                "annotator_sentiment",
                MultiLabel,
                [
                    "anger",
                    "confusion",
                    "disgust",
                    "fear",
                    "indifference",
                    "sadness",
                    "shock",
                ],
            ),
            TaskSpec::new(
                "target",
                SingleLabel,
                [
                    "disability",
                    "gender",
                    "origin",
                    "other",
                    "religion",
                    "sexual_orientation",
                ],
            ),
            TaskSpec::new(
                "group",
                SingleLabel,
                [
                    "african_descent",
                    "arabs",
                    "asians",
                    "christian",
                    "gay",
                    "hispanics",
                    "immigrants",
                    "indian/hindu",
                    "individual",
                    "jews",
                    "left_wing_people",
                    "muslims",
                    "other",
                    "refugees",
                    "special_needs",
                    "women",
                ],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_infer_from_name() {
        assert_eq!(TaskKind::infer_from_name("sentiment"), TaskKind::MultiLabel);
        assert_eq!(
            TaskKind::infer_from_name("annotator_sentiment"),
            TaskKind::MultiLabel
        );
        assert_eq!(TaskKind::infer_from_name("target"), TaskKind::SingleLabel);
    }

    #[test]
    fn test_split_labels() {
        assert_eq!(
            TaskKind::MultiLabel.split_labels("hateful_normal"),
            vec!["hateful", "normal"]
        );
        assert_eq!(
            TaskKind::SingleLabel.split_labels("sexual_orientation"),
            vec!["sexual_orientation"]
        );
    }

    #[test]
    fn test_task_kind_names() {
        assert_eq!(
            TaskKind::from_str("multi_label").unwrap(),
            TaskKind::MultiLabel
        );
        assert_eq!(TaskKind::SingleLabel.to_string(), "single_label");
    }

    #[test]
    fn test_spec_kind_resolution() {
        let spec: TaskSpec =
            serde_json::from_str(r#"{"name": "sentiment", "labels": ["a", "b"]}"#).unwrap();
        assert_eq!(spec.kind, None);
        assert_eq!(spec.kind(), TaskKind::MultiLabel);

        let spec: TaskSpec = serde_json::from_str(
            r#"{"name": "sentiment", "kind": "single_label", "labels": ["a"]}"#,
        )
        .unwrap();
        assert_eq!(spec.kind(), TaskKind::SingleLabel);
    }

    #[test]
    fn test_mlma_tasks() {
        let tasks = TaskSpec::mlma();
        assert_eq!(tasks.len(), 5);
        for task in &tasks {
            assert_eq!(task.kind(), TaskKind::infer_from_name(&task.name));
        }
    }
}
