//! # Task Label Maps

use crate::{
    config::{TaskKind, TaskSpec},
    errors::{PTResult, PolytweetError},
    types::{IdType, PTHashMap},
};

/// `{ String -> usize }` dense label map for one task.
///
/// Ids are `0..len()` with no gaps.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TaskLabelMap {
    /// The map of labels to ids.
    label_map: PTHashMap<String, usize>,

    /// The labels, in id order.
    labels: Vec<String>,
}

impl TaskLabelMap {
    /// Build a map from labels listed in id order.
    ///
    /// Duplicate labels are a [`PolytweetError::VocabConflict`].
    pub fn from_labels<I, S>(labels: I) -> PTResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::default();
        for label in labels {
            let label = label.as_ref();
            if map.contains(label) {
                return Err(PolytweetError::VocabConflict(format!(
                    "duplicate label {label:?}"
                )));
            }
            map.register(label);
        }
        Ok(map)
    }

    /// Get the number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Is the map empty?
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Is `label` in the map?
    pub fn contains(
        &self,
        label: &str,
    ) -> bool {
        self.label_map.contains_key(label)
    }

    /// Get the id of `label`, if present.
    pub fn get(
        &self,
        label: &str,
    ) -> Option<usize> {
        self.label_map.get(label).copied()
    }

    /// Get the label for `id`, if any.
    pub fn label(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// The labels, in id order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the id of `label`, assigning the next id if it is new.
    pub fn register(
        &mut self,
        label: &str,
    ) -> usize {
        if let Some(id) = self.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.label_map.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }
}

/// A task's resolved kind and label map.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskLabels {
    /// The task name.
    pub name: String,

    /// The task kind.
    pub kind: TaskKind,

    /// The task's label map.
    pub label_map: TaskLabelMap,
}

impl TaskLabels {
    /// Create a new entry.
    pub fn new<S: Into<String>>(
        name: S,
        kind: TaskKind,
        label_map: TaskLabelMap,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            label_map,
        }
    }

    fn label_id(
        &self,
        label: &str,
    ) -> PTResult<usize> {
        self.label_map
            .get(label)
            .ok_or_else(|| PolytweetError::UnknownLabel {
                task: self.name.clone(),
                label: label.to_string(),
            })
    }

    /// Encode a raw label field.
    ///
    /// * [`TaskKind::SingleLabel`] - `[label_id]`.
    /// * [`TaskKind::MultiLabel`] - a multi-hot vector of `label_map.len()`.
    pub fn encode<T: IdType>(
        &self,
        raw: &str,
    ) -> PTResult<Vec<T>> {
        match self.kind {
            TaskKind::SingleLabel => {
                let id = self.label_id(raw)?;
                Ok(vec![T::from_usize(id).ok_or(
                    PolytweetError::VocabSizeOverflow {
                        size: self.label_map.len(),
                    },
                )?])
            }
            TaskKind::MultiLabel => {
                let mut hot = vec![T::zero(); self.label_map.len()];
                for label in self.kind.split_labels(raw) {
                    hot[self.label_id(label)?] = T::one();
                }
                Ok(hot)
            }
        }
    }

    /// Decode an encoded label vector back to its labels.
    ///
    /// Ids with no label are skipped.
    pub fn decode<T: IdType>(
        &self,
        encoded: &[T],
    ) -> Vec<&str> {
        match self.kind {
            TaskKind::SingleLabel => encoded
                .iter()
                .filter_map(|id| self.label_map.label(id.to_usize()?))
                .collect(),
            TaskKind::MultiLabel => encoded
                .iter()
                .enumerate()
                .filter(|(_, hot)| **hot == T::one())
                .filter_map(|(idx, _)| self.label_map.label(idx))
                .collect(),
        }
    }
}

/// The ordered set of tasks known to an encoder.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct LabelSpace {
    tasks: Vec<TaskLabels>,
}

impl LabelSpace {
    /// Build from task specs; resolving each task's kind once.
    pub fn from_specs<'a, I>(specs: I) -> PTResult<Self>
    where
        I: IntoIterator<Item = &'a TaskSpec>,
    {
        let mut space = Self::default();
        for spec in specs {
            space.insert(TaskLabels::new(
                spec.name.clone(),
                spec.kind(),
                TaskLabelMap::from_labels(&spec.labels)?,
            ));
        }
        Ok(space)
    }

    /// Add or replace a task.
    pub fn insert(
        &mut self,
        task: TaskLabels,
    ) {
        match self.tasks.iter_mut().find(|t| t.name == task.name) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Get the number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Is the space empty?
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the tasks.
    pub fn iter(&self) -> impl Iterator<Item = &TaskLabels> {
        self.tasks.iter()
    }

    /// Look up a task by name.
    pub fn task(
        &self,
        name: &str,
    ) -> PTResult<&TaskLabels> {
        self.tasks
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| PolytweetError::UnknownTask(name.to_string()))
    }

    /// Look up a task by name, for update.
    pub fn task_mut(
        &mut self,
        name: &str,
    ) -> PTResult<&mut TaskLabels> {
        self.tasks
            .iter_mut()
            .find(|t| t.name == name)
            .ok_or_else(|| PolytweetError::UnknownTask(name.to_string()))
    }

    /// Resolve a list of task names to their entries, in the given order.
    pub fn select<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> PTResult<Vec<&TaskLabels>> {
        names.iter().map(|name| self.task(name.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment() -> TaskLabels {
        TaskLabels::new(
            "sentiment",
            TaskKind::MultiLabel,
            TaskLabelMap::from_labels(["hateful", "normal", "offensive"]).unwrap(),
        )
    }

    fn directness() -> TaskLabels {
        TaskLabels::new(
            "directness",
            TaskKind::SingleLabel,
            TaskLabelMap::from_labels(["direct", "indirect"]).unwrap(),
        )
    }

    #[test]
    fn test_label_map() {
        let mut map = TaskLabelMap::from_labels(["a", "b"]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), Some(1));
        assert_eq!(map.label(0), Some("a"));
        assert_eq!(map.register("c"), 2);
        assert_eq!(map.register("a"), 0);
        assert_eq!(map.labels(), &["a", "b", "c"]);

        assert!(matches!(
            TaskLabelMap::from_labels(["a", "a"]),
            Err(PolytweetError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_encode_multi_label() {
        type T = u32;
        let task = sentiment();

        let hot: Vec<T> = task.encode("offensive_hateful").unwrap();
        assert_eq!(hot, vec![1, 0, 1]);
        assert_eq!(task.decode(&hot), vec!["hateful", "offensive"]);

        let hot: Vec<T> = task.encode("normal").unwrap();
        assert_eq!(hot.len(), task.label_map.len());
        assert_eq!(hot.iter().sum::<T>(), 1);

        // Repeated labels set the same position.
        let hot: Vec<T> = task.encode("normal_normal").unwrap();
        assert_eq!(hot, vec![0, 1, 0]);
    }

    #[test]
    fn test_encode_single_label() {
        type T = u16;
        let task = directness();

        let ids: Vec<T> = task.encode("indirect").unwrap();
        assert_eq!(ids, vec![1]);
        assert_eq!(task.decode(&ids), vec!["indirect"]);
    }

    #[test]
    fn test_unknown_label() {
        type T = u32;
        let err = sentiment().encode::<T>("hateful_sarcastic").unwrap_err();
        assert!(matches!(
            err,
            PolytweetError::UnknownLabel { task, label } if task == "sentiment" && label == "sarcastic"
        ));

        assert!(directness().encode::<T>("").is_err());
    }

    #[test]
    fn test_label_space() {
        let specs = TaskSpec::mlma();
        let space = LabelSpace::from_specs(&specs).unwrap();
        assert_eq!(space.len(), specs.len());
        assert_eq!(
            space.task("annotator_sentiment").unwrap().kind,
            TaskKind::MultiLabel
        );

        let selected = space.select(&["target", "sentiment"]).unwrap();
        assert_eq!(selected[0].name, "target");
        assert_eq!(selected[1].name, "sentiment");

        assert!(matches!(
            space.select(&["sarcasm"]),
            Err(PolytweetError::UnknownTask(name)) if name == "sarcasm"
        ));
    }
}
