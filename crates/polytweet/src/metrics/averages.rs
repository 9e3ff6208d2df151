//! # Score Averages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{PTResult, PolytweetError};

/// The F1 scores of one task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskScore {
    /// Micro-averaged F1.
    pub micro_f1: f64,

    /// Macro-averaged F1.
    pub macro_f1: f64,
}

impl TaskScore {
    /// Build a score from micro and macro F1.
    pub fn new(
        micro_f1: f64,
        macro_f1: f64,
    ) -> Self {
        Self { micro_f1, macro_f1 }
    }
}

/// `{ task -> score }` for one split.
pub type ScoreMap = BTreeMap<String, TaskScore>;

/// Unweighted mean of every task's micro and macro F1.
///
/// ## Errors
/// * [`PolytweetError::EmptyScores`] - `scores` is empty.
pub fn average_by_task(scores: &ScoreMap) -> PTResult<f64> {
    if scores.is_empty() {
        return Err(PolytweetError::EmptyScores);
    }

    let total: f64 = scores
        .values()
        .map(|score| score.micro_f1 + score.macro_f1)
        .sum();
    Ok(total / (2 * scores.len()) as f64)
}

/// Weighted mean of per-language scores, weighted by `counts[i] / total`.
///
/// `total` is used as given; it is not checked against the sum of `counts`.
/// Extra entries of the longer slice are ignored.
pub fn average_by_lang(
    scores: &[f64],
    counts: &[usize],
    total: usize,
) -> f64 {
    scores
        .iter()
        .zip(counts)
        .map(|(&score, &count)| (count as f64 / total as f64) * score)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(
        a: f64,
        b: f64,
    ) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_average_by_task() {
        let scores: ScoreMap = [
            ("t1".to_string(), TaskScore::new(0.8, 0.6)),
            ("t2".to_string(), TaskScore::new(0.4, 0.2)),
        ]
        .into_iter()
        .collect();

        assert!(approx_eq(average_by_task(&scores).unwrap(), 0.5));
    }

    #[test]
    fn test_average_by_task_empty() {
        assert!(matches!(
            average_by_task(&ScoreMap::new()),
            Err(PolytweetError::EmptyScores)
        ));
    }

    #[test]
    fn test_average_by_lang() {
        assert!(approx_eq(average_by_lang(&[0.9, 0.5], &[30, 10], 40), 0.80));
        assert!(approx_eq(average_by_lang(&[1.0, 0.0], &[3, 1], 4), 0.75));

        // The total is not checked against the counts.
        assert!(approx_eq(average_by_lang(&[1.0], &[1], 4), 0.25));
    }

    #[test]
    fn test_score_map_json() {
        let scores: ScoreMap = serde_json::from_str(
            r#"{"sentiment": {"micro_f1": 0.25, "macro_f1": 0.75}}"#,
        )
        .unwrap();
        assert_eq!(scores["sentiment"], TaskScore::new(0.25, 0.75));
    }
}
