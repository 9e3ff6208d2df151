use std::{error::Error, path::PathBuf};

use polytweet::metrics::{ScoreMap, average_by_lang, average_by_task};

use crate::logging::LogArgs;

/// Args for the average command.
#[derive(clap::Args, Debug)]
pub struct AverageArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// JSON file of `{task: {"micro_f1": .., "macro_f1": ..}}`.
    #[arg(long, conflicts_with = "lang_scores")]
    task_scores: Option<PathBuf>,

    /// Per-language `score:count` pairs.
    #[arg(long, value_delimiter = ',', value_parser = parse_lang_score)]
    lang_scores: Vec<(f64, usize)>,

    /// Total example count; defaults to the sum of the counts.
    #[arg(long, requires = "lang_scores")]
    total: Option<usize>,
}

impl AverageArgs {
    /// Run the average command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        self.logging.setup_logging(2)?;

        if let Some(path) = &self.task_scores {
            let scores: ScoreMap = serde_json::from_reader(std::fs::File::open(path)?)?;
            log::info!("averaging {} tasks from {}", scores.len(), path.display());
            println!("{}", average_by_task(&scores)?);
            return Ok(());
        }

        if self.lang_scores.is_empty() {
            return Err("either --task-scores or --lang-scores is required".into());
        }

        let (scores, counts): (Vec<f64>, Vec<usize>) = self.lang_scores.iter().copied().unzip();
        let total = self.total.unwrap_or_else(|| counts.iter().sum());
        println!("{}", average_by_lang(&scores, &counts, total));
        Ok(())
    }
}

fn parse_lang_score(value: &str) -> Result<(f64, usize), String> {
    let (score, count) = value
        .split_once(':')
        .ok_or_else(|| format!("expected score:count, found {value:?}"))?;
    let score = score
        .trim()
        .parse()
        .map_err(|e| format!("bad score {score:?}: {e}"))?;
    let count = count
        .trim()
        .parse()
        .map_err(|e| format!("bad count {count:?}: {e}"))?;
    Ok((score, count))
}
