use std::{error::Error, path::PathBuf};

use polytweet::metrics::{ScoreRecord, log_score};

use super::{RunArgs, load_scores};

/// Args for the score report command.
#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Embedding source name.
    #[arg(long)]
    embeds: String,

    /// Hidden dimension.
    #[arg(long)]
    h_dim: usize,

    /// Cross-stitch initialization scheme.
    #[arg(long, default_value = "balanced")]
    cross_stitch_init: String,

    /// Constraint weight.
    #[arg(long, default_value_t = 0.0)]
    constraint_weight: f64,

    /// Sigma.
    #[arg(long, default_value_t = 0.1)]
    sigma: f64,

    /// Optimizer name.
    #[arg(long, default_value = "sgd")]
    optimizer: String,

    /// Training score JSON file.
    #[arg(long)]
    train: PathBuf,

    /// Development score JSON file.
    #[arg(long)]
    dev: PathBuf,

    /// Test score JSON file.
    #[arg(long)]
    test: PathBuf,
}

impl ScoreArgs {
    /// Run the score report command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let train = load_scores(&self.train)?;
        let dev = load_scores(&self.dev)?;
        let test = load_scores(&self.test)?;

        let path = log_score(
            self.run.log_dir()?,
            &ScoreRecord {
                embeds: &self.embeds,
                languages: &self.run.langs,
                test_lang: &self.run.test_lang,
                task_names: &self.run.tasks,
                h_dim: self.h_dim,
                cross_stitch_init: &self.cross_stitch_init,
                constraint_weight: self.constraint_weight,
                sigma: self.sigma,
                optimizer: &self.optimizer,
                train: &train,
                dev: &dev,
                test: &test,
            },
        )?;
        log::info!("score: {}", path.display());
        Ok(())
    }
}
