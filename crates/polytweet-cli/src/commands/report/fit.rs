use std::{error::Error, path::PathBuf};

use polytweet::metrics::{FitRecord, log_fit};

use super::{RunArgs, load_scores};

/// Args for the fit report command.
#[derive(clap::Args, Debug)]
pub struct FitArgs {
    #[command(flatten)]
    run: RunArgs,

    /// The epoch number.
    #[arg(long)]
    epoch: usize,

    /// Training score JSON file.
    #[arg(long)]
    train: PathBuf,

    /// Development score JSON file.
    #[arg(long)]
    dev: PathBuf,
}

impl FitArgs {
    /// Run the fit report command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        let train = load_scores(&self.train)?;
        let dev = load_scores(&self.dev)?;

        let path = log_fit(
            self.run.log_dir()?,
            &FitRecord {
                epoch: self.epoch,
                languages: &self.run.langs,
                test_lang: &self.run.test_lang,
                task_names: &self.run.tasks,
                train: &train,
                dev: &dev,
            },
        )?;
        log::info!("epoch {}: {}", self.epoch, path.display());
        Ok(())
    }
}
