use std::{
    error::Error,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use polytweet::metrics::ScoreMap;
use polytweet_paths::POLYTWEET_PATHS;

use crate::logging::LogArgs;

mod fit;
mod score;

/// Subcommands for the report command.
#[derive(clap::Subcommand, Debug)]
pub enum ReportCommand {
    /// Append a per-epoch train/dev row.
    Fit(fit::FitArgs),

    /// Append an end-of-run train/dev/test row.
    Score(score::ScoreArgs),
}

/// Args for the report command.
#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(subcommand)]
    pub command: ReportCommand,
}

impl ReportArgs {
    /// Run the report command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        self.logging.setup_logging(3)?;

        match &self.command {
            ReportCommand::Fit(cmd) => cmd.run(),
            ReportCommand::Score(cmd) => cmd.run(),
        }
    }
}

/// The run shape arg group shared by the report commands.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Report root directory.
    ///
    /// Falls back to `$POLYTWEET_LOG_DIR`, then `logs/` under the user data dir.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Training languages.
    #[arg(long = "lang", num_args = 1.., required = true)]
    pub langs: Vec<String>,

    /// Evaluation language.
    #[arg(long)]
    pub test_lang: String,

    /// Tasks, in column order.
    #[arg(long = "task", num_args = 1.., required = true)]
    pub tasks: Vec<String>,
}

impl RunArgs {
    /// Resolve the report root directory.
    pub fn log_dir(&self) -> Result<PathBuf, Box<dyn Error>> {
        Ok(POLYTWEET_PATHS
            .resolve_log_dir(self.log_dir.as_ref())
            .ok_or("no log directory; pass --log-dir")?)
    }
}

/// Load a JSON score map file.
pub fn load_scores(path: &Path) -> Result<ScoreMap, Box<dyn Error>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
