use std::path::PathBuf;

use polytweet::config::PolytweetConfig;

/// Config file arg group.
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// JSON config file; the built-in MLMA config when absent.
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the selected config.
    pub fn load_config(&self) -> Result<PolytweetConfig, Box<dyn std::error::Error>> {
        Ok(match &self.config {
            Some(path) => {
                log::debug!("config: {}", path.display());
                PolytweetConfig::load_path(path)?
            }
            None => PolytweetConfig::mlma(),
        })
    }
}
