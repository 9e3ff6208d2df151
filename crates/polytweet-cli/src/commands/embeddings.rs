use std::{error::Error, io::Write, path::PathBuf};

use polytweet::embeddings::load_embedding_source;

use crate::{config_args::ConfigArgs, input_output::OutputArgs, logging::LogArgs};

/// Args for the embeddings command.
#[derive(clap::Args, Debug)]
pub struct EmbeddingsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Embedding source name, from the config.
    #[arg(long, default_value = "fasttext")]
    source: String,

    /// Languages to load.
    #[arg(long = "lang", num_args = 1.., required = true)]
    langs: Vec<String>,

    /// Override the source's directory.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Lower-case words on load.
    #[arg(long)]
    lower: bool,

    /// Words whose vectors are printed.
    #[arg(long = "word", num_args = 1..)]
    words: Vec<String>,

    #[command(flatten)]
    output: OutputArgs,
}

impl EmbeddingsArgs {
    /// Run the embeddings command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        self.logging.setup_logging(3)?;

        let config = self.config.load_config()?;
        let mut source = config.embedding_source(&self.source)?.clone();
        if let Some(dir) = &self.dir {
            source = source.with_dir(dir);
        }
        if self.lower {
            source = source.with_lower(true);
        }

        let table = load_embedding_source(&source, &config.languages, &self.langs)?;

        let mut writer = self.output.open_writer()?;
        writeln!(
            writer,
            "dim: {}, words: {}, declared: {}",
            table.dim(),
            table.len(),
            table.declared_words()
        )?;

        for word in &self.words {
            match table.get(word) {
                Some(vector) => {
                    let cells: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
                    writeln!(writer, "{word} {}", cells.join(" "))?;
                }
                None => log::warn!("{word:?} is not in the table"),
            }
        }

        writer.flush()?;
        Ok(())
    }
}
