use std::{
    error::Error,
    io::Write,
    path::{Path, PathBuf},
};

use polytweet::{
    config::PolytweetConfig,
    data::{
        CorpusEncoder,
        EncodeOptions,
        EncodedCorpus,
        save_label_sequences_path,
        scan_label_space,
    },
    vocab::{
        LabelSpace,
        WordVocab,
        io::{load_word_vocab_path, save_word_vocab_path},
    },
};
use polytweet_paths::POLYTWEET_PATHS;

use crate::{config_args::ConfigArgs, input_output::OutputArgs, logging::LogArgs};

type T = u32;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Directory holding one sub-directory per language.
    ///
    /// Falls back to `$POLYTWEET_DATA_DIR`, then the user data dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Languages to encode with a growing vocabulary.
    #[arg(long = "train-lang", num_args = 1..)]
    train_langs: Vec<String>,

    /// Languages to encode against the frozen training vocabulary.
    #[arg(long = "eval-lang", num_args = 1..)]
    eval_langs: Vec<String>,

    /// Data directory for the evaluation languages; defaults to the data dir.
    #[arg(long)]
    eval_data_dir: Option<PathBuf>,

    /// Tasks to encode, in label column order.
    #[arg(long = "task", num_args = 1.., required = true)]
    tasks: Vec<String>,

    /// Build label maps from the training data instead of the config.
    #[arg(long)]
    scan_labels: bool,

    /// Replace number tokens with a shared placeholder.
    #[arg(long)]
    normalize: bool,

    /// Load the word vocabulary from a file instead of building it.
    #[arg(long, conflicts_with = "train_langs")]
    vocab_in: Option<PathBuf>,

    /// Save the training word vocabulary.
    #[arg(long)]
    vocab_out: Option<PathBuf>,

    /// Directory for decoded per-task label files of the training data.
    #[arg(long)]
    labels_out: Option<PathBuf>,

    /// Encoded examples, one JSON object per line.
    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        self.logging.setup_logging(3)?;

        if self.train_langs.is_empty() && self.vocab_in.is_none() {
            return Err("either --train-lang or --vocab-in is required".into());
        }

        let config = self.config.load_config()?;
        let data_dir = POLYTWEET_PATHS
            .resolve_data_dir(self.data_dir.as_ref())
            .ok_or("no data directory; pass --data-dir")?;
        log::info!("data dir: {}", data_dir.display());

        let label_space = if self.scan_labels {
            if self.train_langs.is_empty() {
                return Err("--scan-labels requires --train-lang".into());
            }
            scan_label_space(&config, &data_dir, &self.train_langs, &self.tasks)?
        } else {
            LabelSpace::from_specs(&config.tasks)?
        };
        let options = EncodeOptions::default().with_normalize(self.normalize);

        let mut writer = self.output.open_writer()?;

        let vocab = match &self.vocab_in {
            Some(path) => {
                log::info!("loading vocab: {}", path.display());
                load_word_vocab_path::<T, _>(path)?
            }
            None => {
                let (train, vocab) = CorpusEncoder::new(&config, &label_space, &data_dir)
                    .with_options(options)
                    .encode_train::<T, _, _>(&self.train_langs, &self.tasks)?;
                log::info!(
                    "train: {} examples; vocab size {}",
                    train.len(),
                    vocab.len()
                );

                if let Some(dir) = &self.labels_out {
                    self.write_label_files(&label_space, &train, dir)?;
                }
                write_examples(&mut writer, "train", &train)?;
                vocab
            }
        };

        if let Some(path) = &self.vocab_out {
            log::info!("saving vocab: {}", path.display());
            save_word_vocab_path(&vocab, path)?;
        }

        if !self.eval_langs.is_empty() {
            let eval_dir = self.eval_data_dir.as_deref().unwrap_or(&data_dir);
            let eval = self.encode_eval(&config, &label_space, eval_dir, options, &vocab)?;
            log::info!("eval: {} examples", eval.len());
            write_examples(&mut writer, "eval", &eval)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn encode_eval(
        &self,
        config: &PolytweetConfig,
        label_space: &LabelSpace,
        eval_dir: &Path,
        options: EncodeOptions,
        vocab: &WordVocab<T>,
    ) -> Result<EncodedCorpus<T>, Box<dyn Error>> {
        Ok(CorpusEncoder::new(config, label_space, eval_dir)
            .with_options(options)
            .encode_eval(&self.eval_langs, &self.tasks, vocab)?)
    }

    fn write_label_files(
        &self,
        label_space: &LabelSpace,
        corpus: &EncodedCorpus<T>,
        dir: &Path,
    ) -> Result<(), Box<dyn Error>> {
        std::fs::create_dir_all(dir)?;
        for name in &self.tasks {
            let path = dir.join(format!("{name}.txt"));
            log::info!("writing labels: {}", path.display());
            save_label_sequences_path(label_space.task(name)?, corpus.task_column(name), &path)?;
        }
        Ok(())
    }
}

fn write_examples(
    writer: &mut dyn Write,
    split: &str,
    corpus: &EncodedCorpus<T>,
) -> Result<(), Box<dyn Error>> {
    for example in corpus.examples() {
        let line = serde_json::json!({
            "split": split,
            "words": example.words,
            "labels": example.labels,
        });
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
