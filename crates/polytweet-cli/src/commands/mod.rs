mod average;
mod embeddings;
mod encode;
mod report;

/// Subcommands for polytweet
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode language corpora into word ids and task labels.
    Encode(encode::EncodeArgs),

    /// Load pretrained embeddings and report their shape.
    Embeddings(embeddings::EmbeddingsArgs),

    /// Average task or language scores.
    Average(average::AverageArgs),

    /// Append rows to CSV score reports.
    Report(report::ReportArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Embeddings(cmd) => cmd.run(),
            Commands::Average(cmd) => cmd.run(),
            Commands::Report(cmd) => cmd.run(),
        }
    }
}
