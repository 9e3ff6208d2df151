use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" or no value writes to stdout.
    #[clap(long, short = 'o', default_value = None)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match &self.output {
            Some(p) if p.as_os_str() != "-" => Box::new(BufWriter::new(File::create(p)?)),
            _ => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}
