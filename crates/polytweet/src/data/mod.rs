//! # Corpus Data
//!
//! Each language's data lives in a single CSV file inside
//! `{data_dir}/{language.dir_name}/`; with a free-text column and one
//! column per task.
//!
//! ## Encoding A Corpus
//!
//! ```rust,no_run
//! use polytweet::{
//!     config::PolytweetConfig,
//!     data::CorpusEncoder,
//!     vocab::LabelSpace,
//! };
//!
//! fn example() -> polytweet::errors::PTResult<()> {
//!     let config = PolytweetConfig::mlma();
//!     let label_space = LabelSpace::from_specs(&config.tasks)?;
//!     let tasks = ["sentiment", "directness"];
//!
//!     let encoder = CorpusEncoder::new(&config, &label_space, "data/train");
//!     let (train, vocab) = encoder.encode_train::<u32, _, _>(&["en", "fr"], &tasks)?;
//!
//!     let encoder = CorpusEncoder::new(&config, &label_space, "data/test");
//!     let test = encoder.encode_eval(&["ar"], &tasks, &vocab)?;
//!
//!     assert_eq!(train.word_ids.len(), train.labels.len());
//!     assert_eq!(test.word_ids.len(), test.labels.len());
//!     Ok(())
//! }
//! ```

mod corpus_encoder;
mod label_io;
mod label_scan;
mod records;

#[doc(inline)]
pub use corpus_encoder::*;
#[doc(inline)]
pub use label_io::*;
#[doc(inline)]
pub use label_scan::*;
#[doc(inline)]
pub use records::*;
