//! # `polytweet` Multilingual Tweet Corpus Tools
//!
//! Data preparation and score reporting for multilingual, multi-task
//! tweet classification.
//!
//! See:
//! * [`data`] to encode per-language corpora into word ids and task labels.
//! * [`vocab`] for the word vocabulary, and the per-task label maps.
//! * [`embeddings`] to load pretrained per-language word embeddings.
//! * [`metrics`] to average scores, and append CSV score reports.
//! * [`config`] for the language, task, and embedding source tables.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::PTHash{*}`` type alias machinery.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Encoding Train And Test Corpora
//!
//! ```rust,no_run
//! use polytweet::config::PolytweetConfig;
//! use polytweet::data::CorpusEncoder;
//! use polytweet::vocab::LabelSpace;
//!
//! fn example() -> polytweet::errors::PTResult<()> {
//!     type T = u32;
//!
//!     let config = PolytweetConfig::mlma();
//!     let label_space = LabelSpace::from_specs(&config.tasks)?;
//!     let tasks = ["sentiment", "target"];
//!
//!     let (train, vocab) = CorpusEncoder::new(&config, &label_space, "data/train")
//!         .encode_train::<T, _, _>(&["en", "fr"], &tasks)?;
//!
//!     // Evaluation never grows the vocabulary; unseen words map to id 0.
//!     let test = CorpusEncoder::new(&config, &label_space, "data/test")
//!         .encode_eval(&["ar"], &tasks, &vocab)?;
//!
//!     println!("{} train, {} test examples", train.len(), test.len());
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod config;
pub mod data;
pub mod embeddings;
pub mod errors;
pub mod metrics;
pub mod types;
pub mod vocab;
