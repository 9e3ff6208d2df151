//! # Pretrained Embeddings
//!
//! Embedding sources are directories of per-language text files
//! (`wiki.en.vec`, `wiki.fr.vec`, ...); selected by language code.
//!
//! ## Loading Embeddings
//!
//! ```rust,no_run
//! use polytweet::{config::PolytweetConfig, embeddings::load_embeddings};
//!
//! fn example() -> polytweet::errors::PTResult<()> {
//!     let config = PolytweetConfig::mlma();
//!     let table = load_embeddings(&config, "fasttext", &["en", "fr"])?;
//!
//!     if let Some(vector) = table.get("hello") {
//!         assert_eq!(vector.len(), table.dim());
//!     }
//!     Ok(())
//! }
//! ```

mod embedding_loader;
mod embedding_table;

#[doc(inline)]
pub use embedding_loader::*;
#[doc(inline)]
pub use embedding_table::*;
