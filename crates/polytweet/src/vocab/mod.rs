//! # Word and Label Vocabularies
//!
//! * [`WordVocab`] - the growable `word -> id` vocabulary, with the
//!   out-of-vocabulary sentinel at id `0`.
//! * [`WordIndexer`] - growing (training) and frozen (evaluation) indexing
//!   over a [`WordVocab`].
//! * [`TaskLabelMap`] / [`LabelSpace`] - per-task `label -> id` maps, and
//!   the single / multi-label encodings built from them.

pub mod io;
mod label_map;
mod normalize;
mod word_indexer;
mod word_vocab;

#[doc(inline)]
pub use label_map::*;
#[doc(inline)]
pub use normalize::*;
#[doc(inline)]
pub use word_indexer::*;
#[doc(inline)]
pub use word_vocab::*;
