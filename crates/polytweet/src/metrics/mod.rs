//! # Metrics
//!
//! Score averaging, and CSV score reports.

mod averages;
mod report;

#[doc(inline)]
pub use averages::*;
#[doc(inline)]
pub use report::*;
