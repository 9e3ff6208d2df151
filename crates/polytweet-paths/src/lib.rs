//! # polytweet-paths
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod path_resolver;

/// Environment variable key to override the default data directory.
pub const POLYTWEET_DATA_DIR: &str = "POLYTWEET_DATA_DIR";
/// Environment variable key to override the default report log directory.
pub const POLYTWEET_LOG_DIR: &str = "POLYTWEET_LOG_DIR";

/// Default [`PathResolver`] for polytweet.
pub const POLYTWEET_PATHS: PathResolver = PathResolver {
    qualifier: "io.crates.polytweet",
    organization: "",
    application: "polytweet",
    data_env_vars: &[POLYTWEET_DATA_DIR],
    log_env_vars: &[POLYTWEET_LOG_DIR],
    log_subdir: "logs",
};
