//! # App Path Resolver
//!
//! Static defaults for data and report log directory resolution.

use directories_next::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// The resolution order for data directory environment variables.
    pub data_env_vars: &'static [&'static str],

    /// The resolution order for log directory environment variables.
    pub log_env_vars: &'static [&'static str],

    /// The log directory, relative to the project data directory.
    pub log_subdir: &'static str,
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
    }

    /// Resolve the corpus data directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.data_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// ## Project Dirs Behavior
    ///
    /// |Platform | Value                                                                      | Example                                 |
    /// | ------- | -------------------------------------------------------------------------- | --------------------------------------- |
    /// | Linux   | `$XDG_DATA_HOME`/`_project_path_` or `$HOME`/.local/share/`_project_path_` | /home/alice/.local/share/polytweet      |
    /// | macOS   | `$HOME`/Library/Application Support/`_project_path_`                       | /Users/Alice/Library/Application Support/io.crates.polytweet |
    /// | Windows | `{FOLDERID_LocalAppData}`\\`_project_path_`\\data                          | C:\Users\Alice\AppData\Local\polytweet\data |
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        resolve(path, self.data_env_vars)
            .or_else(|| Some(self.project_dirs()?.data_dir().to_path_buf()))
    }

    /// Resolve the report log directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each `self.log_env_vars`; in order.
    /// 3. `self.project_dirs().data_dir()/{self.log_subdir}`, if present.
    /// 4. `None`
    pub fn resolve_log_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        resolve(path, self.log_env_vars)
            .or_else(|| Some(self.project_dirs()?.data_dir().join(self.log_subdir)))
    }
}

fn resolve<P: AsRef<Path>>(
    path: Option<P>,
    env_vars: &[&str],
) -> Option<PathBuf> {
    if let Some(path) = path.as_ref() {
        return Some(path.as_ref().to_path_buf());
    }

    env_vars
        .iter()
        .find_map(|env_var| env::var_os(env_var).map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const DATA_ENV1: &str = "_APP_PATH_DATA_ENV1";
    const DATA_ENV2: &str = "_APP_PATH_DATA_ENV2";
    const LOG_ENV: &str = "_APP_PATH_LOG_ENV";

    const TEST_CONFIG: PathResolver = PathResolver {
        qualifier: "io",
        organization: "crates",
        application: "example",
        data_env_vars: &[DATA_ENV1, DATA_ENV2],
        log_env_vars: &[LOG_ENV],
        log_subdir: "logs",
    };

    fn clear_env() {
        unsafe {
            for v in TEST_CONFIG.data_env_vars {
                env::remove_var(v);
            }
            for v in TEST_CONFIG.log_env_vars {
                env::remove_var(v);
            }
        }
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;
        let user_data_dir = PathBuf::from("/tmp/polytweet/data");
        let env_data_dir1 = PathBuf::from("/tmp/polytweet/env_data.1");
        let env_data_dir2 = PathBuf::from("/tmp/polytweet/env_data.2");

        clear_env();

        assert_eq!(
            TEST_CONFIG.resolve_data_dir(Some(user_data_dir.clone())),
            Some(user_data_dir.clone()),
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(pds.data_dir().to_path_buf())
        );

        // Lowest priority env var.
        unsafe {
            env::set_var(DATA_ENV2, &env_data_dir2);
        }
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_data_dir2.clone())
        );

        // Higher priority env var.
        unsafe {
            env::set_var(DATA_ENV1, &env_data_dir1);
        }
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(no_path.clone()),
            Some(env_data_dir1.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_data_dir(Some(user_data_dir.clone())),
            Some(user_data_dir.clone()),
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_resolve_log_dir() {
        let pds = TEST_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let no_path: Option<PathBuf> = None;
        let env_log_dir = PathBuf::from("/tmp/polytweet/env_logs");

        clear_env();

        assert_eq!(
            TEST_CONFIG.resolve_log_dir(no_path.clone()),
            Some(pds.data_dir().join("logs"))
        );

        // The data dir env vars do not move the log dir.
        unsafe {
            env::set_var(DATA_ENV1, "/tmp/polytweet/env_data.1");
        }
        assert_eq!(
            TEST_CONFIG.resolve_log_dir(no_path.clone()),
            Some(pds.data_dir().join("logs"))
        );

        unsafe {
            env::set_var(LOG_ENV, &env_log_dir);
        }
        assert_eq!(
            TEST_CONFIG.resolve_log_dir(no_path.clone()),
            Some(env_log_dir.clone())
        );
        assert_eq!(
            TEST_CONFIG.resolve_log_dir(Some("/tmp/polytweet/user_logs")),
            Some(PathBuf::from("/tmp/polytweet/user_logs"))
        );

        clear_env();
    }
}
