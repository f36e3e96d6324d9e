use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use task_store::store::DEFAULT_FILE_NAME;

/// Environment variable naming the task file.
pub const FILE_ENV: &str = "TASK_CLI_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_path: PathBuf,
}

impl Config {
    /// Resolve settings: `--file`, then `$TASK_CLI_FILE`, then `./tasks.json`.
    pub fn resolve(file_flag: Option<PathBuf>) -> Self {
        Self::from_sources(file_flag, env::var_os(FILE_ENV))
    }

    fn from_sources(file_flag: Option<PathBuf>, file_env: Option<OsString>) -> Self {
        let storage_path = file_flag
            .or_else(|| file_env.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
        Self { storage_path }
    }
}
