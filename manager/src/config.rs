use std::path::PathBuf;

use students_store::repository::DEFAULT_STORAGE_KEY;

pub const DATA_DIR_VAR: &str = "STUDENTS_DATA_DIR";
pub const STORAGE_KEY_VAR: &str = "STUDENTS_STORAGE_KEY";

const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Config {
            data_dir: non_blank(DATA_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            storage_key: non_blank(STORAGE_KEY_VAR).unwrap_or(DEFAULT_STORAGE_KEY.to_string()),
        }
    }
}
