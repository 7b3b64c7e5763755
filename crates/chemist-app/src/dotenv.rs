//! Load environment variables from a `.env` file (KEY=VALUE lines).
//!
//! Variables already present in the environment are never overwritten.

use std::path::{Path, PathBuf};

/// Try `./.env`, then `<config dir>/chemist/.env`. The first file found wins.
pub fn load_dotenv() {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("chemist").join(".env"));
    }

    for path in &candidates {
        if load_dotenv_file(path) {
            return;
        }
    }
}

/// Apply one file. Returns false if it could not be read.
pub fn load_dotenv_file(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(key, value);
        }
    }
    true
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let key = key.trim().trim_start_matches("export ").trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
