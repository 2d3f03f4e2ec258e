// src/config.rs

use std::env;
use std::path::PathBuf;
use dotenvy::dotenv;

const OBJECTIVE_FILE: &str = "objective_questions.json";
const SUBJECTIVE_FILE: &str = "subjective_questions.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the question bank files.
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Pre-built UI served for any path the API does not match.
    pub static_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            data_dir,
            host,
            port,
            static_dir,
            log_dir,
            rust_log,
        }
    }

    /// Config rooted at `data_dir` with every other setting at its default.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: None,
            log_dir: PathBuf::from("logs"),
            rust_log: "info".to_string(),
        }
    }

    pub fn objective_path(&self) -> PathBuf {
        self.data_dir.join(OBJECTIVE_FILE)
    }

    pub fn subjective_path(&self) -> PathBuf {
        self.data_dir.join(SUBJECTIVE_FILE)
    }
}
