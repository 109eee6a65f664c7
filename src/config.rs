// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf};

use dotenvy::dotenv;

/// Paper size used when neither the request nor the bank's exam blueprint sets one.
pub const DEFAULT_QUIZ_SIZE: usize = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `*.json` bank files.
    pub bank_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: PathBuf,
    /// Upper bound on `count` accepted by the quiz endpoints.
    pub max_quiz_size: usize,
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bank_dir: PathBuf::from("data/banks"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            rust_log: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            max_quiz_size: 200,
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let bank_dir = env::var("BANK_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.bank_dir);

        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind_addr);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let log_dir = env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        let max_quiz_size = env::var("MAX_QUIZ_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_quiz_size);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.cors_origins);

        Self {
            bank_dir,
            bind_addr,
            rust_log,
            log_dir,
            max_quiz_size,
            cors_origins,
        }
    }
}
