//! Environment-derived configuration, collected once at startup.
//!
//! Everything the router and handlers need is carried in this struct instead
//! of being read from the environment at call sites.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::sandbox;

const DEFAULT_DATA_DIR: &str = "/data";
const DEFAULT_PORT: &str = "8000";
const DEFAULT_AIPROXY_URL: &str = "https://aiproxy.sanand.workers.dev/openai/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Sandbox root; every file argument must resolve under it.
    pub data_dir: PathBuf,
    pub port: u16,
    pub aiproxy_url: String,
    /// Bearer token for the AI proxy. May be empty, in which case the
    /// LLM-backed handlers fail at call time.
    pub aiproxy_token: String,
    /// Email passed to the datagen script.
    pub user_email: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let data_dir = absolutize(Path::new(data_dir.trim()))?;

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .trim()
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let aiproxy_url = env::var("AIPROXY_URL")
            .unwrap_or_else(|_| DEFAULT_AIPROXY_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();

        let aiproxy_token = env::var("AIPROXY_TOKEN")
            .unwrap_or_default()
            .trim()
            .to_string();

        let user_email = env::var("USER_EMAIL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            data_dir,
            port,
            aiproxy_url,
            aiproxy_token,
            user_email,
        })
    }
}

fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("cannot determine current directory")?
            .join(path)
    };
    Ok(sandbox::normalize(&absolute))
}
