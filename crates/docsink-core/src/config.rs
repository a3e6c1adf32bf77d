//! Configuration module
//!
//! Configuration is read once from the process environment at startup and
//! injected into the processor components; business logic never performs
//! ambient environment lookups.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ANALYSIS_URL: &str = "http://localhost:9998";
const DEFAULT_ARCHIVE_DIR: &str = "completed";
const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub server_port: u16,
    /// Base URL of the remote document-analysis service
    pub analysis_url: String,
    /// Root directory of the completed archive
    pub archive_dir: PathBuf,
    /// Staging directory for in-flight uploads
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            analysis_url: env::var("ANALYSIS_URL")
                .unwrap_or_else(|_| DEFAULT_ANALYSIS_URL.to_string()),
            archive_dir: env::var("ARCHIVE_DIR")
                .unwrap_or_else(|_| DEFAULT_ARCHIVE_DIR.to_string())
                .into(),
            upload_dir: env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string())
                .into(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.analysis_url.trim().is_empty() {
            return Err(anyhow::anyhow!("ANALYSIS_URL must not be empty"));
        }
        if self.archive_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("ARCHIVE_DIR must not be empty"));
        }
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }
        Ok(())
    }
}
