//! Application state.
//!
//! Constructed once at startup from the configuration and shared with the
//! handlers via `Arc`; requests share nothing else.

use docsink_archive::Archive;
use docsink_core::Config;
use docsink_extract::AnalysisClient;

pub struct AppState {
    pub config: Config,
    pub analysis: AnalysisClient,
    pub archive: Archive,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let analysis = AnalysisClient::new(config.analysis_url.clone());
        let archive = Archive::new(config.archive_dir.clone());
        Self {
            config,
            analysis,
            archive,
        }
    }
}
