//! Shared test setup: an in-process app wired to a mock analysis service and
//! a temp-dir filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum_test::TestServer;
use docsink_api::{setup::routes::setup_routes, state::AppState};
use docsink_core::Config;
use tempfile::TempDir;

pub struct TestApp {
    pub server: TestServer,
    pub remote: mockito::ServerGuard,
    pub archive_dir: PathBuf,
    pub upload_dir: PathBuf,
    _tmp: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let remote = mockito::Server::new_async().await;

    let archive_dir = tmp.path().join("completed");
    let upload_dir = tmp.path().join("uploads");

    let config = Config {
        server_port: 0,
        analysis_url: remote.url(),
        archive_dir: archive_dir.clone(),
        upload_dir: upload_dir.clone(),
    };

    let state = Arc::new(AppState::new(config));
    let server = TestServer::new(setup_routes(state)).expect("start test server");

    TestApp {
        server,
        remote,
        archive_dir,
        upload_dir,
        _tmp: tmp,
    }
}

/// Names of the regular files directly under `dir` (empty when the directory
/// does not exist).
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
