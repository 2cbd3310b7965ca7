// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use linkscan::application::orchestrator::{Orchestrator, OrchestratorPorts};
use linkscan::application::presenter::{NotificationKind, Presenter};
use linkscan::config::settings::Settings;
use linkscan::domain::models::history::HistoryEntry;
use linkscan::domain::models::link::ScanReport;
use linkscan::domain::models::scan_settings::ScanSettings;
use linkscan::engines::page_engine::HttpPageEngine;
use linkscan::engines::reqwest_engine::ReqwestLinkChecker;
use linkscan::engines::traits::{LinkChecker, TabProvider};
use linkscan::infrastructure::repositories::history_repo_impl::HistoryRepositoryImpl;
use linkscan::infrastructure::repositories::settings_repo_impl::SettingsRepositoryImpl;
use linkscan::infrastructure::storage::{create_downloads_storage, create_state_storage};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A port nothing listens on, used for refused connections
pub const REFUSED_ORIGIN: &str = "http://127.0.0.1:1";

/// Presenter that keeps what it was asked to show
#[derive(Default)]
pub struct RecordingPresenter {
    pub links: Mutex<Vec<ScanReport>>,
    pub failures: Mutex<Vec<String>>,
    pub history: Mutex<Vec<Vec<HistoryEntry>>>,
    pub settings: Mutex<Vec<ScanSettings>>,
    pub notifications: Mutex<Vec<(String, NotificationKind)>>,
    pub download_enabled: Mutex<bool>,
}

impl RecordingPresenter {
    pub fn last_history(&self) -> Vec<HistoryEntry> {
        self.history.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn notified(&self, message: &str) -> bool {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .any(|(m, _)| m == message)
    }
}

impl Presenter for RecordingPresenter {
    fn set_loading(&self, _loading: bool) {}

    fn set_download_enabled(&self, enabled: bool) {
        *self.download_enabled.lock().unwrap() = enabled;
    }

    fn render_links(&self, report: &ScanReport) {
        self.links.lock().unwrap().push(report.clone());
    }

    fn render_scan_failure(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }

    fn render_history(&self, history: &[HistoryEntry]) {
        self.history.lock().unwrap().push(history.to_vec());
    }

    fn render_settings(&self, settings: &ScanSettings) {
        self.settings.lock().unwrap().push(settings.clone());
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifications
            .lock()
            .unwrap()
            .push((message.to_string(), kind));
    }
}

/// Serves a small site with a mix of healthy and broken links
pub async fn start_site() -> String {
    let index = format!(
        r##"<html><head><title>Test Site</title></head><body>
        <a href="/ok">ok</a>
        <a href="/gone">gone</a>
        <a href="/fail">fail</a>
        <a href="/slow">slow</a>
        <a href="{}/elsewhere">external</a>
        <a href="/ok">duplicate</a>
        <a href="javascript:void(0)">js</a>
        <a href="#top">anchor</a>
        </body></html>"##,
        REFUSED_ORIGIN
    );

    let app = Router::new()
        .route("/index.html", get(move || async move { Html(index) }))
        .route("/home", get(|| async { Redirect::permanent("/index.html") }))
        .route("/ok", get(|| async { "fine" }))
        .route("/gone", get(|| async { StatusCode::NOT_FOUND.into_response() }))
        .route(
            "/fail",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR.into_response() }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "late"
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Real components over temporary directories
pub struct TestApp {
    pub settings: Settings,
    pub engine: Arc<HttpPageEngine>,
    pub presenter: Arc<RecordingPresenter>,
    // Keep the directories alive
    _dir: Arc<TempDir>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::in_dir(Arc::new(tempfile::tempdir().unwrap()))
    }

    /// A fresh process over the same state directories
    pub fn restart(&self) -> Self {
        Self::in_dir(self._dir.clone())
    }

    fn in_dir(dir: Arc<TempDir>) -> Self {
        let mut settings = Settings::defaults().unwrap();
        settings.storage.data_dir = dir.path().join("state").to_string_lossy().into_owned();
        settings.storage.downloads_dir =
            dir.path().join("downloads").to_string_lossy().into_owned();
        settings.http.page_timeout_secs = 5;

        let checker: Arc<dyn LinkChecker> =
            Arc::new(ReqwestLinkChecker::from_settings(&settings.http).unwrap());
        let engine = Arc::new(HttpPageEngine::from_settings(&settings, checker).unwrap());

        Self {
            settings,
            engine,
            presenter: Arc::new(RecordingPresenter::default()),
            _dir: dir,
        }
    }

    pub fn downloads_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.storage.downloads_dir)
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.storage.data_dir)
    }

    /// Opens `url` in a tab and starts the orchestrator on it
    pub async fn start_on(&self, url: &str) -> Orchestrator {
        self.engine.open_tab(url).await;
        self.start().await
    }

    pub async fn start(&self) -> Orchestrator {
        let state = create_state_storage(&self.settings.storage);
        Orchestrator::start(OrchestratorPorts {
            tabs: self.engine.clone(),
            content: self.engine.clone(),
            settings: Arc::new(SettingsRepositoryImpl::new(state.clone())),
            history: Arc::new(HistoryRepositoryImpl::new(state)),
            downloads: create_downloads_storage(&self.settings.storage),
            presenter: self.presenter.clone(),
        })
        .await
    }
}
