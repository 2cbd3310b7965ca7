// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{start_site, TestApp};
use linkscan::domain::models::scan_settings::{ScanSettings, ScanSettingsPatch};
use linkscan::utils::errors::OrchestratorError;

#[tokio::test]
async fn test_first_start_seeds_default_settings() {
    let app = TestApp::new();
    let orchestrator = app.start().await;

    assert_eq!(orchestrator.settings(), &ScanSettings::default());

    let raw = std::fs::read_to_string(app.data_dir().join("settings")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored["checkExternal"], true);
    assert_eq!(stored["checkInternal"], true);
    assert_eq!(stored["timeoutMs"], 5000);
    assert_eq!(stored["historyLimit"], 100);
}

#[tokio::test]
async fn test_settings_and_history_survive_restart() {
    let site = start_site().await;
    let app = TestApp::new();
    let page = format!("{}/index.html", site);
    let mut orchestrator = app.start_on(&page).await;
    orchestrator
        .update_settings(&ScanSettingsPatch {
            timeout_ms: Some(500),
            history_limit: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    for _ in 0..3 {
        orchestrator.scan_page().await.unwrap();
    }

    let restarted = app.restart();
    let orchestrator = restarted.start().await;

    assert_eq!(orchestrator.settings().timeout_ms, 500);
    assert_eq!(orchestrator.settings().history_limit, 2);
    // Rendered once on start
    let history = restarted.presenter.last_history();
    assert_eq!(history.len(), 2);
    assert!(history[0].timestamp >= history[1].timestamp);
    assert!(history.iter().all(|e| e.url == page));
}

#[tokio::test]
async fn test_invalid_settings_are_not_persisted() {
    let app = TestApp::new();
    let mut orchestrator = app.start().await;

    let result = orchestrator
        .update_settings(&ScanSettingsPatch {
            history_limit: Some(0),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(OrchestratorError::InvalidSettings(_))));
    assert_eq!(orchestrator.settings(), &ScanSettings::default());

    let reloaded = app.restart().start().await;
    assert_eq!(reloaded.settings(), &ScanSettings::default());
}

#[tokio::test]
async fn test_clear_history_removes_stored_entries() {
    let site = start_site().await;
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/index.html", site)).await;
    orchestrator
        .update_settings(&ScanSettingsPatch {
            timeout_ms: Some(500),
            ..Default::default()
        })
        .await
        .unwrap();
    orchestrator.scan_page().await.unwrap();

    orchestrator.clear_history().await.unwrap();

    assert!(app.presenter.last_history().is_empty());
    assert!(orchestrator.refresh_history().await.is_empty());
    assert!(app.presenter.notified("History cleared"));
}

#[tokio::test]
async fn test_reopening_history_entry_rescans_that_page() {
    let site = start_site().await;
    let app = TestApp::new();
    let page = format!("{}/index.html", site);
    let mut orchestrator = app.start_on(&page).await;
    orchestrator
        .update_settings(&ScanSettingsPatch {
            timeout_ms: Some(500),
            ..Default::default()
        })
        .await
        .unwrap();
    orchestrator.scan_page().await.unwrap();

    let restarted = app.restart();
    let mut orchestrator = restarted.start().await;
    assert!(orchestrator.current_tab().is_none());

    let tab = orchestrator.open_history_entry(0).await.unwrap();
    assert_eq!(tab.url, page);
    assert_eq!(tab.title, "Test Site");

    let report = orchestrator.scan_page().await.unwrap();
    assert_eq!(report.broken_links.len(), 4);
    assert_eq!(restarted.presenter.last_history().len(), 2);

    assert!(matches!(
        orchestrator.open_history_entry(5).await,
        Err(OrchestratorError::HistoryIndexOutOfRange(5))
    ));
}
