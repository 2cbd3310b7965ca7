// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{start_site, TestApp, REFUSED_ORIGIN};
use linkscan::application::orchestrator::SCAN_FAILURE_MESSAGE;
use linkscan::application::report::CSV_HEADER;
use linkscan::domain::models::link::TIMEOUT_ERROR;
use linkscan::domain::models::scan_settings::ScanSettingsPatch;
use linkscan::utils::errors::OrchestratorError;

fn short_timeout() -> ScanSettingsPatch {
    ScanSettingsPatch {
        timeout_ms: Some(500),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_scan_reports_only_broken_links_in_page_order() {
    let site = start_site().await;
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/index.html", site)).await;
    orchestrator.update_settings(&short_timeout()).await.unwrap();

    let report = orchestrator.scan_page().await.unwrap();

    // ok, gone, fail, slow, external; the duplicate and the skipped hrefs are not checked
    assert_eq!(report.total_checked, 5);

    let urls: Vec<&str> = report.broken_links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/gone", site).as_str(),
            format!("{}/fail", site).as_str(),
            format!("{}/slow", site).as_str(),
            format!("{}/elsewhere", REFUSED_ORIGIN).as_str(),
        ]
    );

    let gone = &report.broken_links[0];
    assert_eq!(gone.status_code, 404);
    assert!(!gone.is_external);
    assert!(gone.error.is_none());

    assert_eq!(report.broken_links[1].status_code, 500);

    let slow = &report.broken_links[2];
    assert_eq!(slow.status_code, 0);
    assert_eq!(slow.error.as_deref(), Some(TIMEOUT_ERROR));

    let external = &report.broken_links[3];
    assert!(external.is_external);
    assert_eq!(external.status_code, 0);
    assert!(external.error.is_some());

    assert!(*app.presenter.download_enabled.lock().unwrap());
    assert_eq!(app.presenter.links.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_scan_records_history_with_page_title() {
    let site = start_site().await;
    let app = TestApp::new();
    let page = format!("{}/index.html", site);
    let mut orchestrator = app.start_on(&page).await;
    orchestrator.update_settings(&short_timeout()).await.unwrap();

    orchestrator.scan_page().await.unwrap();

    let history = app.presenter.last_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].title, "Test Site");
    assert_eq!(history[0].url, page);
    assert_eq!(history[0].broken_links_count, 4);

    let raw = std::fs::read_to_string(app.data_dir().join("history")).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["brokenLinksCount"], 4);
    assert!(stored[0]["timestamp"].is_i64());
}

#[tokio::test]
async fn test_disabling_external_checks_skips_them() {
    let site = start_site().await;
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/index.html", site)).await;
    orchestrator
        .update_settings(&ScanSettingsPatch {
            check_external: Some(false),
            timeout_ms: Some(500),
            ..Default::default()
        })
        .await
        .unwrap();

    let report = orchestrator.scan_page().await.unwrap();

    assert_eq!(report.total_checked, 4);
    assert!(report.broken_links.iter().all(|l| !l.is_external));
    assert_eq!(report.broken_links.len(), 3);
}

#[tokio::test]
async fn test_download_report_writes_csv_file() {
    let site = start_site().await;
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/index.html", site)).await;
    orchestrator.update_settings(&short_timeout()).await.unwrap();
    orchestrator.scan_page().await.unwrap();

    let filename = orchestrator.download_report().await.unwrap().unwrap();

    assert!(filename.starts_with("broken-links-"));
    assert!(filename.ends_with(".csv"));
    assert!(!filename.contains(':'));

    let csv = std::fs::read_to_string(app.downloads_dir().join(&filename)).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], format!("\"{}/gone\",404,\"Internal\"", site));
    assert_eq!(lines[3], format!("\"{}/slow\",ERR,\"Internal\"", site));
    assert!(lines[4].ends_with(",ERR,\"External\""));
    assert!(app.presenter.notified("Report downloaded successfully"));
}

#[tokio::test]
async fn test_unreachable_page_aborts_scan() {
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/index.html", REFUSED_ORIGIN)).await;

    let result = orchestrator.scan_page().await;

    assert!(matches!(result, Err(OrchestratorError::ScanFailed(_))));
    assert_eq!(
        app.presenter.failures.lock().unwrap().as_slice(),
        &[SCAN_FAILURE_MESSAGE.to_string()]
    );
    assert!(app.presenter.links.lock().unwrap().is_empty());
    assert!(!app.data_dir().join("history").exists());

    // Nothing to download after a failed scan
    assert_eq!(orchestrator.download_report().await.unwrap(), None);
    assert!(app.presenter.notified("No scan results to download"));
}

#[tokio::test]
async fn test_privileged_page_cannot_be_scanned() {
    let app = TestApp::new();
    let mut orchestrator = app.start_on("about:blank").await;

    let result = orchestrator.scan_page().await;

    assert!(matches!(result, Err(OrchestratorError::ScanFailed(_))));
    assert_eq!(orchestrator.current_tab().unwrap().title, "about:blank");
}

#[tokio::test]
async fn test_scan_without_tab_is_refused() {
    let app = TestApp::new();
    let mut orchestrator = app.start().await;

    let result = orchestrator.scan_page().await;

    assert!(matches!(result, Err(OrchestratorError::NoActiveTab)));
    assert!(app.presenter.notified("No active tab found"));
}

#[tokio::test]
async fn test_redirected_page_is_scanned_and_recorded_where_it_landed() {
    let site = start_site().await;
    let app = TestApp::new();
    let mut orchestrator = app.start_on(&format!("{}/home", site)).await;
    orchestrator.update_settings(&short_timeout()).await.unwrap();

    let report = orchestrator.scan_page().await.unwrap();

    assert_eq!(report.total_checked, 5);
    assert_eq!(report.broken_links[0].url, format!("{}/gone", site));
    let history = app.presenter.last_history();
    assert_eq!(history[0].url, format!("{}/index.html", site));
    assert_eq!(history[0].title, "Test Site");
}
