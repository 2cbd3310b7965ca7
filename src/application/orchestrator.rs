// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::presenter::{NotificationKind, Presenter};
use crate::application::report;
use crate::domain::models::history::HistoryEntry;
use crate::domain::models::link::{CheckResult, ScanReport};
use crate::domain::models::page::Tab;
use crate::domain::models::scan_settings::{ScanSettings, ScanSettingsPatch};
use crate::domain::repositories::history_repository::HistoryRepository;
use crate::domain::repositories::settings_repository::SettingsRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::engines::traits::{ContentScript, TabProvider};
use crate::infrastructure::metrics;
use crate::utils::errors::OrchestratorError;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::Validate;

/// 扫描失败时显示给用户的提示
pub const SCAN_FAILURE_MESSAGE: &str = "Failed to scan page. Make sure the page is fully loaded.";

/// 编排器依赖的外部能力
pub struct OrchestratorPorts {
    /// 标签页查询与创建
    pub tabs: Arc<dyn TabProvider>,
    /// 页面内容脚本
    pub content: Arc<dyn ContentScript>,
    /// 设置记录
    pub settings: Arc<dyn SettingsRepository>,
    /// 历史记录
    pub history: Arc<dyn HistoryRepository>,
    /// 报告下载目标
    pub downloads: Arc<dyn StorageRepository>,
    /// 界面呈现
    pub presenter: Arc<dyn Presenter>,
}

/// 扫描编排器
///
/// 驱动一次完整的扫描并管理所有持久化状态。
/// 当前设置、当前标签页和上一次扫描结果都是实例字段，只在 [`Orchestrator::start`] 中初始化。
pub struct Orchestrator {
    ports: OrchestratorPorts,
    settings: ScanSettings,
    current_tab: Option<Tab>,
    last_scan: Option<Vec<CheckResult>>,
}

impl Orchestrator {
    /// 启动编排器
    ///
    /// 读取设置（首次运行写入默认值）、查询活动标签页并渲染历史。
    /// 读取设置失败时使用默认值并发出通知，不会阻止启动。
    pub async fn start(ports: OrchestratorPorts) -> Self {
        let settings = match ports.settings.load_or_init().await {
            Ok(settings) => settings,
            Err(e) => {
                error!("Error loading settings: {}", e);
                ports
                    .presenter
                    .notify("Failed to load settings", NotificationKind::Error);
                ScanSettings::default()
            }
        };

        let current_tab = ports.tabs.active_tab().await;

        let orchestrator = Self {
            ports,
            settings,
            current_tab,
            last_scan: None,
        };

        orchestrator.ports.presenter.set_download_enabled(false);
        orchestrator.refresh_history().await;
        orchestrator
            .ports
            .presenter
            .render_settings(&orchestrator.settings);
        orchestrator
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn current_tab(&self) -> Option<&Tab> {
        self.current_tab.as_ref()
    }

    /// 上一次成功扫描发现的损坏链接
    pub fn last_scan(&self) -> Option<&[CheckResult]> {
        self.last_scan.as_deref()
    }

    /// 扫描当前页面
    ///
    /// # 返回值
    ///
    /// * `Ok(ScanReport)` - 扫描报告；保存历史失败只会产生通知
    /// * `Err(OrchestratorError)` - 没有活动标签页或页面不可达
    pub async fn scan_page(&mut self) -> Result<ScanReport, OrchestratorError> {
        let presenter = self.ports.presenter.clone();

        let Some(tab) = self.current_tab.clone() else {
            presenter.notify("No active tab found", NotificationKind::Error);
            return Err(OrchestratorError::NoActiveTab);
        };

        metrics::record_scan_started();
        presenter.set_download_enabled(false);
        presenter.set_loading(true);

        let report = match self.ports.content.scan_links(&tab, &self.settings).await {
            Ok(report) => report,
            Err(e) => {
                error!(url = %tab.url, "Error scanning page: {}", e);
                metrics::record_scan_failed();
                presenter.render_scan_failure(SCAN_FAILURE_MESSAGE);
                presenter.set_loading(false);
                return Err(e.into());
            }
        };

        self.last_scan = Some(report.broken_links.clone());
        presenter.render_links(&report);
        presenter.set_download_enabled(!report.broken_links.is_empty());

        let entry = HistoryEntry::new(&tab.title, &tab.url, report.broken_links.len());
        match self
            .ports
            .history
            .prepend(entry, self.settings.history_limit)
            .await
        {
            Ok(history) => presenter.render_history(&history),
            Err(e) => {
                error!("Error saving to history: {}", e);
                presenter.notify("Failed to save scan history", NotificationKind::Error);
            }
        }

        presenter.set_loading(false);
        info!(
            url = %tab.url,
            total_checked = report.total_checked,
            broken = report.broken_links.len(),
            "Page scan completed"
        );
        Ok(report)
    }

    /// 重新读取并渲染历史
    pub async fn refresh_history(&self) -> Vec<HistoryEntry> {
        match self.ports.history.list().await {
            Ok(history) => {
                self.ports.presenter.render_history(&history);
                history
            }
            Err(e) => {
                error!("Error loading history: {}", e);
                self.ports
                    .presenter
                    .notify("Failed to load history", NotificationKind::Error);
                Vec::new()
            }
        }
    }

    /// 清空历史
    pub async fn clear_history(&self) -> Result<(), OrchestratorError> {
        let presenter = &self.ports.presenter;
        match self.ports.history.clear().await {
            Ok(()) => {
                presenter.render_history(&[]);
                presenter.notify("History cleared", NotificationKind::Success);
                Ok(())
            }
            Err(e) => {
                error!("Error clearing history: {}", e);
                presenter.notify("Failed to clear history", NotificationKind::Error);
                Err(e.into())
            }
        }
    }

    /// 校验并保存设置
    ///
    /// 只有保存成功后才会替换内存中的设置
    pub async fn save_settings(&mut self, settings: ScanSettings) -> Result<(), OrchestratorError> {
        let presenter = self.ports.presenter.clone();

        if let Err(e) = settings.validate() {
            warn!("Rejected settings: {}", e);
            presenter.notify(&format!("Invalid settings: {}", e), NotificationKind::Error);
            return Err(e.into());
        }

        match self.ports.settings.save(&settings).await {
            Ok(()) => {
                self.settings = settings;
                presenter.render_settings(&self.settings);
                presenter.notify("Settings saved successfully", NotificationKind::Success);
                Ok(())
            }
            Err(e) => {
                error!("Error saving settings: {}", e);
                presenter.notify("Failed to save settings", NotificationKind::Error);
                Err(e.into())
            }
        }
    }

    /// 将部分修改合并到当前设置后保存
    pub async fn update_settings(
        &mut self,
        patch: &ScanSettingsPatch,
    ) -> Result<(), OrchestratorError> {
        let merged = patch.apply(&self.settings);
        self.save_settings(merged).await
    }

    /// 下载上一次扫描的报告
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(filename))` - 报告已保存
    /// * `Ok(None)` - 没有可下载的结果，用户已收到通知
    /// * `Err(OrchestratorError)` - 写入失败
    pub async fn download_report(&self) -> Result<Option<String>, OrchestratorError> {
        let presenter = &self.ports.presenter;

        let results = match (&self.current_tab, &self.last_scan) {
            (Some(_), Some(results)) if !results.is_empty() => results,
            _ => {
                presenter.notify("No scan results to download", NotificationKind::Error);
                return Ok(None);
            }
        };

        let csv = report::build_csv(results);
        let filename = report::report_filename(Utc::now());

        match self.ports.downloads.save(&filename, csv.as_bytes()).await {
            Ok(()) => {
                info!(filename = %filename, rows = results.len(), "Report written");
                presenter.notify("Report downloaded successfully", NotificationKind::Success);
                Ok(Some(filename))
            }
            Err(e) => {
                error!("Download error: {}", e);
                presenter.notify("Failed to download report", NotificationKind::Error);
                Err(e.into())
            }
        }
    }

    /// 在新标签页中打开历史条目的URL，并将其作为当前标签页
    ///
    /// 上一次扫描的结果属于旧页面，切换后不再可下载
    pub async fn open_history_entry(&mut self, index: usize) -> Result<Tab, OrchestratorError> {
        let history = match self.ports.history.list().await {
            Ok(history) => history,
            Err(e) => {
                error!("Error loading history: {}", e);
                self.ports
                    .presenter
                    .notify("Failed to load history", NotificationKind::Error);
                return Err(e.into());
            }
        };
        let entry = history
            .get(index)
            .ok_or(OrchestratorError::HistoryIndexOutOfRange(index))?;

        let tab = self.ports.tabs.open_tab(&entry.url).await;
        self.current_tab = Some(tab.clone());
        self.last_scan = None;
        self.ports.presenter.set_download_enabled(false);
        Ok(tab)
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
