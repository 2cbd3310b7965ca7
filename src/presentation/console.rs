// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::presenter::{NotificationKind, Presenter};
use crate::domain::models::history::HistoryEntry;
use crate::domain::models::link::ScanReport;
use crate::domain::models::scan_settings::ScanSettings;
use chrono::Local;
use console::{style, Term};
use std::sync::atomic::{AtomicBool, Ordering};

/// 界面面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Links,
    History,
    Settings,
}

/// 终端呈现实现
///
/// 与弹出窗口的标签页一样，只渲染当前面板；通知总是显示
pub struct ConsolePresenter {
    panel: Panel,
    out: Term,
    err: Term,
    download_enabled: AtomicBool,
}

impl ConsolePresenter {
    pub fn new(panel: Panel) -> Self {
        Self {
            panel,
            out: Term::stdout(),
            err: Term::stderr(),
            download_enabled: AtomicBool::new(false),
        }
    }

    pub fn download_enabled(&self) -> bool {
        self.download_enabled.load(Ordering::SeqCst)
    }

    fn line(&self, text: &str) {
        // Output errors are not actionable for the user
        let _ = self.out.write_line(text);
    }
}

impl Presenter for ConsolePresenter {
    fn set_loading(&self, loading: bool) {
        if loading {
            let _ = self
                .err
                .write_line(&style("Scanning links...").dim().to_string());
        }
    }

    fn set_download_enabled(&self, enabled: bool) {
        self.download_enabled.store(enabled, Ordering::SeqCst);
    }

    fn render_links(&self, report: &ScanReport) {
        if self.panel != Panel::Links {
            return;
        }

        self.line(&format!(
            "{} broken of {} checked",
            style(report.broken_links.len()).bold(),
            report.total_checked
        ));

        if report.broken_links.is_empty() {
            self.line("No broken links found");
            return;
        }

        for link in &report.broken_links {
            let detail = link
                .error
                .as_deref()
                .map(|e| format!("  ({})", e))
                .unwrap_or_default();
            self.line(&format!(
                "{:>4}  {:<8}  {}{}",
                style(link.status_label()).red(),
                link.type_label(),
                link.url,
                style(detail).dim()
            ));
        }
    }

    fn render_scan_failure(&self, message: &str) {
        self.line(&style(message).red().to_string());
    }

    fn render_history(&self, history: &[HistoryEntry]) {
        if self.panel != Panel::History {
            return;
        }

        self.line(&format!("History ({})", style(history.len()).bold()));
        if history.is_empty() {
            self.line("No history available");
            return;
        }

        for (index, entry) in history.iter().enumerate() {
            let when = entry.timestamp.with_timezone(&Local);
            self.line(&format!(
                "[{}] {}\n    {}\n    {}  {} broken links",
                index,
                style(&entry.title).bold(),
                entry.url,
                when.format("%Y-%m-%d %H:%M:%S"),
                entry.broken_links_count
            ));
        }
    }

    fn render_settings(&self, settings: &ScanSettings) {
        if self.panel != Panel::Settings {
            return;
        }

        self.line(&format!("check external links: {}", settings.check_external));
        self.line(&format!("check internal links: {}", settings.check_internal));
        self.line(&format!("timeout (ms):         {}", settings.timeout_ms));
        self.line(&format!("history limit:        {}", settings.history_limit));
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        let styled = match kind {
            NotificationKind::Success => style(format!("✓ {}", message)).green(),
            NotificationKind::Error => style(format!("✗ {}", message)).red(),
            NotificationKind::Info => style(format!("• {}", message)).cyan(),
        };
        let _ = self.err.write_line(&styled.to_string());
    }
}
