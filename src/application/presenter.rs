// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::history::HistoryEntry;
use crate::domain::models::link::ScanReport;
use crate::domain::models::scan_settings::ScanSettings;

/// 通知类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// 界面呈现端口
///
/// 编排器通过它渲染结果和发出短暂通知，具体的界面组件不在本库范围内
pub trait Presenter: Send + Sync {
    /// 显示或隐藏加载指示
    fn set_loading(&self, loading: bool);

    /// 启用或禁用报告下载
    fn set_download_enabled(&self, enabled: bool);

    /// 渲染损坏链接列表
    fn render_links(&self, report: &ScanReport);

    /// 扫描被中止时渲染的提示
    fn render_scan_failure(&self, message: &str);

    /// 渲染扫描历史
    fn render_history(&self, history: &[HistoryEntry]);

    /// 渲染当前设置
    fn render_settings(&self, settings: &ScanSettings);

    /// 短暂通知
    fn notify(&self, message: &str, kind: NotificationKind);
}
