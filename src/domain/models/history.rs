// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 历史记录条目
///
/// 一次扫描的摘要。历史按时间倒序排列，索引0总是最近一次扫描。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// 页面标题
    pub title: String,
    /// 页面URL
    pub url: String,
    /// 扫描时间，以毫秒时间戳持久化
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// 损坏链接数量
    pub broken_links_count: usize,
}

impl HistoryEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>, broken_links_count: usize) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            timestamp: Utc::now(),
            broken_links_count,
        }
    }
}

/// 将条目插入到历史最前面，并从尾部裁剪到 `limit` 条
pub fn push_front_capped(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: usize) {
    history.insert(0, entry);
    history.truncate(limit);
}
