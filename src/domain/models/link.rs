// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 状态检查器在超时时返回的错误描述
pub const TIMEOUT_ERROR: &str = "Timeout";

/// 候选链接
///
/// 从页面中提取、规范化并去重后等待检查的链接。仅在单次扫描内存在。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateLink {
    /// 规范化后的绝对URL
    pub url: String,
    /// 是否为外部链接
    pub is_external: bool,
}

/// `checkLink` 请求
#[derive(Debug, Clone)]
pub struct CheckLinkRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
}

/// `checkLink` 响应
///
/// 每个请求恰好产生一个响应，网络错误和超时都折叠进该结构。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStatus {
    pub url: String,
    /// HTTP状态码，请求未完成时为0
    pub status: u16,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkStatus {
    /// 收到响应
    pub fn from_status(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status,
            ok: status < 400,
            error: None,
        }
    }

    /// 请求失败
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: 0,
            ok: false,
            error: Some(error.into()),
        }
    }

    /// 请求超时
    pub fn timed_out(url: impl Into<String>) -> Self {
        Self::failed(url, TIMEOUT_ERROR)
    }

    pub fn is_timeout(&self) -> bool {
        self.error.as_deref() == Some(TIMEOUT_ERROR)
    }
}

/// 单个链接的检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub url: String,
    pub status_code: u16,
    pub is_external: bool,
    /// 检查失败、超时或状态码 >= 400 时为 true
    pub broken: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// 将检查器的响应与候选链接的分类合并
    pub fn from_status(link: &CandidateLink, status: LinkStatus) -> Self {
        let broken = !status.ok || status.status >= 400;
        Self {
            url: link.url.clone(),
            status_code: status.status,
            is_external: link.is_external,
            broken,
            error: if broken { status.error } else { None },
        }
    }

    /// 报告中使用的类型标签
    pub fn type_label(&self) -> &'static str {
        if self.is_external {
            "External"
        } else {
            "Internal"
        }
    }

    /// 状态码的显示形式，无状态码时为 `ERR`
    pub fn status_label(&self) -> String {
        if self.status_code == 0 {
            "ERR".to_string()
        } else {
            self.status_code.to_string()
        }
    }
}

/// `scanLinks` 响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// 仅包含损坏的链接
    pub broken_links: Vec<CheckResult>,
    /// 实际检查的链接总数（无论是否损坏）
    pub total_checked: usize,
}
