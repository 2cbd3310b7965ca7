// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::link::{CheckLinkRequest, LinkStatus, ScanReport};
use crate::domain::models::page::Tab;
use crate::domain::models::scan_settings::ScanSettings;
use async_trait::async_trait;
use thiserror::Error;

/// 页面上下文错误
///
/// 页面无法接收消息：未加载完成、特权页面或已被关闭。此类错误会中止整次扫描。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// 页面未能加载
    #[error("Page unreachable: {0}")]
    Unreachable(String),
    /// 不允许注入脚本的特权页面
    #[error("Cannot scan privileged page: {0}")]
    Privileged(String),
    /// 标签页不存在
    #[error("Tab {0} not found")]
    NotFound(u64),
}

/// 链接状态检查器特质
///
/// 对应后台上下文的 `checkLink` 消息。实现必须对每个请求恰好返回一个结果，
/// 所有失败（包括超时）都折叠进 [`LinkStatus`]。
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// 检查单个链接
    async fn check_link(&self, request: CheckLinkRequest) -> LinkStatus;

    /// 检查器名称
    fn name(&self) -> &'static str;
}

/// 页面内容脚本特质
///
/// 对应页面上下文的 `scanLinks` 消息
#[async_trait]
pub trait ContentScript: Send + Sync {
    /// 在指定标签页内提取并检查链接
    async fn scan_links(&self, tab: &Tab, settings: &ScanSettings)
        -> Result<ScanReport, PageError>;
}

/// 标签页能力特质
#[async_trait]
pub trait TabProvider: Send + Sync {
    /// 当前活动标签页，不存在时返回 `None`
    async fn active_tab(&self) -> Option<Tab>;

    /// 打开新标签页并使其成为活动标签页
    async fn open_tab(&self, url: &str) -> Tab;
}
