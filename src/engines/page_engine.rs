// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::link::ScanReport;
use crate::domain::models::page::Tab;
use crate::domain::models::scan_settings::ScanSettings;
use crate::domain::services::link_extractor::LinkExtractor;
use crate::domain::services::link_scanner::LinkScanner;
use crate::engines::traits::{ContentScript, LinkChecker, PageError, TabProvider};
use crate::utils::batch_runner::BatchRunner;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};
use url::Url;

/// 页面正文的默认读取上限（字节）
pub const DEFAULT_MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

/// 加载完成的页面
#[derive(Debug, Clone)]
struct PageDocument {
    /// 跟随重定向之后的最终URL，相对链接以它为基准
    url: String,
    html: String,
}

/// 已打开的标签页及其文档
struct LoadedTab {
    tab: Tab,
    /// 加载失败或特权页面时为错误
    document: Result<PageDocument, PageError>,
}

/// HTTP页面引擎
///
/// 通过HTTP加载页面充当"标签页"，并在加载好的文档上运行内容脚本逻辑
pub struct HttpPageEngine {
    client: reqwest::Client,
    page_timeout: Duration,
    max_page_bytes: usize,
    scanner: LinkScanner,
    tabs: RwLock<HashMap<u64, LoadedTab>>,
    active: RwLock<Option<u64>>,
    next_id: AtomicU64,
}

impl HttpPageEngine {
    /// 创建新的页面引擎
    ///
    /// # 参数
    ///
    /// * `client` - 加载页面使用的HTTP客户端
    /// * `page_timeout` - 加载单个页面的超时时间
    /// * `scanner` - 链接扫描服务
    pub fn new(client: reqwest::Client, page_timeout: Duration, scanner: LinkScanner) -> Self {
        Self {
            client,
            page_timeout,
            max_page_bytes: DEFAULT_MAX_PAGE_BYTES,
            scanner,
            tabs: RwLock::new(HashMap::new()),
            active: RwLock::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    /// 根据应用配置构建页面引擎
    pub fn from_settings(
        settings: &Settings,
        checker: Arc<dyn LinkChecker>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(settings.http.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(settings.http.max_redirects))
            .build()?;
        let scanner = LinkScanner::new(checker, BatchRunner::new(settings.scan.batch_size));
        Ok(Self::new(client, settings.http.page_timeout(), scanner)
            .with_max_page_bytes(settings.http.max_page_bytes))
    }

    /// 设置页面正文读取上限，超出部分被丢弃
    pub fn with_max_page_bytes(mut self, max_page_bytes: usize) -> Self {
        self.max_page_bytes = max_page_bytes;
        self
    }

    /// 加载页面文档
    ///
    /// 正文最多读取 `max_page_bytes` 字节，按UTF-8解码（无效字节被替换）
    async fn load_document(&self, url: &str) -> Result<PageDocument, PageError> {
        let parsed = Url::parse(url).map_err(|e| PageError::Unreachable(format!("{}: {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PageError::Privileged(url.to_string()));
        }

        let fetch = async {
            let mut response = self.client.get(parsed.as_str()).send().await?;
            let final_url = response.url().to_string();

            let mut body = Vec::new();
            while let Some(chunk) = response.chunk().await? {
                let room = self.max_page_bytes.saturating_sub(body.len());
                if chunk.len() > room {
                    body.extend_from_slice(&chunk[..room]);
                    warn!(url = %final_url, limit = self.max_page_bytes, "Page body truncated");
                    break;
                }
                body.extend_from_slice(&chunk);
            }

            Ok::<PageDocument, reqwest::Error>(PageDocument {
                url: final_url,
                html: String::from_utf8_lossy(&body).into_owned(),
            })
        };

        match tokio::time::timeout(self.page_timeout, fetch).await {
            Ok(Ok(document)) => Ok(document),
            Ok(Err(e)) => Err(PageError::Unreachable(e.to_string())),
            Err(_) => Err(PageError::Unreachable(format!(
                "{}: page load timed out",
                url
            ))),
        }
    }
}

/// 读取文档 `<title>`
fn document_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

#[async_trait]
impl TabProvider for HttpPageEngine {
    async fn active_tab(&self) -> Option<Tab> {
        let active = *self.active.read().await;
        let tabs = self.tabs.read().await;
        active.and_then(|id| tabs.get(&id)).map(|loaded| loaded.tab.clone())
    }

    async fn open_tab(&self, url: &str) -> Tab {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let document = self.load_document(url).await;

        // A loaded tab shows where the page landed after redirects
        let (title, location) = match &document {
            Ok(page) => (document_title(&page.html), page.url.clone()),
            Err(e) => {
                warn!(url, error = %e, "Tab opened without a scannable document");
                (None, url.to_string())
            }
        };

        let tab = Tab {
            id,
            title: title.unwrap_or_else(|| location.clone()),
            url: location,
        };

        self.tabs.write().await.insert(
            id,
            LoadedTab {
                tab: tab.clone(),
                document,
            },
        );
        *self.active.write().await = Some(id);

        info!(id, url = %tab.url, "Tab opened");
        tab
    }
}

#[async_trait]
impl ContentScript for HttpPageEngine {
    async fn scan_links(
        &self,
        tab: &Tab,
        settings: &ScanSettings,
    ) -> Result<ScanReport, PageError> {
        let page = {
            let tabs = self.tabs.read().await;
            let loaded = tabs.get(&tab.id).ok_or(PageError::NotFound(tab.id))?;
            loaded.document.clone()?
        };

        let candidates = LinkExtractor::candidates(&page.html, &page.url, settings)
            .map_err(|e| PageError::Unreachable(format!("{}: {}", page.url, e)))?;

        info!(url = %page.url, candidates = candidates.len(), "Scanning page links");
        Ok(self.scanner.scan(candidates, settings.timeout()).await)
    }
}
