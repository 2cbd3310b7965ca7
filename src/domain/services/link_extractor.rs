// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::link::CandidateLink;
use crate::domain::models::scan_settings::ScanSettings;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::{ParseError, Url};

/// 不会被检查的链接协议前缀
const SKIPPED_SCHEMES: [&str; 3] = ["javascript:", "mailto:", "tel:"];

/// 页面位置
///
/// 链接规范化所需的页面来源（origin）和当前路径所在的目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    origin: String,
    directory: String,
}

impl PageLocation {
    /// 从页面URL解析
    pub fn parse(page_url: &str) -> Result<Self, ParseError> {
        let url = Url::parse(page_url)?;
        let path = url.path();
        let directory = match path.rfind('/') {
            Some(idx) => path[..=idx].to_string(),
            None => "/".to_string(),
        };

        Ok(Self {
            origin: url.origin().ascii_serialization(),
            directory,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// 将 href 规范化为绝对URL并分类
    ///
    /// # 返回值
    ///
    /// 应跳过的 href 返回 `None`
    pub fn normalize(&self, href: &str) -> Option<CandidateLink> {
        if LinkExtractor::is_skipped(href) {
            return None;
        }

        let link = if href.starts_with("http://") || href.starts_with("https://") {
            CandidateLink {
                url: href.to_string(),
                is_external: !href.starts_with(&self.origin),
            }
        } else if href.starts_with('/') {
            CandidateLink {
                url: format!("{}{}", self.origin, href),
                is_external: false,
            }
        } else {
            CandidateLink {
                url: format!("{}{}{}", self.origin, self.directory, href),
                is_external: false,
            }
        };

        Some(link)
    }
}

/// 链接提取器
///
/// 负责从页面文档中提取、规范化、去重并按设置过滤候选链接
pub struct LinkExtractor;

impl LinkExtractor {
    /// 判断 href 是否属于不检查的类别：空、`#`、`javascript:`、`mailto:`、`tel:`
    pub fn is_skipped(href: &str) -> bool {
        href.is_empty()
            || href == "#"
            || SKIPPED_SCHEMES
                .iter()
                .any(|scheme| href.starts_with(scheme))
    }

    /// 按文档顺序取出所有 `a[href]` 的原始 href 值
    pub fn extract_hrefs(document: &Html) -> Vec<String> {
        let selector = match Selector::parse("a[href]") {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        document
            .select(&selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// 规范化并去重，先出现的链接保留其分类
    pub fn normalize_all<'a, I>(location: &PageLocation, hrefs: I) -> Vec<CandidateLink>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = HashSet::new();
        let mut links = Vec::new();

        for href in hrefs {
            let Some(link) = location.normalize(href) else {
                continue;
            };
            if seen.insert(link.url.clone()) {
                links.push(link);
            }
        }

        links
    }

    /// 按设置过滤内部/外部链接
    pub fn filter(links: Vec<CandidateLink>, settings: &ScanSettings) -> Vec<CandidateLink> {
        links
            .into_iter()
            .filter(|link| settings.should_check(link.is_external))
            .collect()
    }

    /// 从HTML中提取待检查的候选链接
    ///
    /// # 参数
    ///
    /// * `html` - 页面HTML
    /// * `page_url` - 页面URL
    /// * `settings` - 扫描设置快照
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<CandidateLink>)` - 去重并过滤后的候选链接，保持文档顺序
    /// * `Err(ParseError)` - 页面URL无法解析
    pub fn candidates(
        html: &str,
        page_url: &str,
        settings: &ScanSettings,
    ) -> Result<Vec<CandidateLink>, ParseError> {
        let location = PageLocation::parse(page_url)?;
        let document = Html::parse_document(html);
        let hrefs = Self::extract_hrefs(&document);
        let links = Self::normalize_all(&location, hrefs.iter().map(String::as_str));
        Ok(Self::filter(links, settings))
    }
}

#[cfg(test)]
#[path = "link_extractor_test.rs"]
mod tests;
