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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 进程级配置：存储位置、HTTP客户端和扫描并发。
/// 用户可见的扫描选项不在这里，而是作为持久化记录保存。
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 存储配置
    pub storage: StorageSettings,
    /// HTTP客户端配置
    pub http: HttpSettings,
    /// 扫描执行配置
    pub scan: ScanEngineSettings,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 设置和历史记录所在目录
    pub data_dir: String,
    /// 报告文件保存目录
    pub downloads_dir: String,
}

/// HTTP客户端配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 加载页面的超时时间（秒）
    pub page_timeout_secs: u64,
    /// 最大重定向次数
    pub max_redirects: usize,
    /// 页面正文读取上限（字节）
    pub max_page_bytes: usize,
}

impl HttpSettings {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }
}

/// 扫描执行配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScanEngineSettings {
    /// 每批并发检查的链接数
    pub batch_size: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和 `LINKSCAN__` 环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("LINKSCAN").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 仅包含默认值的配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            // Default storage settings
            .set_default("storage.data_dir", "./.linkscan")?
            .set_default("storage.downloads_dir", "./reports")?
            // Default HTTP settings
            .set_default(
                "http.user_agent",
                concat!("linkscan/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("http.page_timeout_secs", 15)?
            .set_default("http.max_redirects", 10)?
            .set_default("http.max_page_bytes", 5 * 1024 * 1024)?
            // Default scan settings
            .set_default("scan.batch_size", 5)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
